use rand::Rng;

use crate::game::{Pos, Session};
use crate::ui::surface::{Point, Rgb, Surface};

pub const BACKGROUND: Rgb = Rgb(0x2a, 0x2a, 0x2a);
const FOG: Rgb = Rgb(0, 0, 0);
const FOG_ALPHA: f64 = 0.5;
const FOG_CHANCE: f64 = 0.01;
const TRAIL: Rgb = Rgb(139, 0, 0);
const PELLET: Rgb = Rgb(255, 255, 255);
const PELLET_RADIUS: f64 = 0.25;
const INVADER: Rgb = Rgb(0, 255, 0);

fn corner(pos: Pos) -> Point {
    Point {
        x: f64::from(pos.x),
        y: f64::from(pos.y),
    }
}

/// Paints one frame of the playfield. Fog is rerolled from `fog_rng` every
/// call and leaves no trace in the session.
pub fn draw<S: Surface, R: Rng>(session: &Session, surface: &mut S, fog_rng: &mut R) {
    surface.clear();

    let grid = session.grid();
    for x in 0..grid.width() {
        for y in 0..grid.height() {
            if fog_rng.gen_bool(FOG_CHANCE) {
                surface.fill_cell(corner(Pos::new(x, y)), FOG, FOG_ALPHA);
            }
        }
    }

    // Head fully opaque, fading towards the tail
    let trail = &session.player().trail;
    let len = trail.len() as f64;
    for (i, segment) in trail.iter().enumerate() {
        let alpha = 1.0 - i as f64 / len;
        surface.fill_cell(corner(*segment), TRAIL, alpha);
    }

    for pellet in session.pellets() {
        let center = Point {
            x: f64::from(pellet.pos.x) + 0.5,
            y: f64::from(pellet.pos.y) + 0.5,
        };
        surface.fill_circle(center, PELLET_RADIUS, PELLET);
    }

    for invader in session.invaders() {
        let pos = Point {
            x: f64::from(invader.x),
            y: invader.y,
        };
        surface.fill_cell(pos, INVADER, 1.0);
    }
}
