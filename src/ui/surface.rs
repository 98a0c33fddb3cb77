use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;

use crate::game::CellSize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Composites `self` over `below` with the given opacity.
    pub fn over(self, below: Rgb, alpha: f64) -> Rgb {
        let a = alpha.clamp(0.0, 1.0);
        let mix = |top: u8, bottom: u8| -> u8 {
            (f64::from(top) * a + f64::from(bottom) * (1.0 - a)).round() as u8
        };
        Rgb(mix(self.0, below.0), mix(self.1, below.1), mix(self.2, below.2))
    }
}

impl From<Rgb> for Color {
    fn from(c: Rgb) -> Self {
        Color::Rgb(c.0, c.1, c.2)
    }
}

/// Point in grid space. Fractional parts address positions inside a cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Drawing target for the playfield, addressed in grid cells.
pub trait Surface {
    fn clear(&mut self);
    /// Fills the cell-sized square whose top-left corner is `pos`.
    fn fill_cell(&mut self, pos: Point, color: Rgb, alpha: f64);
    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgb);
}

const DOT: &str = "●";

/// Surface backed by a region of a ratatui buffer. Each grid cell covers
/// `cell.width` x `cell.height` terminal cells; anything outside `area` is clipped.
pub struct TerminalSurface<'a> {
    buf: &'a mut Buffer,
    area: Rect,
    cell: CellSize,
    background: Rgb,
}

impl<'a> TerminalSurface<'a> {
    pub fn new(buf: &'a mut Buffer, area: Rect, cell: CellSize, background: Rgb) -> Self {
        // Never write outside the buffer even if the caller's rect is stale
        let area = area.intersection(buf.area);
        TerminalSurface {
            buf,
            area,
            cell,
            background,
        }
    }

    /// Terminal coordinate for a grid-space offset, if it lands inside the area.
    fn terminal_xy(&self, col: i64, row: i64) -> Option<(u16, u16)> {
        if col < 0 || row < 0 || col >= i64::from(self.area.width) || row >= i64::from(self.area.height) {
            return None;
        }
        Some((self.area.x + col as u16, self.area.y + row as u16))
    }

    fn bg_at(&self, x: u16, y: u16) -> Rgb {
        match self.buf.cell((x, y)).map(|cell| cell.bg) {
            Some(Color::Rgb(r, g, b)) => Rgb(r, g, b),
            _ => self.background,
        }
    }
}

impl Surface for TerminalSurface<'_> {
    fn clear(&mut self) {
        let bg = Color::from(self.background);
        for y in self.area.top()..self.area.bottom() {
            for x in self.area.left()..self.area.right() {
                if let Some(cell) = self.buf.cell_mut((x, y)) {
                    cell.reset();
                    cell.set_symbol(" ").set_bg(bg);
                }
            }
        }
    }

    fn fill_cell(&mut self, pos: Point, color: Rgb, alpha: f64) {
        let cw = i64::from(self.cell.width);
        let ch = i64::from(self.cell.height);
        let col0 = pos.x.floor() as i64 * cw;
        let row0 = pos.y.floor() as i64 * ch;
        for row in row0..row0 + ch {
            for col in col0..col0 + cw {
                let Some((x, y)) = self.terminal_xy(col, row) else { continue };
                let blended = color.over(self.bg_at(x, y), alpha);
                if let Some(cell) = self.buf.cell_mut((x, y)) {
                    cell.set_bg(blended.into());
                }
            }
        }
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgb) {
        if radius <= 0.0 {
            return;
        }
        // Terminal cells are coarser than the circle, so it becomes one glyph
        let col = (center.x * f64::from(self.cell.width) - 0.5).floor() as i64;
        let row = (center.y * f64::from(self.cell.height) - 0.5).floor() as i64;
        let Some((x, y)) = self.terminal_xy(col, row) else { return };
        if let Some(cell) = self.buf.cell_mut((x, y)) {
            cell.set_symbol(DOT).set_fg(color.into());
        }
    }
}
