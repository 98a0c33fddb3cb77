use clap::Parser;

use crate::game::CellSize;

#[derive(Debug, Parser)]
#[command(name = "trail-invaders", version, about = "Grow a trail, dodge the invaders")]
pub struct Config {
    /// Seed for pellet and invader placement (random if omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Milliseconds between frames
    #[arg(long, default_value_t = 16, value_parser = clap::value_parser!(u64).range(1..))]
    pub frame_ms: u64,

    /// Terminal columns per grid cell
    #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u16).range(1..))]
    pub cell_width: u16,

    /// Terminal rows per grid cell
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u16).range(1..))]
    pub cell_height: u16,
}

impl Config {
    pub fn cell_size(&self) -> CellSize {
        CellSize {
            width: self.cell_width,
            height: self.cell_height,
        }
    }

    pub fn seed_or_random(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }
}
