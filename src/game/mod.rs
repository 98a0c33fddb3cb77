pub mod entity;
pub mod grid;
pub mod input;
pub mod session;
pub mod wave;

pub use entity::Direction;
pub use grid::{CellSize, Grid, Pos};
pub use session::{GameOverCause, Session, StepOutcome};
