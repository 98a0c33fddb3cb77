use thiserror::Error;

/// Terminal columns and rows covered by one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellSize {
    pub width: u16,
    pub height: u16,
}

impl Default for CellSize {
    // Terminal glyphs are about twice as tall as they are wide
    fn default() -> Self {
        CellSize { width: 2, height: 1 }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("cell size must be non-zero, got {width}x{height}")]
    ZeroCellSize { width: u16, height: u16 },
    #[error("surface of {cols}x{rows} is smaller than one {cell_width}x{cell_height} cell")]
    SurfaceTooSmall {
        cols: u16,
        rows: u16,
        cell_width: u16,
        cell_height: u16,
    },
}

/// Integer grid coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pos {
    pub x: i32,
    pub y: i32,
}

impl Pos {
    pub const fn new(x: i32, y: i32) -> Self {
        Pos { x, y }
    }
}

/// Playfield dimensions, fixed for the lifetime of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    cell: CellSize,
    width: i32,
    height: i32,
}

impl Grid {
    /// Derives the grid from a surface measured in terminal cells.
    ///
    /// Each axis is floor-divided by the cell size. Surfaces that cannot hold
    /// a single cell are rejected.
    pub fn from_surface(cols: u16, rows: u16, cell: CellSize) -> Result<Self, GridError> {
        if cell.width == 0 || cell.height == 0 {
            return Err(GridError::ZeroCellSize {
                width: cell.width,
                height: cell.height,
            });
        }
        let width = cols / cell.width;
        let height = rows / cell.height;
        if width == 0 || height == 0 {
            return Err(GridError::SurfaceTooSmall {
                cols,
                rows,
                cell_width: cell.width,
                cell_height: cell.height,
            });
        }
        Ok(Grid {
            cell,
            width: i32::from(width),
            height: i32::from(height),
        })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn cell_size(&self) -> CellSize {
        self.cell
    }

    pub fn center(&self) -> Pos {
        Pos::new(self.width / 2, self.height / 2)
    }

    /// Wraps both axes into the playfield.
    pub fn wrap(&self, pos: Pos) -> Pos {
        Pos::new(wrap(pos.x, self.width), wrap(pos.y, self.height))
    }
}

/// Euclidean wrap of `c` into `[0, |n|)`. A zero bound yields 0.
pub fn wrap(c: i32, n: i32) -> i32 {
    c.checked_rem_euclid(n).unwrap_or(0)
}
