use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum GridSizeError {
    TooSmall { rows: u32, cols: u32 },
}

impl fmt::Display for GridSizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooSmall { rows, cols } => {
                write!(f, "grid must be at least 2x2 cells: got {}x{}", rows, cols)
            }
        }
    }
}

impl Error for GridSizeError {}

/// Fixed dimensions of the plotting grid.
///
/// Both dimensions must be at least 2: the cell-to-plane transform divides
/// by `rows - 1` and `cols - 1`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct GridSize {
    rows: u32,
    cols: u32,
}

impl GridSize {
    pub fn new(rows: u32, cols: u32) -> Result<Self, GridSizeError> {
        if rows < 2 || cols < 2 {
            return Err(GridSizeError::TooSmall { rows, cols });
        }

        Ok(Self { rows, cols })
    }

    #[must_use]
    pub fn rows(&self) -> u32 {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> u32 {
        self.cols
    }

    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.rows as usize * self.cols as usize
    }

    /// Index of cell (row, col) in a row-major flat grid.
    #[must_use]
    pub fn flat_index(&self, row: u32, col: u32) -> usize {
        row as usize * self.cols as usize + col as usize
    }
}
