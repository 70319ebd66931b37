use crate::core::data::grid_size::GridSize;

/// Fully assembled iteration grid with the global extrema observed across
/// all cells. Built by the coordinator after every row has reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridResult {
    size: GridSize,
    its: Vec<u32>,
    min_its: u32,
    max_its: u32,
}

impl GridResult {
    #[must_use]
    pub fn new(size: GridSize, its: Vec<u32>, min_its: u32, max_its: u32) -> Self {
        Self {
            size,
            its,
            min_its,
            max_its,
        }
    }

    #[must_use]
    pub fn size(&self) -> GridSize {
        self.size
    }

    /// Row-major flat grid: cell (row, col) is at `row * cols + col`.
    #[must_use]
    pub fn its(&self) -> &[u32] {
        &self.its
    }

    #[must_use]
    pub fn min_its(&self) -> u32 {
        self.min_its
    }

    #[must_use]
    pub fn max_its(&self) -> u32 {
        self.max_its
    }
}
