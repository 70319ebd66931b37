/// Output of one row worker: the escape iteration count of every cell in
/// the row, plus the row-local extrema.
///
/// Produced exactly once per row, consumed exactly once by the coordinator,
/// immutable after creation. Carries its own row index so the coordinator
/// can place it regardless of arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowResult {
    row: u32,
    min_its: u32,
    max_its: u32,
    its: Vec<u32>,
}

impl RowResult {
    #[must_use]
    pub fn new(row: u32, min_its: u32, max_its: u32, its: Vec<u32>) -> Self {
        Self {
            row,
            min_its,
            max_its,
            its,
        }
    }

    #[must_use]
    pub fn row(&self) -> u32 {
        self.row
    }

    #[must_use]
    pub fn min_its(&self) -> u32 {
        self.min_its
    }

    #[must_use]
    pub fn max_its(&self) -> u32 {
        self.max_its
    }

    #[must_use]
    pub fn its(&self) -> &[u32] {
        &self.its
    }
}
