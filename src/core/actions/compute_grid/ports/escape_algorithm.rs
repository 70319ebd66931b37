/// Per-cell escape evaluation, the seam between the iteration grid
/// machinery and a concrete fractal recursion.
///
/// Implementations must be pure: `evaluate` is called concurrently from
/// many row workers with disjoint inputs and no synchronization.
pub trait EscapeAlgorithm {
    /// Escape iteration count for the given cell, in `[0, max_iterations]`.
    /// Total over the grid domain; `max_iterations` means the point never
    /// escaped within the budget.
    fn evaluate(&self, row: u32, col: u32) -> u32;

    /// Upper bound of `evaluate`, used to seed running minima.
    fn max_iterations(&self) -> u32;
}
