use crate::core::actions::compute_grid::compute_grid::assemble;
use crate::core::actions::compute_grid::ports::escape_algorithm::EscapeAlgorithm;
use crate::core::actions::compute_grid::process_row::process_row;
use crate::core::data::grid_result::GridResult;
use crate::core::data::grid_size::GridSize;

/// Single-threaded reference version of [`compute_grid`]: identical
/// aggregation, rows evaluated in order on the calling thread. Kept as the
/// oracle for the concurrent strategies and for benchmarking.
///
/// [`compute_grid`]: crate::core::actions::compute_grid::compute_grid::compute_grid
#[must_use]
pub fn compute_grid_serial<Alg: EscapeAlgorithm>(size: GridSize, algorithm: &Alg) -> GridResult {
    assemble(
        size,
        algorithm.max_iterations(),
        (0..size.rows()).map(|row| process_row(row, size.cols(), algorithm)),
    )
}
