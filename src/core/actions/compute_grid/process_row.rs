use crate::core::actions::compute_grid::ports::escape_algorithm::EscapeAlgorithm;
use crate::core::data::row_result::RowResult;

/// Evaluates every column of one grid row and tracks the row-local
/// extrema.
///
/// The running minimum starts at `max_iterations` and the running maximum
/// at 0, so a row of uniform counts degenerates to min == max rather than
/// to garbage seeds.
#[must_use]
pub fn process_row<Alg: EscapeAlgorithm>(row: u32, cols: u32, algorithm: &Alg) -> RowResult {
    let mut its = Vec::with_capacity(cols as usize);
    let mut min_its = algorithm.max_iterations();
    let mut max_its = 0;

    for col in 0..cols {
        let n = algorithm.evaluate(row, col);
        min_its = min_its.min(n);
        max_its = max_its.max(n);
        its.push(n);
    }

    RowResult::new(row, min_its, max_its, its)
}
