use crate::core::actions::compute_grid::ports::escape_algorithm::EscapeAlgorithm;
use crate::core::actions::compute_grid::process_row::process_row;
use crate::core::data::grid_result::GridResult;
use crate::core::data::grid_size::GridSize;
use crate::core::data::row_result::RowResult;
use std::sync::mpsc;
use std::thread;

/// Folds row results into the flat grid and the global extrema.
///
/// Placement uses the row index carried by each result, so arrival order
/// is irrelevant. The caller guarantees the iterator yields exactly one
/// result per grid row.
pub(crate) fn assemble(
    size: GridSize,
    max_iterations: u32,
    rows: impl Iterator<Item = RowResult>,
) -> GridResult {
    let cols = size.cols() as usize;
    let mut its = vec![0u32; size.cell_count()];
    let mut min_its = max_iterations;
    let mut max_its = 0;
    let mut received = 0u32;

    for row in rows {
        min_its = min_its.min(row.min_its());
        max_its = max_its.max(row.max_its());

        let start = size.flat_index(row.row(), 0);
        its[start..start + cols].copy_from_slice(row.its());
        received += 1;
    }

    debug_assert_eq!(received, size.rows(), "coordinator lost a row result");

    GridResult::new(size, its, min_its, max_its)
}

/// Computes the full iteration grid with one worker thread per row.
///
/// Workers send their `RowResult` through a channel; the coordinator
/// blocks until all of them have reported, then assembles the grid. Rows
/// are purely CPU-bound and always terminate, so there is no timeout and
/// no cancellation path.
#[must_use]
pub fn compute_grid<Alg>(size: GridSize, algorithm: &Alg) -> GridResult
where
    Alg: EscapeAlgorithm + Sync,
{
    let (tx, rx) = mpsc::channel::<RowResult>();

    thread::scope(|scope| {
        for row in 0..size.rows() {
            let tx = tx.clone();
            scope.spawn(move || {
                tx.send(process_row(row, size.cols(), algorithm))
                    .expect("grid coordinator hung up before collecting all rows");
            });
        }

        // The clones above are the only live senders once this drops, so
        // the receiving iterator ends exactly after the last row reports.
        drop(tx);

        assemble(size, algorithm.max_iterations(), rx.iter())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct StubSumAlgorithm {
        max_iterations: u32,
    }

    impl EscapeAlgorithm for StubSumAlgorithm {
        fn evaluate(&self, row: u32, col: u32) -> u32 {
            row + col
        }

        fn max_iterations(&self) -> u32 {
            self.max_iterations
        }
    }

    #[test]
    fn test_grid_cells_are_placed_by_row_index() {
        let algorithm = StubSumAlgorithm { max_iterations: 100 };
        let size = GridSize::new(3, 4).unwrap();
        let grid = compute_grid(size, &algorithm);

        for row in 0..3 {
            for col in 0..4 {
                assert_eq!(grid.its()[size.flat_index(row, col)], row + col);
            }
        }
    }

    #[test]
    fn test_global_extrema_match_true_extrema() {
        let algorithm = StubSumAlgorithm { max_iterations: 100 };
        let size = GridSize::new(5, 7).unwrap();
        let grid = compute_grid(size, &algorithm);

        let true_min = *grid.its().iter().min().unwrap();
        let true_max = *grid.its().iter().max().unwrap();

        assert_eq!(grid.min_its(), true_min);
        assert_eq!(grid.max_its(), true_max);
        assert_eq!(grid.min_its(), 0);
        assert_eq!(grid.max_its(), 10);
    }

    #[test]
    fn test_grid_has_one_value_per_cell() {
        let algorithm = StubSumAlgorithm { max_iterations: 100 };
        let size = GridSize::new(9, 6).unwrap();
        let grid = compute_grid(size, &algorithm);

        assert_eq!(grid.its().len(), size.cell_count());
    }

    #[test]
    fn test_assemble_is_arrival_order_independent() {
        let size = GridSize::new(3, 2).unwrap();
        let rows = vec![
            RowResult::new(2, 4, 5, vec![4, 5]),
            RowResult::new(0, 0, 1, vec![0, 1]),
            RowResult::new(1, 2, 3, vec![2, 3]),
        ];

        let grid = assemble(size, 100, rows.into_iter());

        assert_eq!(grid.its(), &[0, 1, 2, 3, 4, 5]);
        assert_eq!(grid.min_its(), 0);
        assert_eq!(grid.max_its(), 5);
    }
}
