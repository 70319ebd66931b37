use crate::core::actions::compute_grid::compute_grid::assemble;
use crate::core::actions::compute_grid::ports::escape_algorithm::EscapeAlgorithm;
use crate::core::actions::compute_grid::process_row::process_row;
use crate::core::data::grid_result::GridResult;
use crate::core::data::grid_size::GridSize;
use rayon::prelude::*;

/// Work-stealing alternative to the thread-per-row coordinator: rows are
/// scheduled on rayon's pool instead of one OS thread each. Same contract,
/// kept for benchmarking the strategies against each other.
#[must_use]
pub fn compute_grid_rayon<Alg>(size: GridSize, algorithm: &Alg) -> GridResult
where
    Alg: EscapeAlgorithm + Sync,
{
    let rows: Vec<_> = (0..size.rows())
        .into_par_iter()
        .map(|row| process_row(row, size.cols(), algorithm))
        .collect();

    assemble(size, algorithm.max_iterations(), rows.into_iter())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::compute_grid::compute_grid_serial::compute_grid_serial;

    #[derive(Debug)]
    struct StubCheckerAlgorithm {
        max_iterations: u32,
    }

    impl EscapeAlgorithm for StubCheckerAlgorithm {
        fn evaluate(&self, row: u32, col: u32) -> u32 {
            (row + col) % 2 * self.max_iterations
        }

        fn max_iterations(&self) -> u32 {
            self.max_iterations
        }
    }

    #[test]
    fn test_rayon_grid_matches_serial_oracle() {
        let algorithm = StubCheckerAlgorithm { max_iterations: 64 };
        let size = GridSize::new(10, 14).unwrap();

        let serial = compute_grid_serial(size, &algorithm);
        let rayon = compute_grid_rayon(size, &algorithm);

        assert_eq!(serial, rayon);
    }
}
