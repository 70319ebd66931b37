use crate::core::actions::compute_grid::ports::escape_algorithm::EscapeAlgorithm;
use crate::core::data::grid_size::GridSize;
use crate::core::data::plane_bounds::PlaneBounds;
use crate::core::util::cell_to_plane_coords::cell_to_plane_coords;
use num_complex::Complex64;
use std::error::Error;
use std::fmt;

/// Escape-time evaluator for the Mandelbrot recursion v <- v^2 + z0.
///
/// Pure and side-effect free: safe to call concurrently from every row
/// worker. The escape threshold |v| > 2 is checked as the squared
/// magnitude to avoid the square root.
#[derive(Debug, Clone)]
pub struct MandelbrotAlgorithm {
    size: GridSize,
    bounds: PlaneBounds,
    max_iterations: u32,
}

#[derive(Debug)]
pub enum MandelbrotAlgorithmConstructorError {
    ZeroMaxIterationsError,
}

impl fmt::Display for MandelbrotAlgorithmConstructorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroMaxIterationsError => {
                write!(f, "Maximum iterations must be greater than zero")
            }
        }
    }
}

impl Error for MandelbrotAlgorithmConstructorError {}

impl EscapeAlgorithm for MandelbrotAlgorithm {
    fn evaluate(&self, row: u32, col: u32) -> u32 {
        let z0 = cell_to_plane_coords(row, col, self.size, &self.bounds);
        let mut v = Complex64::new(0.0, 0.0);

        for n in 0..self.max_iterations {
            v = v * v + z0;
            if v.norm_sqr() > 4.0 {
                return n;
            }
        }

        // Never exceeded the threshold: treated as a member of the set
        self.max_iterations
    }

    fn max_iterations(&self) -> u32 {
        self.max_iterations
    }
}

impl MandelbrotAlgorithm {
    pub fn new(
        size: GridSize,
        bounds: PlaneBounds,
        max_iterations: u32,
    ) -> Result<Self, MandelbrotAlgorithmConstructorError> {
        if max_iterations == 0 {
            return Err(MandelbrotAlgorithmConstructorError::ZeroMaxIterationsError);
        }

        Ok(Self {
            size,
            bounds,
            max_iterations,
        })
    }
}
