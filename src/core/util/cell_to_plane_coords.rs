use crate::core::data::grid_size::GridSize;
use crate::core::data::plane_bounds::PlaneBounds;
use num_complex::Complex64;

/// Maps a grid cell to its point in the complex plane by linear
/// interpolation across the bounds.
///
/// Row 0 is the top of the grid and carries the largest imaginary part;
/// column 0 is the left edge at `xmin`.
#[must_use]
pub fn cell_to_plane_coords(row: u32, col: u32, size: GridSize, bounds: &PlaneBounds) -> Complex64 {
    let x = f64::from(col) / f64::from(size.cols() - 1) * bounds.width() + bounds.xmin();
    let y = bounds.ymax() - f64::from(row) / f64::from(size.rows() - 1) * bounds.height();

    Complex64::new(x, y)
}
