pub mod grid_result;
pub mod grid_size;
pub mod plane_bounds;
pub mod plot_config;
pub mod plot_data;
pub mod row_result;
