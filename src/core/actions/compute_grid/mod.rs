pub mod compute_grid;
pub mod compute_grid_rayon;
pub mod compute_grid_serial;
pub mod ports;
pub mod process_row;
