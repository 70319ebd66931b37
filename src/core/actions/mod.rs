pub mod build_labels;
pub mod compute_grid;
pub mod map_palette;
