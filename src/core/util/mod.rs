pub mod cell_to_plane_coords;
