pub mod plot;
pub mod ports;
pub mod validate_bounds;
