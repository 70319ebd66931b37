mod controllers;
mod core;
mod presenters;
mod server;

pub use crate::controllers::plot::{plot_controller, PlotError};
pub use crate::controllers::ports::page_presenter::PagePresenterPort;
pub use crate::controllers::validate_bounds::{validate_bounds, RawBounds};
pub use crate::core::actions::build_labels::{build_labels, BuildLabelsError};
pub use crate::core::actions::compute_grid::compute_grid::compute_grid;
pub use crate::core::actions::compute_grid::compute_grid_rayon::compute_grid_rayon;
pub use crate::core::actions::compute_grid::compute_grid_serial::compute_grid_serial;
pub use crate::core::actions::compute_grid::ports::escape_algorithm::EscapeAlgorithm;
pub use crate::core::actions::compute_grid::process_row::process_row;
pub use crate::core::actions::map_palette::{map_palette, GrayPalette, PaletteError};
pub use crate::core::data::grid_result::GridResult;
pub use crate::core::data::grid_size::{GridSize, GridSizeError};
pub use crate::core::data::plane_bounds::{PlaneBounds, PlaneBoundsError};
pub use crate::core::data::plot_config::{PlotConfig, PlotConfigError};
pub use crate::core::data::plot_data::PlotData;
pub use crate::core::data::row_result::RowResult;
pub use crate::core::fractals::mandelbrot::algorithm::{
    MandelbrotAlgorithm, MandelbrotAlgorithmConstructorError,
};
pub use crate::presenters::html::HtmlPresenter;
pub use crate::server::{run_server, ServerError, PLOT_ROUTE};
