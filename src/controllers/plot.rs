use std::error::Error;
use std::fmt;
use std::time::Instant;

use crate::controllers::validate_bounds::{validate_bounds, RawBounds};
use crate::core::actions::build_labels::{build_labels, BuildLabelsError};
use crate::core::actions::compute_grid::compute_grid::compute_grid;
use crate::core::actions::map_palette::{map_palette, GrayPalette, PaletteError};
use crate::core::data::plot_config::PlotConfig;
use crate::core::data::plot_data::PlotData;
use crate::core::fractals::mandelbrot::algorithm::{
    MandelbrotAlgorithm, MandelbrotAlgorithmConstructorError,
};

#[derive(Debug)]
pub enum PlotError {
    Algorithm(MandelbrotAlgorithmConstructorError),
    Palette(PaletteError),
    Labels(BuildLabelsError),
}

impl fmt::Display for PlotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Algorithm(err) => write!(f, "escape algorithm error: {}", err),
            Self::Palette(err) => write!(f, "palette error: {}", err),
            Self::Labels(err) => write!(f, "axis label error: {}", err),
        }
    }
}

impl Error for PlotError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Algorithm(err) => Some(err),
            Self::Palette(err) => Some(err),
            Self::Labels(err) => Some(err),
        }
    }
}

impl From<MandelbrotAlgorithmConstructorError> for PlotError {
    fn from(err: MandelbrotAlgorithmConstructorError) -> Self {
        Self::Algorithm(err)
    }
}

impl From<PaletteError> for PlotError {
    fn from(err: PaletteError) -> Self {
        Self::Palette(err)
    }
}

impl From<BuildLabelsError> for PlotError {
    fn from(err: BuildLabelsError) -> Self {
        Self::Labels(err)
    }
}

/// Runs one plot request end to end: validate the zoom bounds, fan the
/// grid computation out across row workers, normalize iteration counts
/// into palette buckets and build the axis labels.
///
/// All error variants here are configuration problems; with a validated
/// `PlotConfig` the computation itself cannot fail.
pub fn plot_controller(raw: &RawBounds, config: &PlotConfig) -> Result<PlotData, PlotError> {
    let (bounds, status) = validate_bounds(raw, config.default_bounds());

    let algorithm = MandelbrotAlgorithm::new(config.grid(), bounds, config.max_iterations())?;

    let start = Instant::now();
    let grid = compute_grid(config.grid(), &algorithm);
    log::info!(
        "computed {}x{} grid over ({}, {})..({}, {}) in {:?}",
        config.grid().rows(),
        config.grid().cols(),
        bounds.xmin(),
        bounds.ymin(),
        bounds.xmax(),
        bounds.ymax(),
        start.elapsed()
    );

    let palette = GrayPalette::new(config.shades())?;
    let shades = map_palette(&grid, &palette);

    let xlabels = build_labels(bounds.xmin(), bounds.xmax(), config.xlabels())?;
    let ylabels = build_labels(bounds.ymin(), bounds.ymax(), config.ylabels())?;

    Ok(PlotData {
        status,
        grid: shades,
        xlabels,
        ylabels,
    })
}
