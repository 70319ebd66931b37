use crate::core::data::grid_size::{GridSize, GridSizeError};
use crate::core::data::plane_bounds::{PlaneBounds, PlaneBoundsError};
use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum PlotConfigError {
    Grid(GridSizeError),
    Bounds(PlaneBoundsError),
    ZeroMaxIterations,
    TooFewShades { shades: u32 },
    TooFewLabels { axis: char, count: u32 },
}

impl fmt::Display for PlotConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(err) => write!(f, "grid size error: {}", err),
            Self::Bounds(err) => write!(f, "default bounds error: {}", err),
            Self::ZeroMaxIterations => {
                write!(f, "maximum iterations must be greater than zero")
            }
            Self::TooFewShades { shades } => {
                write!(f, "palette must have at least 2 shades: got {}", shades)
            }
            Self::TooFewLabels { axis, count } => {
                write!(f, "{} axis must have at least 2 labels: got {}", axis, count)
            }
        }
    }
}

impl Error for PlotConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(err) => Some(err),
            Self::Bounds(err) => Some(err),
            _ => None,
        }
    }
}

impl From<GridSizeError> for PlotConfigError {
    fn from(err: GridSizeError) -> Self {
        Self::Grid(err)
    }
}

impl From<PlaneBoundsError> for PlotConfigError {
    fn from(err: PlaneBoundsError) -> Self {
        Self::Bounds(err)
    }
}

/// Plot parameters fixed at startup: grid dimensions, iteration budget,
/// palette size, axis label counts and the default plane window that
/// doubles as the allowed zoom range.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotConfig {
    grid: GridSize,
    max_iterations: u32,
    shades: u32,
    xlabels: u32,
    ylabels: u32,
    default_bounds: PlaneBounds,
}

impl PlotConfig {
    pub fn new(
        grid: GridSize,
        max_iterations: u32,
        shades: u32,
        xlabels: u32,
        ylabels: u32,
        default_bounds: PlaneBounds,
    ) -> Result<Self, PlotConfigError> {
        if max_iterations == 0 {
            return Err(PlotConfigError::ZeroMaxIterations);
        }
        if shades < 2 {
            return Err(PlotConfigError::TooFewShades { shades });
        }
        if xlabels < 2 {
            return Err(PlotConfigError::TooFewLabels {
                axis: 'x',
                count: xlabels,
            });
        }
        if ylabels < 2 {
            return Err(PlotConfigError::TooFewLabels {
                axis: 'y',
                count: ylabels,
            });
        }

        Ok(Self {
            grid,
            max_iterations,
            shades,
            xlabels,
            ylabels,
            default_bounds,
        })
    }

    /// The configuration used by the served plot: a 200x200 grid, 200
    /// iterations, 5 shades of gray, 11 labels per axis and an empirically
    /// chosen view of the full set.
    pub fn standard() -> Result<Self, PlotConfigError> {
        Self::new(
            GridSize::new(200, 200)?,
            200,
            5,
            11,
            11,
            PlaneBounds::new(-1.6, 0.8, -1.2, 1.2)?,
        )
    }

    #[must_use]
    pub fn grid(&self) -> GridSize {
        self.grid
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn shades(&self) -> u32 {
        self.shades
    }

    #[must_use]
    pub fn xlabels(&self) -> u32 {
        self.xlabels
    }

    #[must_use]
    pub fn ylabels(&self) -> u32 {
        self.ylabels
    }

    #[must_use]
    pub fn default_bounds(&self) -> &PlaneBounds {
        &self.default_bounds
    }
}
