use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PlaneBoundsError {
    InvalidInterval { axis: char, min: f64, max: f64 },
}

impl fmt::Display for PlaneBoundsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInterval { axis, min, max } => {
                write!(
                    f,
                    "{} interval must satisfy min < max: got {}..{}",
                    axis, min, max
                )
            }
        }
    }
}

impl Error for PlaneBoundsError {}

/// Rectangular region of the complex plane being rendered.
///
/// Immutable once constructed; one instance per request.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PlaneBounds {
    xmin: f64,
    xmax: f64,
    ymin: f64,
    ymax: f64,
}

impl PlaneBounds {
    pub fn new(xmin: f64, xmax: f64, ymin: f64, ymax: f64) -> Result<Self, PlaneBoundsError> {
        if !(xmin < xmax) {
            return Err(PlaneBoundsError::InvalidInterval {
                axis: 'x',
                min: xmin,
                max: xmax,
            });
        }
        if !(ymin < ymax) {
            return Err(PlaneBoundsError::InvalidInterval {
                axis: 'y',
                min: ymin,
                max: ymax,
            });
        }

        Ok(Self {
            xmin,
            xmax,
            ymin,
            ymax,
        })
    }

    #[must_use]
    pub fn xmin(&self) -> f64 {
        self.xmin
    }

    #[must_use]
    pub fn xmax(&self) -> f64 {
        self.xmax
    }

    #[must_use]
    pub fn ymin(&self) -> f64 {
        self.ymin
    }

    #[must_use]
    pub fn ymax(&self) -> f64 {
        self.ymax
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.xmax - self.xmin
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.ymax - self.ymin
    }

    #[must_use]
    pub fn contains_x(&self, x: f64) -> bool {
        self.xmin <= x && x <= self.xmax
    }

    #[must_use]
    pub fn contains_y(&self, y: f64) -> bool {
        self.ymin <= y && y <= self.ymax
    }
}
