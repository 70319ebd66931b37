use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BuildLabelsError {
    TooFewLabels { count: u32 },
}

impl fmt::Display for BuildLabelsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewLabels { count } => {
                write!(f, "axis needs at least 2 labels: got {}", count)
            }
        }
    }
}

impl Error for BuildLabelsError {}

/// Builds `count` evenly spaced tick labels between `min` and `max`,
/// formatted to two decimal places. The first label is `min`, the last is
/// `max`. Fewer than two labels leaves the spacing undefined and is a
/// configuration error.
pub fn build_labels(min: f64, max: f64, count: u32) -> Result<Vec<String>, BuildLabelsError> {
    if count < 2 {
        return Err(BuildLabelsError::TooFewLabels { count });
    }

    let incr = (max - min) / f64::from(count - 1);

    Ok((0..count)
        .map(|i| format!("{:.2}", min + f64::from(i) * incr))
        .collect())
}
