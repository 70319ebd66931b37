use crate::core::data::plane_bounds::PlaneBounds;

/// Raw zoom bounds exactly as they arrived in the request, before any
/// parsing. Fields are optional as a group: zooming requires all four.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawBounds {
    pub xstart: Option<String>,
    pub xend: Option<String>,
    pub ystart: Option<String>,
    pub yend: Option<String>,
}

impl RawBounds {
    /// Collects the four fields from decoded form pairs, ignoring any
    /// other keys. Works for both query strings and form bodies.
    #[must_use]
    pub fn from_form_pairs(pairs: impl Iterator<Item = (String, String)>) -> Self {
        let mut raw = Self::default();

        for (key, value) in pairs {
            match key.as_str() {
                "xstart" => raw.xstart = Some(value),
                "xend" => raw.xend = Some(value),
                "ystart" => raw.ystart = Some(value),
                "yend" => raw.yend = Some(value),
                _ => {}
            }
        }

        raw
    }

    /// All four values, provided they are all present and non-empty.
    fn complete(&self) -> Option<(&str, &str, &str, &str)> {
        match (&self.xstart, &self.xend, &self.ystart, &self.yend) {
            (Some(x1), Some(x2), Some(y1), Some(y2))
                if !x1.is_empty() && !x2.is_empty() && !y1.is_empty() && !y2.is_empty() =>
            {
                Some((x1, x2, y1, y2))
            }
            _ => None,
        }
    }
}

/// NaN and the infinities satisfy none of the range comparisons below in
/// the expected way, so they are rejected at the parse stage.
fn parse_finite(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

fn plotted_from(bounds: &PlaneBounds) -> String {
    format!(
        "Data plotted from ({}, {}) to ({}, {})",
        bounds.xmin(),
        bounds.ymin(),
        bounds.xmax(),
        bounds.ymax()
    )
}

/// Parses and range-checks user-supplied zoom bounds against the default
/// window, falling back to the defaults on any problem.
///
/// Adoption is all-or-nothing: if any field is missing the defaults are
/// used silently. Parse failures and range violations (values outside the
/// default window, or an inverted interval) keep the defaults and say so
/// in the status. This never fails: the caller always gets usable bounds
/// and a human-readable status line.
#[must_use]
pub fn validate_bounds(raw: &RawBounds, defaults: &PlaneBounds) -> (PlaneBounds, String) {
    let Some((x1_raw, x2_raw, y1_raw, y2_raw)) = raw.complete() else {
        return (*defaults, plotted_from(defaults));
    };

    let parsed = (
        parse_finite(x1_raw),
        parse_finite(x2_raw),
        parse_finite(y1_raw),
        parse_finite(y2_raw),
    );
    let (Some(x1), Some(x2), Some(y1), Some(y2)) = parsed else {
        log::warn!(
            "zoom bounds are not numbers: xstart={:?} xend={:?} ystart={:?} yend={:?}",
            x1_raw,
            x2_raw,
            y1_raw,
            y2_raw
        );
        return (
            *defaults,
            format!("x or y values are not numbers. {}", plotted_from(defaults)),
        );
    };

    if !defaults.contains_x(x1) || !defaults.contains_x(x2) || x1 >= x2 {
        log::warn!(
            "zoom x bounds {}..{} not in range {}..{}",
            x1,
            x2,
            defaults.xmin(),
            defaults.xmax()
        );
        return (
            *defaults,
            format!("values are not in x range. {}", plotted_from(defaults)),
        );
    }
    if !defaults.contains_y(y1) || !defaults.contains_y(y2) || y1 >= y2 {
        log::warn!(
            "zoom y bounds {}..{} not in range {}..{}",
            y1,
            y2,
            defaults.ymin(),
            defaults.ymax()
        );
        return (
            *defaults,
            format!("values are not in y range. {}", plotted_from(defaults)),
        );
    }

    match PlaneBounds::new(x1, x2, y1, y2) {
        Ok(bounds) => {
            let status = plotted_from(&bounds);
            (bounds, status)
        }
        // The range checks above already guarantee valid intervals
        Err(_) => (
            *defaults,
            format!("values are not in x range. {}", plotted_from(defaults)),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults() -> PlaneBounds {
        PlaneBounds::new(-1.6, 0.8, -1.2, 1.2).unwrap()
    }

    fn raw(x1: &str, x2: &str, y1: &str, y2: &str) -> RawBounds {
        RawBounds {
            xstart: Some(x1.to_string()),
            xend: Some(x2.to_string()),
            ystart: Some(y1.to_string()),
            yend: Some(y2.to_string()),
        }
    }

    #[test]
    fn test_missing_fields_use_defaults_silently() {
        let (bounds, status) = validate_bounds(&RawBounds::default(), &defaults());

        assert_eq!(bounds, defaults());
        assert_eq!(status, "Data plotted from (-1.6, -1.2) to (0.8, 1.2)");
    }

    #[test]
    fn test_partial_fields_use_defaults() {
        let partial = RawBounds {
            xstart: Some("-1.0".to_string()),
            ..RawBounds::default()
        };
        let (bounds, status) = validate_bounds(&partial, &defaults());

        assert_eq!(bounds, defaults());
        assert!(!status.contains("not"));
    }

    #[test]
    fn test_valid_bounds_are_adopted() {
        let (bounds, status) = validate_bounds(&raw("-1.0", "0.5", "-0.5", "0.5"), &defaults());

        assert_eq!(bounds, PlaneBounds::new(-1.0, 0.5, -0.5, 0.5).unwrap());
        assert_eq!(status, "Data plotted from (-1, -0.5) to (0.5, 0.5)");
    }

    #[test]
    fn test_non_numeric_value_reports_parse_error_and_falls_back() {
        let (bounds, status) = validate_bounds(&raw("abc", "0.5", "-0.5", "0.5"), &defaults());

        assert_eq!(bounds, defaults());
        assert!(status.contains("not numbers"));
        assert!(status.contains("Data plotted from (-1.6, -1.2) to (0.8, 1.2)"));
    }

    #[test]
    fn test_non_finite_value_reports_parse_error() {
        let (bounds, status) = validate_bounds(&raw("NaN", "0.5", "-0.5", "0.5"), &defaults());

        assert_eq!(bounds, defaults());
        assert!(status.contains("not numbers"));

        let (bounds, status) = validate_bounds(&raw("-1.0", "inf", "-0.5", "0.5"), &defaults());

        assert_eq!(bounds, defaults());
        assert!(status.contains("not numbers"));
    }

    #[test]
    fn test_x_outside_window_reports_range_error() {
        let (bounds, status) = validate_bounds(&raw("10", "20", "-0.5", "0.5"), &defaults());

        assert_eq!(bounds, defaults());
        assert!(status.contains("not in x range"));
    }

    #[test]
    fn test_inverted_x_interval_reports_range_error() {
        let (bounds, status) = validate_bounds(&raw("0.5", "-1.0", "-0.5", "0.5"), &defaults());

        assert_eq!(bounds, defaults());
        assert!(status.contains("not in x range"));
    }

    #[test]
    fn test_y_outside_window_reports_range_error() {
        let (bounds, status) = validate_bounds(&raw("-1.0", "0.5", "-5.0", "0.5"), &defaults());

        assert_eq!(bounds, defaults());
        assert!(status.contains("not in y range"));
    }

    #[test]
    fn test_from_form_pairs_collects_known_keys() {
        let pairs = vec![
            ("xstart".to_string(), "-1.0".to_string()),
            ("xend".to_string(), "0.5".to_string()),
            ("ystart".to_string(), "-0.5".to_string()),
            ("yend".to_string(), "0.5".to_string()),
            ("unrelated".to_string(), "ignored".to_string()),
        ];

        let raw_bounds = RawBounds::from_form_pairs(pairs.into_iter());

        assert_eq!(raw_bounds, raw("-1.0", "0.5", "-0.5", "0.5"));
    }
}
