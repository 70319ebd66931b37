use crate::core::data::grid_result::GridResult;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PaletteError {
    TooFewShades { shades: u32 },
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewShades { shades } => {
                write!(f, "palette must have at least 2 shades: got {}", shades)
            }
        }
    }
}

impl Error for PaletteError {}

/// Ordered palette of gray shade buckets, `gray1` (lightest, escapes fast)
/// through `grayK` (darkest, remains bounded).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrayPalette {
    class_names: Vec<String>,
}

impl GrayPalette {
    pub fn new(shades: u32) -> Result<Self, PaletteError> {
        if shades < 2 {
            return Err(PaletteError::TooFewShades { shades });
        }

        let class_names = (1..=shades).map(|i| format!("gray{}", i)).collect();

        Ok(Self { class_names })
    }

    #[must_use]
    pub fn shade_count(&self) -> usize {
        self.class_names.len()
    }

    #[must_use]
    pub fn class_name(&self, bucket: usize) -> &str {
        &self.class_names[bucket]
    }

    /// Gray level of a bucket, 255 (lightest) down to 0 (darkest), linear
    /// across the palette. Used by presenters to emit the shade styles.
    #[must_use]
    pub fn gray_level(&self, bucket: usize) -> u8 {
        let last = (self.shade_count() - 1) as u32;
        (255 - bucket as u32 * 255 / last) as u8
    }

    /// Normalizes an iteration count against the observed global extrema
    /// into a bucket index in `[0, K-1]`, rounding half up.
    ///
    /// When the extrema coincide the scale factor is undefined; every cell
    /// collapses to bucket 0 instead of dividing by zero. Counts outside
    /// the extrema are not expected from a correct aggregation and clamp
    /// to bucket 0.
    #[must_use]
    pub fn bucket(&self, itn: u32, min_its: u32, max_its: u32) -> usize {
        if max_its == min_its {
            return 0;
        }
        if itn < min_its || itn > max_its {
            return 0;
        }

        let scale = (self.shade_count() - 1) as f64 / f64::from(max_its - min_its);
        (scale * f64::from(itn - min_its) + 0.5) as usize
    }
}

/// Converts a computed grid into the flat sequence of shade class names
/// handed to the page renderer.
#[must_use]
pub fn map_palette(grid: &GridResult, palette: &GrayPalette) -> Vec<String> {
    grid.its()
        .iter()
        .map(|&itn| {
            let bucket = palette.bucket(itn, grid.min_its(), grid.max_its());
            palette.class_name(bucket).to_string()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::grid_size::GridSize;

    #[test]
    fn test_palette_requires_two_shades() {
        assert_eq!(
            GrayPalette::new(1),
            Err(PaletteError::TooFewShades { shades: 1 })
        );
        assert!(GrayPalette::new(2).is_ok());
    }

    #[test]
    fn test_class_names_are_ordered() {
        let palette = GrayPalette::new(5).unwrap();

        assert_eq!(palette.shade_count(), 5);
        assert_eq!(palette.class_name(0), "gray1");
        assert_eq!(palette.class_name(4), "gray5");
    }

    #[test]
    fn test_gray_levels_run_light_to_dark() {
        let palette = GrayPalette::new(5).unwrap();

        assert_eq!(palette.gray_level(0), 255);
        assert_eq!(palette.gray_level(4), 0);
        for bucket in 1..5 {
            assert!(palette.gray_level(bucket) < palette.gray_level(bucket - 1));
        }
    }

    #[test]
    fn test_extrema_map_to_first_and_last_bucket() {
        let palette = GrayPalette::new(5).unwrap();

        assert_eq!(palette.bucket(10, 10, 90), 0);
        assert_eq!(palette.bucket(90, 10, 90), 4);
    }

    #[test]
    fn test_buckets_stay_in_range() {
        let palette = GrayPalette::new(5).unwrap();

        for itn in 10..=90 {
            assert!(palette.bucket(itn, 10, 90) <= 4);
        }
    }

    #[test]
    fn test_rounding_is_half_up() {
        // scale = 4 / 100; 13 -> 0.52 rounds to 1, 12 -> 0.48 rounds to 0
        let palette = GrayPalette::new(5).unwrap();

        assert_eq!(palette.bucket(13, 0, 100), 1);
        assert_eq!(palette.bucket(12, 0, 100), 0);
    }

    #[test]
    fn test_equal_extrema_collapse_to_single_bucket() {
        let palette = GrayPalette::new(5).unwrap();

        assert_eq!(palette.bucket(42, 42, 42), 0);
        assert_eq!(palette.bucket(0, 0, 0), 0);
    }

    #[test]
    fn test_out_of_range_counts_clamp_to_first_bucket() {
        let palette = GrayPalette::new(5).unwrap();

        assert_eq!(palette.bucket(5, 10, 90), 0);
        assert_eq!(palette.bucket(91, 10, 90), 0);
    }

    #[test]
    fn test_map_palette_names_every_cell() {
        let size = GridSize::new(2, 2).unwrap();
        let grid = GridResult::new(size, vec![0, 50, 100, 100], 0, 100);
        let palette = GrayPalette::new(5).unwrap();

        let mapped = map_palette(&grid, &palette);

        assert_eq!(mapped, vec!["gray1", "gray3", "gray5", "gray5"]);
    }

    #[test]
    fn test_map_palette_uniform_grid_uses_one_shade() {
        let size = GridSize::new(2, 2).unwrap();
        let grid = GridResult::new(size, vec![7, 7, 7, 7], 7, 7);
        let palette = GrayPalette::new(5).unwrap();

        let mapped = map_palette(&grid, &palette);

        assert_eq!(mapped, vec!["gray1", "gray1", "gray1", "gray1"]);
    }
}
