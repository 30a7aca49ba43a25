//! Size constraints and the available rectangle the text must fit into.

use serde::{Deserialize, Serialize};

use crate::errors::FitError;
use crate::layout::measurer::LineSpacing;

/// Maximum line count for multi-line fitting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LineLimit {
    /// No cap on the number of wrapped lines.
    #[default]
    Unlimited,
    /// At most this many lines. `Lines(1)` selects single-line measurement.
    Lines(u32),
}

impl LineLimit {
    /// Converts a raw line count where any value `<= 0` means "no cap".
    pub fn from_raw(raw: i32) -> Self {
        if raw <= 0 {
            LineLimit::Unlimited
        } else {
            LineLimit::Lines(raw as u32)
        }
    }

    pub fn is_single_line(self) -> bool {
        self == LineLimit::Lines(1)
    }

    /// True if `line_count` exceeds the cap.
    pub fn exceeded_by(self, line_count: u32) -> bool {
        match self {
            LineLimit::Unlimited => false,
            LineLimit::Lines(max) => line_count > max,
        }
    }
}

/// Size range and layout constraints for one fitting run.
///
/// Sizes are positive integers in device-independent pixels, already converted
/// by the caller. `min_size <= max_size` is a precondition of the search; use
/// [`FitConstraints::new`] or [`FitConstraints::validate`] to check it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FitConstraints {
    pub min_size: u32,
    pub max_size: u32,
    pub max_lines: LineLimit,
    pub spacing: LineSpacing,
}

/// Minimum recommended text size (12sp).
pub const DEFAULT_MIN_SIZE: u32 = 12;

impl FitConstraints {
    pub fn new(
        min_size: u32,
        max_size: u32,
        max_lines: LineLimit,
        spacing: LineSpacing,
    ) -> Result<Self, FitError> {
        let constraints = Self {
            min_size,
            max_size,
            max_lines,
            spacing,
        };
        constraints.validate()?;
        Ok(constraints)
    }

    /// Checks the configuration invariants without correcting anything.
    pub fn validate(&self) -> Result<(), FitError> {
        if self.min_size == 0 {
            return Err(FitError::NonPositiveSize("min_size"));
        }
        if self.max_size == 0 {
            return Err(FitError::NonPositiveSize("max_size"));
        }
        if self.max_size == u32::MAX {
            return Err(FitError::MaxSizeOutOfRange(self.max_size));
        }
        if self.min_size > self.max_size {
            return Err(FitError::InvalidRange {
                min: self.min_size,
                max: self.max_size,
            });
        }
        if !self.spacing.multiplier.is_finite() || self.spacing.multiplier <= 0.0 {
            return Err(FitError::InvalidSpacing(self.spacing.multiplier));
        }
        Ok(())
    }

    /// Returns the `(start, end_exclusive)` pair handed to the size search.
    ///
    /// The end is exclusive, so the largest size the search can return is
    /// `u32::MAX - 1`. [`FitConstraints::validate`] rejects `u32::MAX`.
    pub fn search_range(&self) -> (u32, u32) {
        (self.min_size, self.max_size.saturating_add(1))
    }
}

impl Default for FitConstraints {
    fn default() -> Self {
        Self {
            min_size: DEFAULT_MIN_SIZE,
            max_size: 40,
            max_lines: LineLimit::Unlimited,
            spacing: LineSpacing::default(),
        }
    }
}

/// Host padding around the drawable area.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Padding {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Padding {
    pub fn uniform(value: f32) -> Self {
        Self {
            left: value,
            right: value,
            top: value,
            bottom: value,
        }
    }
}

/// Outer size of the host view, before padding is removed.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

/// Drawable rectangle anchored at the origin.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AvailableSpace {
    pub width: f32,
    pub height: f32,
}

impl AvailableSpace {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Bounds minus padding. Dimensions may come out non-positive; callers check
    /// [`AvailableSpace::is_measurable`] before fitting.
    pub fn from_bounds(bounds: Bounds, padding: Padding) -> Self {
        Self {
            width: bounds.width - padding.left - padding.right,
            height: bounds.height - padding.top - padding.bottom,
        }
    }

    /// False until the host has laid the view out with a positive width.
    pub fn is_measurable(&self) -> bool {
        self.width > 0.0
    }

    /// Full containment of an origin-anchored `width` x `height` box.
    pub fn contains(&self, width: f32, height: f32) -> bool {
        width <= self.width && height <= self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_limit_from_raw_sentinels_are_unlimited() {
        assert_eq!(LineLimit::from_raw(-1), LineLimit::Unlimited);
        assert_eq!(LineLimit::from_raw(0), LineLimit::Unlimited);
        assert_eq!(LineLimit::from_raw(3), LineLimit::Lines(3));
    }

    #[test]
    fn test_line_limit_exceeded_by() {
        assert!(!LineLimit::Unlimited.exceeded_by(1000));
        assert!(!LineLimit::Lines(2).exceeded_by(2));
        assert!(LineLimit::Lines(2).exceeded_by(3));
    }

    #[test]
    fn test_single_line_only_for_one() {
        assert!(LineLimit::Lines(1).is_single_line());
        assert!(!LineLimit::Lines(2).is_single_line());
        assert!(!LineLimit::Unlimited.is_single_line());
    }

    #[test]
    fn test_validate_rejects_inverted_range() {
        let err = FitConstraints::new(40, 12, LineLimit::Unlimited, LineSpacing::default())
            .unwrap_err();
        assert_eq!(err, FitError::InvalidRange { min: 40, max: 12 });
    }

    #[test]
    fn test_validate_rejects_zero_size() {
        let err = FitConstraints::new(0, 12, LineLimit::Unlimited, LineSpacing::default())
            .unwrap_err();
        assert_eq!(err, FitError::NonPositiveSize("min_size"));
    }

    #[test]
    fn test_validate_rejects_max_size_without_exclusive_end() {
        let err = FitConstraints::new(12, u32::MAX, LineLimit::Unlimited, LineSpacing::default())
            .unwrap_err();
        assert_eq!(err, FitError::MaxSizeOutOfRange(u32::MAX));

        let ok = FitConstraints::new(12, u32::MAX - 1, LineLimit::Unlimited, LineSpacing::default())
            .expect("largest searchable max is valid");
        assert_eq!(ok.search_range(), (12, u32::MAX));
    }

    #[test]
    fn test_validate_rejects_non_positive_multiplier() {
        let spacing = LineSpacing {
            multiplier: 0.0,
            extra: 0.0,
        };
        let err = FitConstraints::new(12, 40, LineLimit::Unlimited, spacing).unwrap_err();
        assert!(matches!(err, FitError::InvalidSpacing(_)), "got {err:?}");
    }

    #[test]
    fn test_equal_min_and_max_is_valid() {
        assert!(FitConstraints::new(20, 20, LineLimit::Lines(1), LineSpacing::default()).is_ok());
    }

    #[test]
    fn test_search_range_is_end_exclusive() {
        let constraints = FitConstraints::default();
        assert_eq!(constraints.search_range(), (12, 41));
    }

    #[test]
    fn test_available_space_subtracts_padding() {
        let space = AvailableSpace::from_bounds(
            Bounds {
                width: 200.0,
                height: 50.0,
            },
            Padding {
                left: 10.0,
                right: 5.0,
                top: 4.0,
                bottom: 6.0,
            },
        );
        assert_eq!(space, AvailableSpace::new(185.0, 40.0));
    }

    #[test]
    fn test_padding_wider_than_bounds_is_not_measurable() {
        let space = AvailableSpace::from_bounds(
            Bounds {
                width: 10.0,
                height: 50.0,
            },
            Padding::uniform(8.0),
        );
        assert!(!space.is_measurable());
    }

    #[test]
    fn test_contains_is_inclusive_on_edges() {
        let space = AvailableSpace::new(100.0, 20.0);
        assert!(space.contains(100.0, 20.0));
        assert!(!space.contains(100.5, 20.0));
        assert!(!space.contains(100.0, 20.5));
    }
}
