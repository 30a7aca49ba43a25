//! Fit predicate: "does this candidate size fit the available rectangle?"

use std::cmp::Ordering;

use tracing::trace;

use crate::layout::constraints::{AvailableSpace, LineLimit};
use crate::layout::measurer::{LayoutMeasurer, LineSpacing};

/// Outcome of testing one candidate size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FitVerdict {
    /// The measured box is contained in the available space.
    Fits,
    /// Too wide, too tall, or too many lines.
    TooBig,
    /// Exact boundary match. Containment is a boolean test, so the built-in
    /// predicate never produces this; custom comparators may.
    Exact,
}

impl FitVerdict {
    /// Three-way comparator form used by the search: `Less` fits, `Greater` is
    /// too big, `Equal` is an exact match.
    pub fn as_ordering(self) -> Ordering {
        match self {
            FitVerdict::Fits => Ordering::Less,
            FitVerdict::TooBig => Ordering::Greater,
            FitVerdict::Exact => Ordering::Equal,
        }
    }
}

/// Measurement mode, chosen from the line limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FitMode {
    /// Width of the whole text on one line, height of one line. No wrapping.
    SingleLine,
    /// Wrapped layout at the available width, optionally capped in line count.
    MultiLine { max_lines: LineLimit },
}

impl FitMode {
    pub fn for_limit(max_lines: LineLimit) -> Self {
        if max_lines.is_single_line() {
            FitMode::SingleLine
        } else {
            FitMode::MultiLine { max_lines }
        }
    }
}

/// Binds a measurer, a text and the active constraints into a size test.
pub struct FitPredicate<'a, M: LayoutMeasurer + ?Sized> {
    measurer: &'a M,
    text: &'a str,
    mode: FitMode,
    spacing: LineSpacing,
    space: AvailableSpace,
}

impl<'a, M: LayoutMeasurer + ?Sized> FitPredicate<'a, M> {
    pub fn new(
        measurer: &'a M,
        text: &'a str,
        mode: FitMode,
        spacing: LineSpacing,
        space: AvailableSpace,
    ) -> Self {
        Self {
            measurer,
            text,
            mode,
            spacing,
            space,
        }
    }

    /// Tests `candidate` against the available space.
    pub fn test(&self, candidate: u32) -> FitVerdict {
        let (width, height) = match self.mode {
            FitMode::SingleLine => (
                self.measurer.text_width(self.text, candidate),
                self.measurer.line_height(candidate),
            ),
            FitMode::MultiLine { max_lines } => {
                let metrics =
                    self.measurer
                        .layout(self.text, candidate, self.space.width, self.spacing);
                if max_lines.exceeded_by(metrics.line_count) {
                    trace!(
                        size = candidate,
                        lines = metrics.line_count,
                        "candidate exceeds line cap"
                    );
                    return FitVerdict::TooBig;
                }
                (metrics.max_line_width(), metrics.total_height)
            }
        };

        let verdict = if self.space.contains(width, height) {
            FitVerdict::Fits
        } else {
            FitVerdict::TooBig
        };
        trace!(size = candidate, width, height, ?verdict, "probed candidate size");
        verdict
    }

    /// Signed comparator form of [`FitPredicate::test`].
    pub fn compare(&self, candidate: u32) -> Ordering {
        self.test(candidate).as_ordering()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::font_metrics::{FontFamily, TableMeasurer};
    use crate::layout::measurer::LayoutMetrics;
    use std::cell::Cell;

    /// Reports a fixed line count, counting how often `layout` runs.
    struct FixedLines {
        lines: u32,
        calls: Cell<u32>,
    }

    impl LayoutMeasurer for FixedLines {
        fn line_height(&self, size: u32) -> f32 {
            size as f32
        }

        fn text_width(&self, _text: &str, size: u32) -> f32 {
            size as f32
        }

        fn layout(&self, _text: &str, size: u32, _w: f32, _s: LineSpacing) -> LayoutMetrics {
            self.calls.set(self.calls.get() + 1);
            LayoutMetrics {
                line_count: self.lines,
                line_widths: vec![size as f32; self.lines as usize],
                total_height: size as f32 * self.lines as f32,
            }
        }
    }

    fn make_space(width: f32, height: f32) -> AvailableSpace {
        AvailableSpace::new(width, height)
    }

    #[test]
    fn test_verdict_ordering() {
        assert_eq!(FitVerdict::Fits.as_ordering(), Ordering::Less);
        assert_eq!(FitVerdict::TooBig.as_ordering(), Ordering::Greater);
        assert_eq!(FitVerdict::Exact.as_ordering(), Ordering::Equal);
    }

    #[test]
    fn test_mode_for_limit() {
        assert_eq!(FitMode::for_limit(LineLimit::Lines(1)), FitMode::SingleLine);
        assert_eq!(
            FitMode::for_limit(LineLimit::Unlimited),
            FitMode::MultiLine {
                max_lines: LineLimit::Unlimited
            }
        );
    }

    #[test]
    fn test_single_line_fits_small_size() {
        let m = TableMeasurer::new(FontFamily::Inter);
        let p = FitPredicate::new(
            &m,
            "Hi",
            FitMode::SingleLine,
            LineSpacing::default(),
            make_space(200.0, 50.0),
        );
        assert_eq!(p.test(12), FitVerdict::Fits);
        // Line height at 42px = 50.82 > 50
        assert_eq!(p.test(42), FitVerdict::TooBig);
    }

    #[test]
    fn test_single_line_too_wide() {
        let m = TableMeasurer::new(FontFamily::Inter);
        let text = "a rather long single line of text";
        let p = FitPredicate::new(
            &m,
            text,
            FitMode::SingleLine,
            LineSpacing::default(),
            make_space(50.0, 500.0),
        );
        assert_eq!(p.test(20), FitVerdict::TooBig);
    }

    #[test]
    fn test_line_cap_short_circuits() {
        let m = FixedLines {
            lines: 3,
            calls: Cell::new(0),
        };
        let p = FitPredicate::new(
            &m,
            "irrelevant",
            FitMode::MultiLine {
                max_lines: LineLimit::Lines(2),
            },
            LineSpacing::default(),
            make_space(10_000.0, 10_000.0),
        );
        assert_eq!(p.test(10), FitVerdict::TooBig);
        assert_eq!(m.calls.get(), 1);
    }

    #[test]
    fn test_multi_line_within_cap_checks_box() {
        let m = FixedLines {
            lines: 2,
            calls: Cell::new(0),
        };
        let p = FitPredicate::new(
            &m,
            "irrelevant",
            FitMode::MultiLine {
                max_lines: LineLimit::Lines(2),
            },
            LineSpacing::default(),
            make_space(100.0, 40.0),
        );
        // height = 2 * size
        assert_eq!(p.test(20), FitVerdict::Fits);
        assert_eq!(p.test(21), FitVerdict::TooBig);
    }

    #[test]
    fn test_compare_matches_test() {
        let m = TableMeasurer::new(FontFamily::Inter);
        let p = FitPredicate::new(
            &m,
            "Hi",
            FitMode::SingleLine,
            LineSpacing::default(),
            make_space(200.0, 50.0),
        );
        assert_eq!(p.compare(12), Ordering::Less);
        assert_eq!(p.compare(60), Ordering::Greater);
    }
}
