//! Text measurement capability consumed by the fitting engine.
//!
//! The engine never shapes glyphs or breaks lines itself. Everything it knows
//! about the footprint of a text at a candidate size comes from a
//! [`LayoutMeasurer`] supplied by the host (a platform text stack, a shaping
//! crate, or the static tables in [`crate::layout::font_metrics`]).

use serde::{Deserialize, Serialize};

/// Line spacing applied by multi-line layout.
///
/// Each line advances by `line_height * multiplier + extra`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSpacing {
    pub multiplier: f32,
    pub extra: f32,
}

impl Default for LineSpacing {
    fn default() -> Self {
        Self {
            multiplier: 1.0,
            extra: 0.0,
        }
    }
}

/// Footprint of a laid-out text block at one candidate size.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LayoutMetrics {
    pub line_count: u32,
    /// Width of each line, in layout order.
    pub line_widths: Vec<f32>,
    pub total_height: f32,
}

impl LayoutMetrics {
    /// Width of the widest line, or 0.0 for an empty layout.
    pub fn max_line_width(&self) -> f32 {
        self.line_widths.iter().copied().fold(0.0_f32, f32::max)
    }
}

/// Text measurement oracle.
///
/// # Contract
/// Implementations must be deterministic and monotone in `size`: measuring the
/// same text at a larger size never yields a smaller width, height or line
/// count. Binary search over sizes is only correct under this assumption; a
/// measurer that violates it produces an unspecified (but still in-range) size.
pub trait LayoutMeasurer {
    /// Height of one line of text (the font spacing) at `size`.
    fn line_height(&self, size: u32) -> f32;

    /// Width of `text` rendered on a single line at `size`, with no wrapping.
    fn text_width(&self, text: &str, size: u32) -> f32;

    /// Lays `text` out at `size`, breaking lines at `width_limit`.
    fn layout(&self, text: &str, size: u32, width_limit: f32, spacing: LineSpacing)
        -> LayoutMetrics;
}

impl<M: LayoutMeasurer + ?Sized> LayoutMeasurer for &M {
    fn line_height(&self, size: u32) -> f32 {
        (**self).line_height(size)
    }

    fn text_width(&self, text: &str, size: u32) -> f32 {
        (**self).text_width(text, size)
    }

    fn layout(
        &self,
        text: &str,
        size: u32,
        width_limit: f32,
        spacing: LineSpacing,
    ) -> LayoutMetrics {
        (**self).layout(text, size, width_limit, spacing)
    }
}

impl<M: LayoutMeasurer + ?Sized> LayoutMeasurer for Box<M> {
    fn line_height(&self, size: u32) -> f32 {
        (**self).line_height(size)
    }

    fn text_width(&self, text: &str, size: u32) -> f32 {
        (**self).text_width(text, size)
    }

    fn layout(
        &self,
        text: &str,
        size: u32,
        width_limit: f32,
        spacing: LineSpacing,
    ) -> LayoutMetrics {
        (**self).layout(text, size, width_limit, spacing)
    }
}
