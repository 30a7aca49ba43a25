//! Static font-metric tables and a [`LayoutMeasurer`] built on them.
//!
//! Character widths are in em units (relative to font size). This is an
//! approximation of real glyph shaping: no kerning, no ligatures, greedy word
//! wrap. It is good enough to drive the fitting engine without a platform text
//! stack, and it is deterministic and monotone in size, which is all the search
//! requires.
//!
//! All tables cover ASCII 0x20..=0x7E (95 printable characters).
//! Index = (char as usize) - 32.

use serde::{Deserialize, Serialize};

use crate::layout::measurer::{LayoutMeasurer, LayoutMetrics, LineSpacing};

// ────────────────────────────────────────────────────────────────────────────
// Font family enum
// ────────────────────────────────────────────────────────────────────────────

/// Font families with a built-in metric table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontFamily {
    /// Humanist sans-serif, regular width.
    Inter,
    /// Condensed display sans-serif. Roughly 68% of Inter's advance widths.
    Oswald,
}

impl FontFamily {
    /// Parses a case-insensitive family name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "inter" => Some(FontFamily::Inter),
            "oswald" => Some(FontFamily::Oswald),
            _ => None,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Font metric table
// ────────────────────────────────────────────────────────────────────────────

/// Static character-width table for a font family.
///
/// `widths[i]` = advance of ASCII character `(i + 32)` in em units.
///
/// Width array slot layout:
/// ```text
/// [0]=sp  [1]=!   [2]="   [3]=#   [4]=$   [5]=%   [6]=&   [7]='
/// [8]=(   [9]=)   [10]=*  [11]=+  [12]=,  [13]=-  [14]=.  [15]=/
/// [16..25]=0-9
/// [26]=:  [27]=;  [28]=<  [29]==  [30]=>  [31]=?  [32]=@
/// [33..58]=A-Z
/// [59]=[  [60]=\  [61]=]  [62]=^  [63]=_  [64]=`
/// [65..90]=a-z
/// [91]={  [92]=|  [93]=}  [94]=~
/// ```
pub struct FontMetricTable {
    pub font: FontFamily,
    widths: [f32; 95],
    /// Fallback width for characters outside the printable ASCII range.
    pub average_char_width: f32,
    pub space_width: f32,
    /// Font spacing (ascent + descent + leading) in em units.
    pub line_height: f32,
}

impl FontMetricTable {
    /// Measures the advance width of a string in em units.
    pub fn measure_str(&self, s: &str) -> f32 {
        s.chars()
            .map(|c| {
                let code = c as usize;
                if (32..=126).contains(&code) {
                    self.widths[code - 32]
                } else {
                    self.average_char_width
                }
            })
            .sum()
    }

    /// Greedy word wrap of one paragraph, in em units. Returns the width of each line.
    ///
    /// A word wider than `max_width_em` gets a line of its own and overflows it;
    /// the fit test then rejects the size on width.
    fn wrap_paragraph(&self, paragraph: &str, max_width_em: f32, out: &mut Vec<f32>) {
        let mut current_width = 0.0_f32;
        let mut first_on_line = true;

        for word in paragraph.split_whitespace() {
            let word_w = self.measure_str(word);
            let space_w = if first_on_line { 0.0 } else { self.space_width };

            if !first_on_line && current_width + space_w + word_w > max_width_em {
                out.push(current_width);
                current_width = word_w;
            } else {
                current_width += space_w + word_w;
                first_on_line = false;
            }
        }
        // Final (possibly empty) line of the paragraph.
        out.push(current_width);
    }
}

/// [`LayoutMeasurer`] backed by a static [`FontMetricTable`].
///
/// Sizes are in pixels; one em at size `s` is `s` pixels wide.
#[derive(Clone, Copy)]
pub struct TableMeasurer {
    table: &'static FontMetricTable,
}

impl TableMeasurer {
    pub fn new(font: FontFamily) -> Self {
        Self {
            table: get_metrics(&font),
        }
    }

    pub fn font(&self) -> FontFamily {
        self.table.font
    }
}

impl std::fmt::Debug for TableMeasurer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TableMeasurer")
            .field("font", &self.table.font)
            .finish()
    }
}

impl LayoutMeasurer for TableMeasurer {
    fn line_height(&self, size: u32) -> f32 {
        self.table.line_height * size as f32
    }

    fn text_width(&self, text: &str, size: u32) -> f32 {
        self.table.measure_str(text) * size as f32
    }

    fn layout(
        &self,
        text: &str,
        size: u32,
        width_limit: f32,
        spacing: LineSpacing,
    ) -> LayoutMetrics {
        let px = size as f32;
        let max_width_em = if px > 0.0 { width_limit / px } else { 0.0 };

        let mut widths_em = Vec::new();
        // Explicit newlines always break; empty text still has one (caret) line.
        for paragraph in text.split('\n') {
            self.table
                .wrap_paragraph(paragraph, max_width_em, &mut widths_em);
        }

        let line_count = widths_em.len() as u32;
        let advance = self.line_height(size) * spacing.multiplier + spacing.extra;

        LayoutMetrics {
            line_count,
            line_widths: widths_em.into_iter().map(|w| w * px).collect(),
            total_height: advance * line_count as f32,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Static width tables  (95 ASCII printable characters each)
// ────────────────────────────────────────────────────────────────────────────

static INTER_TABLE: FontMetricTable = FontMetricTable {
    font: FontFamily::Inter,
    #[rustfmt::skip]
    widths: [
        // sp    !     "     #     $     %     &     '     (     )     *     +     ,     -     .     /
        0.25, 0.30, 0.38, 0.56, 0.56, 0.89, 0.67, 0.22, 0.33, 0.33, 0.39, 0.59, 0.28, 0.33, 0.28, 0.31,
        // 0     1     2     3     4     5     6     7     8     9
        0.56, 0.56, 0.56, 0.56, 0.56, 0.56, 0.56, 0.56, 0.56, 0.56,
        // :     ;     <     =     >     ?     @
        0.28, 0.28, 0.59, 0.59, 0.59, 0.50, 1.02,
        // A     B     C     D     E     F     G     H     I     J     K     L     M
        0.67, 0.61, 0.61, 0.67, 0.56, 0.50, 0.67, 0.67, 0.25, 0.39, 0.61, 0.53, 0.78,
        // N     O     P     Q     R     S     T     U     V     W     X     Y     Z
        0.67, 0.72, 0.56, 0.72, 0.61, 0.50, 0.56, 0.67, 0.67, 0.89, 0.61, 0.61, 0.56,
        // [     \     ]     ^     _     `
        0.28, 0.31, 0.28, 0.47, 0.56, 0.34,
        // a     b     c     d     e     f     g     h     i     j     k     l     m
        0.56, 0.56, 0.50, 0.56, 0.56, 0.31, 0.56, 0.56, 0.22, 0.22, 0.53, 0.22, 0.83,
        // n     o     p     q     r     s     t     u     v     w     x     y     z
        0.56, 0.56, 0.56, 0.56, 0.33, 0.44, 0.39, 0.56, 0.50, 0.72, 0.50, 0.50, 0.44,
        // {     |     }     ~
        0.33, 0.26, 0.33, 0.59,
    ],
    average_char_width: 0.52,
    space_width: 0.25,
    line_height: 1.21,
};

static OSWALD_TABLE: FontMetricTable = FontMetricTable {
    font: FontFamily::Oswald,
    #[rustfmt::skip]
    widths: [
        // sp    !     "     #     $     %     &     '     (     )     *     +     ,     -     .     /
        0.17, 0.20, 0.26, 0.38, 0.38, 0.61, 0.46, 0.15, 0.23, 0.23, 0.27, 0.40, 0.19, 0.23, 0.19, 0.21,
        // 0     1     2     3     4     5     6     7     8     9
        0.38, 0.38, 0.38, 0.38, 0.38, 0.38, 0.38, 0.38, 0.38, 0.38,
        // :     ;     <     =     >     ?     @
        0.19, 0.19, 0.40, 0.40, 0.40, 0.34, 0.69,
        // A     B     C     D     E     F     G     H     I     J     K     L     M
        0.46, 0.41, 0.41, 0.46, 0.38, 0.34, 0.46, 0.46, 0.17, 0.27, 0.41, 0.36, 0.53,
        // N     O     P     Q     R     S     T     U     V     W     X     Y     Z
        0.46, 0.49, 0.38, 0.49, 0.41, 0.34, 0.38, 0.46, 0.46, 0.61, 0.41, 0.41, 0.38,
        // [     \     ]     ^     _     `
        0.19, 0.21, 0.19, 0.32, 0.38, 0.23,
        // a     b     c     d     e     f     g     h     i     j     k     l     m
        0.38, 0.38, 0.34, 0.38, 0.38, 0.21, 0.38, 0.38, 0.15, 0.15, 0.36, 0.15, 0.56,
        // n     o     p     q     r     s     t     u     v     w     x     y     z
        0.38, 0.38, 0.38, 0.38, 0.23, 0.30, 0.27, 0.38, 0.34, 0.49, 0.34, 0.34, 0.30,
        // {     |     }     ~
        0.23, 0.18, 0.23, 0.40,
    ],
    average_char_width: 0.35,
    space_width: 0.17,
    line_height: 1.48,
};

/// Returns the static metric table for a given font family.
pub fn get_metrics(font: &FontFamily) -> &'static FontMetricTable {
    match font {
        FontFamily::Inter => &INTER_TABLE,
        FontFamily::Oswald => &OSWALD_TABLE,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn make_measurer() -> TableMeasurer {
        TableMeasurer::new(FontFamily::Inter)
    }

    #[test]
    fn test_measure_str_empty_returns_zero() {
        assert_eq!(get_metrics(&FontFamily::Inter).measure_str(""), 0.0);
    }

    #[test]
    fn test_measure_str_ascii_characters() {
        let metrics = get_metrics(&FontFamily::Inter);
        // "Rust" = R(0.61) + u(0.56) + s(0.44) + t(0.39) = 2.00
        let width = metrics.measure_str("Rust");
        assert!(
            (width - 2.00).abs() < 1e-3,
            "Rust width should be ~2.00, got {width}"
        );
    }

    #[test]
    fn test_measure_str_non_ascii_falls_back() {
        let metrics = get_metrics(&FontFamily::Inter);
        let width = metrics.measure_str("é");
        assert!((width - metrics.average_char_width).abs() < 1e-4);
    }

    #[test]
    fn test_text_width_scales_with_size() {
        let m = make_measurer();
        // "Hi" = H(0.67) + i(0.22) = 0.89em
        assert!((m.text_width("Hi", 10) - 8.9).abs() < 1e-3);
        assert!((m.text_width("Hi", 20) - 17.8).abs() < 1e-3);
    }

    #[test]
    fn test_line_height_scales_with_size() {
        let m = make_measurer();
        assert!((m.line_height(20) - 24.2).abs() < 1e-3);
    }

    #[test]
    fn test_layout_empty_text_is_one_empty_line() {
        let metrics = make_measurer().layout("", 16, 100.0, LineSpacing::default());
        assert_eq!(metrics.line_count, 1);
        assert_eq!(metrics.max_line_width(), 0.0);
        assert!((metrics.total_height - 1.21 * 16.0).abs() < 1e-3);
    }

    #[test]
    fn test_layout_wraps_when_width_is_exceeded() {
        let m = make_measurer();
        let text = "word ".repeat(20);
        let wide = m.layout(&text, 10, 10_000.0, LineSpacing::default());
        let narrow = m.layout(&text, 10, 60.0, LineSpacing::default());
        assert_eq!(wide.line_count, 1);
        assert!(narrow.line_count > 1, "got {}", narrow.line_count);
        assert!(narrow.max_line_width() <= 60.0);
    }

    #[test]
    fn test_layout_honours_explicit_newlines() {
        let metrics = make_measurer().layout("one\ntwo\n\nfour", 10, 1000.0, LineSpacing::default());
        assert_eq!(metrics.line_count, 4);
    }

    #[test]
    fn test_layout_line_count_monotone_in_size() {
        let m = make_measurer();
        let text = "The quick brown fox jumps over the lazy dog again and again";
        let mut previous = 0;
        for size in 8..=48 {
            let lines = m.layout(text, size, 240.0, LineSpacing::default()).line_count;
            assert!(
                lines >= previous,
                "line count shrank from {previous} to {lines} at size {size}"
            );
            previous = lines;
        }
    }

    #[test]
    fn test_layout_applies_line_spacing() {
        let m = make_measurer();
        let spacing = LineSpacing {
            multiplier: 1.5,
            extra: 2.0,
        };
        let metrics = m.layout("a\nb", 10, 1000.0, spacing);
        let expected = 2.0 * (12.1 * 1.5 + 2.0);
        assert!(
            (metrics.total_height - expected).abs() < 1e-3,
            "expected {expected}, got {}",
            metrics.total_height
        );
    }

    #[test]
    fn test_condensed_font_narrower_than_regular() {
        let text = "Condensed display type";
        let oswald = TableMeasurer::new(FontFamily::Oswald);
        let inter = TableMeasurer::new(FontFamily::Inter);
        assert!(oswald.text_width(text, 16) < inter.text_width(text, 16));
    }

    #[test]
    fn test_font_family_from_name() {
        assert_eq!(FontFamily::from_name(" Inter "), Some(FontFamily::Inter));
        assert_eq!(FontFamily::from_name("OSWALD"), Some(FontFamily::Oswald));
        assert_eq!(FontFamily::from_name("comic"), None);
    }
}
