//! Cell geometry derivation from font measurements.
//!
//! Metrics are computed once per font change and are the sole source of
//! truth for cell geometry: every cell position the renderer produces
//! is an integer multiple of `width`/`height`.

use crate::surface::RenderSurface;

/// Fallback ascent/descent fractions when the surface reports neither
/// font-declared nor per-glyph bounds.
const FALLBACK_ASCENT: f32 = 0.8;
const FALLBACK_DESCENT: f32 = 0.2;

/// Monospace cell geometry in CSS pixels. All values are integral
/// (ceiled from the raw measurements).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontMetrics {
    /// Cell width: the ceiled advance of `'M'`.
    pub width: f32,
    /// Cell height: ceiled ascent + descent.
    pub height: f32,
    /// Baseline offset from the cell top: ceiled ascent.
    pub baseline: f32,
}

impl FontMetrics {
    /// Measure `'M'` in `{font_size}px {font_family}` and derive cell
    /// geometry.
    ///
    /// Font-declared ascent/descent are preferred over the per-glyph
    /// ink bounds so the metrics are stable across content; if the
    /// surface reports neither, `0.8/0.2 · font_size` are used.
    pub fn measure<S: RenderSurface>(surface: &mut S, font_size: f32, font_family: &str) -> Self {
        surface.set_font(&css_font(font_size, font_family, false, false));
        let measured = surface.measure_text("M");

        let ascent = measured
            .font_ascent
            .or(measured.glyph_ascent)
            .unwrap_or(font_size * FALLBACK_ASCENT);
        let descent = measured
            .font_descent
            .or(measured.glyph_descent)
            .unwrap_or(font_size * FALLBACK_DESCENT);

        let metrics = Self {
            width: measured.width.ceil().max(1.0),
            height: (ascent + descent).ceil().max(1.0),
            baseline: ascent.ceil(),
        };
        log::debug!(
            "measured '{font_family}' at {font_size}px: cell {}x{}, baseline {}",
            metrics.width,
            metrics.height,
            metrics.baseline
        );
        metrics
    }
}

/// Build a CSS font shorthand string for the host text engine.
pub(crate) fn css_font(font_size: f32, font_family: &str, bold: bool, italic: bool) -> String {
    let mut font = String::new();
    if italic {
        font.push_str("italic ");
    }
    if bold {
        font.push_str("bold ");
    }
    font.push_str(&format!("{font_size}px {font_family}"));
    font
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headless::HeadlessSurface;
    use crate::surface::TextMetrics;
    use crate::theme::Color;

    #[test]
    fn test_measure_from_headless_surface() {
        let mut surface = HeadlessSurface::new(1, 1);
        let metrics = FontMetrics::measure(&mut surface, 15.0, "monospace");
        // 0.6 advance factor, 0.8/0.2 ascent/descent
        assert_eq!(metrics.width, 9.0);
        assert_eq!(metrics.height, 15.0);
        assert_eq!(metrics.baseline, 12.0);
    }

    #[test]
    fn test_css_font_prefixes() {
        assert_eq!(css_font(15.0, "monospace", false, false), "15px monospace");
        assert_eq!(css_font(15.0, "monospace", true, false), "bold 15px monospace");
        assert_eq!(
            css_font(12.5, "Menlo", true, true),
            "italic bold 12.5px Menlo"
        );
    }

    /// Surface that reports no ascent/descent at all, to exercise the
    /// fallback constants.
    struct BareSurface;

    impl RenderSurface for BareSurface {
        fn size(&self) -> (u32, u32) {
            (0, 0)
        }
        fn resize(&mut self, _: u32, _: u32) {}
        fn set_scale(&mut self, _: f32, _: f32) {}
        fn set_fill_color(&mut self, _: Color) {}
        fn set_stroke_color(&mut self, _: Color) {}
        fn set_line_width(&mut self, _: f32) {}
        fn set_line_cap(&mut self, _: crate::surface::LineCap) {}
        fn set_global_alpha(&mut self, _: f32) {}
        fn global_alpha(&self) -> f32 {
            1.0
        }
        fn set_font(&mut self, _: &str) {}
        fn fill_rect(&mut self, _: f32, _: f32, _: f32, _: f32) {}
        fn fill_text(&mut self, _: &str, _: f32, _: f32) {}
        fn measure_text(&mut self, _: &str) -> TextMetrics {
            TextMetrics {
                width: 9.6,
                ..TextMetrics::default()
            }
        }
        fn begin_path(&mut self) {}
        fn move_to(&mut self, _: f32, _: f32) {}
        fn line_to(&mut self, _: f32, _: f32) {}
        fn arc(&mut self, _: f32, _: f32, _: f32, _: f32, _: f32) {}
        fn close_path(&mut self) {}
        fn fill_path(&mut self) {}
        fn stroke_path(&mut self) {}
    }

    #[test]
    fn test_fallback_ascent_descent() {
        let mut surface = BareSurface;
        let metrics = FontMetrics::measure(&mut surface, 20.0, "monospace");
        assert_eq!(metrics.width, 10.0); // ceil(9.6)
        assert_eq!(metrics.height, 20.0); // ceil(16 + 4)
        assert_eq!(metrics.baseline, 16.0);
    }

    #[test]
    fn test_glyph_bounds_used_before_fallback() {
        struct GlyphOnly;
        impl RenderSurface for GlyphOnly {
            fn size(&self) -> (u32, u32) {
                (0, 0)
            }
            fn resize(&mut self, _: u32, _: u32) {}
            fn set_scale(&mut self, _: f32, _: f32) {}
            fn set_fill_color(&mut self, _: Color) {}
            fn set_stroke_color(&mut self, _: Color) {}
            fn set_line_width(&mut self, _: f32) {}
            fn set_line_cap(&mut self, _: crate::surface::LineCap) {}
            fn set_global_alpha(&mut self, _: f32) {}
            fn global_alpha(&self) -> f32 {
                1.0
            }
            fn set_font(&mut self, _: &str) {}
            fn fill_rect(&mut self, _: f32, _: f32, _: f32, _: f32) {}
            fn fill_text(&mut self, _: &str, _: f32, _: f32) {}
            fn measure_text(&mut self, _: &str) -> TextMetrics {
                TextMetrics {
                    width: 8.0,
                    glyph_ascent: Some(11.0),
                    glyph_descent: Some(2.5),
                    ..TextMetrics::default()
                }
            }
            fn begin_path(&mut self) {}
            fn move_to(&mut self, _: f32, _: f32) {}
            fn line_to(&mut self, _: f32, _: f32) {}
            fn arc(&mut self, _: f32, _: f32, _: f32, _: f32, _: f32) {}
            fn close_path(&mut self) {}
            fn fill_path(&mut self) {}
            fn stroke_path(&mut self) {}
        }
        let metrics = FontMetrics::measure(&mut GlyphOnly, 15.0, "monospace");
        assert_eq!(metrics.height, 14.0); // ceil(11 + 2.5)
        assert_eq!(metrics.baseline, 11.0);
    }
}
