//! The host-supplied 2D raster surface the renderer draws on.
//!
//! The renderer owns the surface for the duration of a frame and drives
//! it through this trait: rectangle and path fills for procedural
//! glyphs, `fill_text`/`measure_text` for everything delegated to the
//! host text engine, and a uniform transform scale for device-pixel
//! ratios. A browser canvas, a GPU quad batcher or the bundled
//! [`HeadlessSurface`](crate::headless::HeadlessSurface) can all sit
//! behind it.

use crate::theme::Color;

/// Result of measuring a string on the surface.
///
/// The `font_*` fields are the font-declared ascent/descent, which are
/// stable across content; the `glyph_*` fields are the measured ink
/// bounds of the specific string. Metric derivation prefers the former
/// so cell geometry does not depend on what happened to be measured.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextMetrics {
    /// Advance width of the measured string in CSS pixels.
    pub width: f32,
    pub font_ascent: Option<f32>,
    pub font_descent: Option<f32>,
    pub glyph_ascent: Option<f32>,
    pub glyph_descent: Option<f32>,
}

/// Stroke end-cap style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineCap {
    #[default]
    Butt,
    /// Extends the stroke by half its width past each endpoint. Rounded
    /// box-drawing corners rely on this to meet their straight
    /// extensions without a notch.
    Square,
}

/// A 2D raster drawing context.
///
/// Coordinates are CSS pixels; the transform set via [`set_scale`]
/// maps them to device pixels. [`resize`] resets the transform to
/// identity, so callers must reapply the scale after every resize.
///
/// [`set_scale`]: RenderSurface::set_scale
/// [`resize`]: RenderSurface::resize
pub trait RenderSurface {
    /// Whether the drawing context has been lost. A lost context fails
    /// renderer construction and skips frames until restored.
    fn context_lost(&self) -> bool {
        false
    }

    /// Current surface size in device pixels.
    fn size(&self) -> (u32, u32);

    /// Resize the backing store to `width × height` device pixels.
    /// Resets the transform and clears the surface.
    fn resize(&mut self, width: u32, height: u32);

    /// Scale the drawing transform. Applied on top of identity, not
    /// cumulative with previous calls.
    fn set_scale(&mut self, sx: f32, sy: f32);

    fn set_fill_color(&mut self, color: Color);
    fn set_stroke_color(&mut self, color: Color);
    fn set_line_width(&mut self, width: f32);
    fn set_line_cap(&mut self, cap: LineCap);

    /// Global alpha multiplier applied to subsequent draws.
    fn set_global_alpha(&mut self, alpha: f32);
    fn global_alpha(&self) -> f32;

    /// Set the font for `fill_text`/`measure_text`, in CSS shorthand
    /// (`"italic bold 15px monospace"`).
    fn set_font(&mut self, font: &str);

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32);

    /// Draw `text` with its alphabetic baseline at `(x, y)`.
    fn fill_text(&mut self, text: &str, x: f32, y: f32);

    fn measure_text(&mut self, text: &str) -> TextMetrics;

    fn begin_path(&mut self);
    fn move_to(&mut self, x: f32, y: f32);
    fn line_to(&mut self, x: f32, y: f32);

    /// Append a circular arc from `start_angle` to `end_angle`
    /// (radians, clockwise, 0 = +x axis), connected to the current
    /// path point if any.
    fn arc(&mut self, cx: f32, cy: f32, radius: f32, start_angle: f32, end_angle: f32);

    fn close_path(&mut self);
    fn fill_path(&mut self);
    fn stroke_path(&mut self);
}
