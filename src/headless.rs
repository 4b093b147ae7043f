//! Software implementation of [`RenderSurface`] over an RGBA8 buffer.
//!
//! Used by the integration tests for pixel-exact assertions and usable
//! by hosts that want offscreen composition without a windowing stack.
//! Rectangle and polygon fills are rasterized for real; text draws are
//! recorded rather than rasterized (there is no font engine here), with
//! synthetic monospace metrics derived from the font size so metric
//! computation stays deterministic.

use crate::surface::{LineCap, RenderSurface, TextMetrics};
use crate::theme::Color;

/// Fraction of the font size used as the synthetic monospace advance.
const ADVANCE_FACTOR: f32 = 0.6;
/// Synthetic font-declared ascent/descent fractions.
const ASCENT_FACTOR: f32 = 0.8;
const DESCENT_FACTOR: f32 = 0.2;

/// A recorded `fill_text` call.
#[derive(Debug, Clone, PartialEq)]
pub struct TextDraw {
    pub text: String,
    /// Baseline position in CSS pixels.
    pub x: f32,
    pub y: f32,
    pub color: Color,
    pub alpha: f32,
    pub font: String,
}

/// In-memory RGBA8 raster surface.
pub struct HeadlessSurface {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
    scale: (f32, f32),
    fill_color: Color,
    stroke_color: Color,
    line_width: f32,
    alpha: f32,
    font: String,
    font_size: f32,
    path: Vec<Vec<(f32, f32)>>,
    text_draws: Vec<TextDraw>,
}

impl HeadlessSurface {
    /// Create a surface of `width × height` device pixels, cleared to
    /// transparent black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; (width * height * 4) as usize],
            scale: (1.0, 1.0),
            fill_color: Color::new(0, 0, 0),
            stroke_color: Color::new(0, 0, 0),
            line_width: 1.0,
            alpha: 1.0,
            font: String::new(),
            font_size: 15.0,
            path: Vec::new(),
            text_draws: Vec::new(),
        }
    }

    /// Raw RGBA8 pixel data, row-major.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// The RGB color at device pixel `(x, y)`. Out-of-bounds reads
    /// return black.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
        if x >= self.width || y >= self.height {
            return [0, 0, 0];
        }
        let i = ((y * self.width + x) * 4) as usize;
        [self.pixels[i], self.pixels[i + 1], self.pixels[i + 2]]
    }

    /// The alpha channel at device pixel `(x, y)`.
    pub fn pixel_alpha(&self, x: u32, y: u32) -> u8 {
        if x >= self.width || y >= self.height {
            return 0;
        }
        self.pixels[((y * self.width + x) * 4 + 3) as usize]
    }

    /// Text draws recorded since the last resize or [`clear_text_draws`].
    ///
    /// [`clear_text_draws`]: HeadlessSurface::clear_text_draws
    pub fn text_draws(&self) -> &[TextDraw] {
        &self.text_draws
    }

    pub fn clear_text_draws(&mut self) {
        self.text_draws.clear();
    }

    fn blend_pixel(&mut self, x: i64, y: i64, color: Color, alpha: f32) {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return;
        }
        let i = ((y as u32 * self.width + x as u32) * 4) as usize;
        let a = alpha.clamp(0.0, 1.0);
        let blend = |dst: u8, src: u8| -> u8 {
            (src as f32 * a + dst as f32 * (1.0 - a)).round() as u8
        };
        self.pixels[i] = blend(self.pixels[i], color.r);
        self.pixels[i + 1] = blend(self.pixels[i + 1], color.g);
        self.pixels[i + 2] = blend(self.pixels[i + 2], color.b);
        let da = self.pixels[i + 3] as f32 / 255.0;
        self.pixels[i + 3] = ((a + da * (1.0 - a)) * 255.0).round() as u8;
    }

    /// Rasterize a device-space rectangle. Edges are rounded once so
    /// that two rects sharing an edge coordinate tile without a gap.
    fn fill_device_rect(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, color: Color, alpha: f32) {
        let px0 = x0.round() as i64;
        let py0 = y0.round() as i64;
        let px1 = x1.round() as i64;
        let py1 = y1.round() as i64;
        for y in py0..py1 {
            for x in px0..px1 {
                self.blend_pixel(x, y, color, alpha);
            }
        }
    }

    /// Scanline even-odd fill over all subpaths in device space.
    fn fill_polygon(&mut self, color: Color, alpha: f32) {
        let subpaths: Vec<Vec<(f32, f32)>> = self
            .path
            .iter()
            .filter(|p| p.len() >= 3)
            .cloned()
            .collect();
        if subpaths.is_empty() {
            return;
        }
        let mut min_y = f32::MAX;
        let mut max_y = f32::MIN;
        for p in &subpaths {
            for &(_, y) in p {
                min_y = min_y.min(y);
                max_y = max_y.max(y);
            }
        }
        let y_start = min_y.floor().max(0.0) as i64;
        let y_end = (max_y.ceil() as i64).min(self.height as i64);
        for py in y_start..y_end {
            let sample_y = py as f32 + 0.5;
            let mut crossings: Vec<f32> = Vec::new();
            for p in &subpaths {
                let n = p.len();
                for i in 0..n {
                    let (x1, y1) = p[i];
                    let (x2, y2) = p[(i + 1) % n];
                    if (y1 <= sample_y) != (y2 <= sample_y) {
                        let t = (sample_y - y1) / (y2 - y1);
                        crossings.push(x1 + t * (x2 - x1));
                    }
                }
            }
            crossings.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
            for pair in crossings.chunks(2) {
                if pair.len() == 2 {
                    let x_start = pair[0].round() as i64;
                    let x_end = pair[1].round() as i64;
                    for px in x_start..x_end {
                        self.blend_pixel(px, py, color, alpha);
                    }
                }
            }
        }
    }

    fn parse_font_size(font: &str) -> Option<f32> {
        font.split_whitespace()
            .find_map(|token| token.strip_suffix("px"))
            .and_then(|n| n.parse::<f32>().ok())
    }
}

impl RenderSurface for HeadlessSurface {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.pixels = vec![0; (width * height * 4) as usize];
        self.scale = (1.0, 1.0);
        self.text_draws.clear();
    }

    fn set_scale(&mut self, sx: f32, sy: f32) {
        self.scale = (sx, sy);
    }

    fn set_fill_color(&mut self, color: Color) {
        self.fill_color = color;
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.stroke_color = color;
    }

    fn set_line_width(&mut self, width: f32) {
        self.line_width = width;
    }

    // Strokes are stamped as squares centered on the path, which
    // already behaves like a square cap; the cap style needs no state.
    fn set_line_cap(&mut self, _cap: LineCap) {}

    fn set_global_alpha(&mut self, alpha: f32) {
        self.alpha = alpha;
    }

    fn global_alpha(&self) -> f32 {
        self.alpha
    }

    fn set_font(&mut self, font: &str) {
        self.font = font.to_string();
        if let Some(size) = Self::parse_font_size(font) {
            self.font_size = size;
        }
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        let (sx, sy) = self.scale;
        let (color, alpha) = (self.fill_color, self.alpha);
        self.fill_device_rect(x * sx, y * sy, (x + w) * sx, (y + h) * sy, color, alpha);
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32) {
        self.text_draws.push(TextDraw {
            text: text.to_string(),
            x,
            y,
            color: self.fill_color,
            alpha: self.alpha,
            font: self.font.clone(),
        });
    }

    fn measure_text(&mut self, text: &str) -> TextMetrics {
        let chars = text.chars().count() as f32;
        TextMetrics {
            width: chars * (self.font_size * ADVANCE_FACTOR).ceil(),
            font_ascent: Some(self.font_size * ASCENT_FACTOR),
            font_descent: Some(self.font_size * DESCENT_FACTOR),
            glyph_ascent: None,
            glyph_descent: None,
        }
    }

    fn begin_path(&mut self) {
        self.path.clear();
    }

    fn move_to(&mut self, x: f32, y: f32) {
        let (sx, sy) = self.scale;
        self.path.push(vec![(x * sx, y * sy)]);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        let (sx, sy) = self.scale;
        let point = (x * sx, y * sy);
        if self.path.is_empty() {
            self.path.push(Vec::new());
        }
        if let Some(sub) = self.path.last_mut() {
            sub.push(point);
        }
    }

    fn arc(&mut self, cx: f32, cy: f32, radius: f32, start_angle: f32, end_angle: f32) {
        // Flatten into line segments; 32 steps keeps full circles round
        // at cell sizes.
        const STEPS: usize = 32;
        let (sx, sy) = self.scale;
        let sweep = end_angle - start_angle;
        if self.path.is_empty() {
            self.path.push(Vec::new());
        }
        let mut points = Vec::with_capacity(STEPS + 1);
        for i in 0..=STEPS {
            let angle = start_angle + sweep * (i as f32 / STEPS as f32);
            points.push((
                (cx + radius * angle.cos()) * sx,
                (cy + radius * angle.sin()) * sy,
            ));
        }
        if let Some(sub) = self.path.last_mut() {
            sub.extend(points);
        }
    }

    fn close_path(&mut self) {
        if let Some(sub) = self.path.last_mut() {
            if let Some(&first) = sub.first() {
                sub.push(first);
            }
        }
    }

    fn fill_path(&mut self) {
        let (color, alpha) = (self.fill_color, self.alpha);
        self.fill_polygon(color, alpha);
    }

    fn stroke_path(&mut self) {
        // Stamp squares along each segment. Crude but sufficient for the
        // thin strokes the glyph engine uses (diagonals, arcs).
        let (color, alpha) = (self.stroke_color, self.alpha);
        let half = (self.line_width * self.scale.0 / 2.0).max(0.5);
        let subpaths = self.path.clone();
        for sub in &subpaths {
            for pair in sub.windows(2) {
                let (x1, y1) = pair[0];
                let (x2, y2) = pair[1];
                let len = ((x2 - x1).powi(2) + (y2 - y1).powi(2)).sqrt();
                let steps = (len * 2.0).ceil().max(1.0) as usize;
                for i in 0..=steps {
                    let t = i as f32 / steps as f32;
                    let x = x1 + (x2 - x1) * t;
                    let y = y1 + (y2 - y1) * t;
                    self.fill_device_rect(x - half, y - half, x + half, y + half, color, alpha);
                }
            }
        }
    }
}
