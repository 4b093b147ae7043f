//! The renderer: owns the drawing surface, theme, font metrics and all
//! cross-frame state, and composites cell grids into pixels.

mod cursor;
mod frame;
mod paint;

pub use cursor::{CursorBlink, CursorStyle, BLINK_INTERVAL_MS};

use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::buffer::SelectionProvider;
use crate::error::RendererError;
use crate::font_metrics::FontMetrics;
use crate::link::LinkRange;
use crate::surface::RenderSurface;
use crate::theme::Theme;

/// Renderer construction options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RendererOptions {
    pub font_size: f32,
    pub font_family: String,
    pub cursor_style: CursorStyle,
    pub cursor_blink: bool,
    pub theme: Theme,
    /// Device pixels per CSS pixel.
    pub device_pixel_ratio: f32,
}

impl Default for RendererOptions {
    fn default() -> Self {
        Self {
            font_size: 15.0,
            font_family: "monospace".to_string(),
            cursor_style: CursorStyle::default(),
            cursor_blink: false,
            theme: Theme::default(),
            device_pixel_ratio: 1.0,
        }
    }
}

/// Terminal display renderer over a host-supplied raster surface.
pub struct Renderer<S: RenderSurface> {
    pub(crate) surface: S,
    pub(crate) font_size: f32,
    pub(crate) font_family: String,
    pub(crate) cursor_style: CursorStyle,
    pub(crate) blink: CursorBlink,
    pub(crate) device_pixel_ratio: f32,
    pub(crate) theme: Theme,
    pub(crate) metrics: FontMetrics,

    pub(crate) selection: Option<Rc<RefCell<dyn SelectionProvider>>>,

    // Frame state carried across render() calls
    pub(crate) last_cursor: Option<(usize, usize)>,
    pub(crate) last_viewport_y: usize,
    pub(crate) cursor_suppressed: bool,
    pub(crate) hovered_hyperlink_id: u32,
    pub(crate) prev_hovered_hyperlink_id: u32,
    pub(crate) hovered_link_range: Option<LinkRange>,
    pub(crate) prev_hovered_link_range: Option<LinkRange>,
    pub(crate) full_redraw_pending: bool,
    pub(crate) disposed: bool,
}

impl<S: RenderSurface> Renderer<S> {
    /// Create a renderer over `surface`.
    ///
    /// Measures font metrics immediately; fails if the surface has no
    /// usable drawing context.
    pub fn new(mut surface: S, options: RendererOptions) -> Result<Self, RendererError> {
        if surface.context_lost() {
            return Err(RendererError::ContextUnavailable);
        }
        let metrics = FontMetrics::measure(&mut surface, options.font_size, &options.font_family);
        Ok(Self {
            surface,
            font_size: options.font_size,
            font_family: options.font_family,
            cursor_style: options.cursor_style,
            blink: CursorBlink::new(options.cursor_blink),
            device_pixel_ratio: options.device_pixel_ratio,
            theme: options.theme,
            metrics,
            selection: None,
            last_cursor: None,
            last_viewport_y: 0,
            cursor_suppressed: false,
            hovered_hyperlink_id: 0,
            prev_hovered_hyperlink_id: 0,
            hovered_link_range: None,
            prev_hovered_link_range: None,
            full_redraw_pending: true,
            disposed: false,
        })
    }

    /// Replace the theme. Readers within a frame observe a single
    /// snapshot; the swap takes effect on the next frame, which is
    /// repainted in full.
    pub fn set_theme(&mut self, theme: Theme) {
        if self.theme != theme {
            self.theme = theme;
            self.full_redraw_pending = true;
            log::debug!("theme replaced; scheduling full repaint");
        }
    }

    pub fn set_font_size(&mut self, size: f32) {
        self.font_size = size;
        self.remeasure_font();
    }

    pub fn set_font_family(&mut self, family: &str) {
        self.font_family = family.to_string();
        self.remeasure_font();
    }

    /// Re-derive font metrics from the surface (e.g. after the host
    /// loads a web font).
    pub fn remeasure_font(&mut self) {
        self.metrics = FontMetrics::measure(&mut self.surface, self.font_size, &self.font_family);
        self.full_redraw_pending = true;
    }

    pub fn set_cursor_style(&mut self, style: CursorStyle) {
        self.cursor_style = style;
        self.full_redraw_pending = true;
    }

    pub fn set_cursor_blink(&mut self, blink: bool) {
        self.blink.set_enabled(blink);
    }

    /// Externally hide the cursor regardless of emulator state, e.g.
    /// while an overlay UI owns the grid.
    pub fn suppress_cursor(&mut self, suppressed: bool) {
        self.cursor_suppressed = suppressed;
    }

    pub fn set_selection_manager(&mut self, manager: Rc<RefCell<dyn SelectionProvider>>) {
        self.selection = Some(manager);
    }

    /// Set the hovered OSC 8 link group. `0` means no hover. Rows
    /// containing the old and new group are repainted next frame.
    pub fn set_hovered_hyperlink_id(&mut self, id: u32) {
        self.hovered_hyperlink_id = id;
    }

    /// Set the hovered regex-detected link span, or `None` to clear.
    pub fn set_hovered_link_range(&mut self, range: Option<LinkRange>) {
        self.hovered_link_range = range;
    }

    /// Resize the surface for a `cols × rows` grid and reapply the
    /// device-pixel-ratio transform (resizing resets it).
    pub fn resize(&mut self, cols: usize, rows: usize) {
        let (width, height) = self.device_size(cols, rows);
        self.surface.resize(width, height);
        self.surface
            .set_scale(self.device_pixel_ratio, self.device_pixel_ratio);
        self.full_redraw_pending = true;
        log::debug!("surface resized to {width}x{height} device px for {cols}x{rows} cells");
    }

    /// Fill the whole surface with the theme background.
    pub fn clear(&mut self) {
        if self.surface.context_lost() {
            return;
        }
        let (width, height) = self.surface.size();
        let scale = self.device_pixel_ratio.max(f32::MIN_POSITIVE);
        self.surface.set_scale(scale, scale);
        self.surface.set_global_alpha(1.0);
        self.surface.set_fill_color(self.theme.background);
        self.surface
            .fill_rect(0.0, 0.0, width as f32 / scale, height as f32 / scale);
        self.full_redraw_pending = true;
    }

    pub fn metrics(&self) -> &FontMetrics {
        &self.metrics
    }

    pub fn char_width(&self) -> f32 {
        self.metrics.width
    }

    pub fn char_height(&self) -> f32 {
        self.metrics.height
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Release the renderer's long-lived resources. Blink state is
    /// frozen and subsequent `render` calls are no-ops.
    pub fn dispose(&mut self) {
        self.blink.set_enabled(false);
        self.disposed = true;
        log::debug!("renderer disposed");
    }

    /// Expected surface size in device pixels for a grid.
    pub(crate) fn device_size(&self, cols: usize, rows: usize) -> (u32, u32) {
        let width = (cols as f32 * self.metrics.width * self.device_pixel_ratio).round() as u32;
        let height = (rows as f32 * self.metrics.height * self.device_pixel_ratio).round() as u32;
        (width, height)
    }
}
