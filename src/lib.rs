//! termframe — a terminal display renderer.
//!
//! Given a cell-addressable grid of styled cells (plus optional
//! scrollback and selection providers), the renderer produces
//! pixel-exact output on a host-supplied 2D raster surface. It carries
//! a procedural glyph engine for box-drawing, block-element, braille
//! and Symbols-for-Legacy-Computing codepoints that tile seamlessly
//! across cell boundaries, a dirty-row-tracked two-pass draw loop, and
//! cursor/selection/link/scrollbar compositing.
//!
//! The host supplies three things: a [`surface::RenderSurface`] to draw
//! on, a [`buffer::Renderable`] delivering cells, and optionally a
//! [`buffer::ScrollbackProvider`] and [`buffer::SelectionProvider`].
//!
//! ```
//! use termframe::headless::HeadlessSurface;
//! use termframe::renderer::{Renderer, RendererOptions};
//!
//! let surface = HeadlessSurface::new(1, 1);
//! let renderer = Renderer::new(surface, RendererOptions::default()).unwrap();
//! assert!(renderer.char_width() > 0.0);
//! ```

pub mod buffer;
pub mod cell;
pub mod error;
pub mod font_metrics;
pub mod glyph;
pub mod headless;
pub mod link;
pub mod renderer;
pub mod scrollbar;
pub mod surface;
pub mod theme;

pub use buffer::{
    CursorState, GridSize, Renderable, ScrollbackProvider, SelectionCoords, SelectionProvider,
};
pub use cell::{Cell, CellFlags};
pub use error::RendererError;
pub use font_metrics::FontMetrics;
pub use link::LinkRange;
pub use renderer::{CursorStyle, Renderer, RendererOptions};
pub use surface::{LineCap, RenderSurface, TextMetrics};
pub use theme::{Color, Theme};
