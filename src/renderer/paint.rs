//! Two-pass cell painting and cursor drawing.
//!
//! Backgrounds for a whole row are painted before any of its text so
//! glyphs that overflow their cell (tall diacritics, italics) are never
//! erased by a later cell's background fill.

use crate::buffer::{Renderable, SelectionCoords};
use crate::cell::{Cell, CellFlags};
use crate::font_metrics::css_font;
use crate::glyph::{self, GlyphFamily};
use crate::renderer::{CursorStyle, Renderer};
use crate::surface::RenderSurface;
use crate::theme::Color;

/// Hover underline color for links (OSC 8 and regex-detected).
const LINK_ACCENT: Color = Color::new(0x4A, 0x90, 0xE2);
/// Underline/strikethrough stroke height in CSS pixels.
const DECORATION_THICKNESS: f32 = 1.0;

impl<S: RenderSurface> Renderer<S> {
    /// Paint one viewport row: background pass, then text and
    /// decorations.
    ///
    /// `buffer_row` is the live-grid row index when the line came from
    /// the buffer; scrollback lines have none and fall back to the
    /// cell's base codepoint for grapheme clusters.
    pub(crate) fn paint_row(
        &mut self,
        screen_y: usize,
        line: &[Cell],
        buffer: &dyn Renderable,
        buffer_row: Option<usize>,
        selection: Option<SelectionCoords>,
        cols: usize,
    ) {
        let cw = self.metrics.width;
        let ch = self.metrics.height;
        let row_y = screen_y as f32 * ch;

        // Pass 1: backgrounds. The row is reset to the theme background
        // and only non-default cell backgrounds are filled on top.
        self.surface.set_global_alpha(1.0);
        self.surface.set_fill_color(self.theme.background);
        self.surface.fill_rect(0.0, row_y, cols as f32 * cw, ch);

        for (col, cell) in line.iter().enumerate().take(cols) {
            if cell.width == 0 {
                continue;
            }
            let x = col as f32 * cw;
            let span = cell.width as f32 * cw;
            let selected = selection.is_some_and(|sel| sel.contains(col, screen_y));
            if selected {
                self.surface.set_fill_color(self.theme.selection_bg);
                self.surface.fill_rect(x, row_y, span, ch);
            } else {
                let bg = effective_bg(cell);
                if bg != [0, 0, 0] {
                    self.surface.set_fill_color(Color::from_array(bg));
                    self.surface.fill_rect(x, row_y, span, ch);
                }
            }
        }

        // Pass 2: text and decorations.
        for (col, cell) in line.iter().enumerate().take(cols) {
            if cell.width == 0 {
                continue;
            }
            let x = col as f32 * cw;
            let span = cell.width as f32 * cw;
            let selected = selection.is_some_and(|sel| sel.contains(col, screen_y));
            let fg = if selected {
                self.theme.selection_fg
            } else {
                Color::from_array(effective_fg(cell))
            };

            let faint = cell.flags.contains(CellFlags::FAINT);
            if faint {
                self.surface.set_global_alpha(0.5);
            }

            if cell.codepoint != 0 && !cell.flags.contains(CellFlags::INVISIBLE) {
                let grapheme = if cell.grapheme_len > 0 {
                    buffer_row.and_then(|row| buffer.grapheme(row, col))
                } else {
                    None
                };
                self.draw_cell_content(cell, grapheme, x, row_y, span, fg);
            }

            if cell.flags.contains(CellFlags::UNDERLINE) {
                self.surface.set_fill_color(fg);
                self.surface.fill_rect(
                    x,
                    row_y + self.metrics.baseline + 2.0,
                    span,
                    DECORATION_THICKNESS,
                );
            }
            if cell.flags.contains(CellFlags::STRIKETHROUGH) {
                self.surface.set_fill_color(fg);
                self.surface
                    .fill_rect(x, row_y + ch / 2.0, span, DECORATION_THICKNESS);
            }

            // Link hover underlines draw in the fixed accent color.
            let link_hovered = self.hovered_hyperlink_id != 0
                && cell.hyperlink_id == self.hovered_hyperlink_id;
            let range_hovered = self
                .hovered_link_range
                .is_some_and(|range| range.contains(col, screen_y));
            if link_hovered || range_hovered {
                self.surface.set_fill_color(LINK_ACCENT);
                self.surface.fill_rect(
                    x,
                    row_y + self.metrics.baseline + 2.0,
                    span,
                    DECORATION_THICKNESS,
                );
            }

            if faint {
                self.surface.set_global_alpha(1.0);
            }
        }
    }

    /// Draw one cell's glyph: procedurally when classified, otherwise
    /// through the host text engine at the baseline.
    fn draw_cell_content(
        &mut self,
        cell: &Cell,
        grapheme: Option<String>,
        x: f32,
        row_y: f32,
        span: f32,
        color: Color,
    ) {
        self.surface.set_fill_color(color);
        self.surface.set_stroke_color(color);

        let family = glyph::classify_codepoint(cell.codepoint);
        if family != GlyphFamily::None {
            glyph::draw_glyph(
                &mut self.surface,
                family,
                cell.codepoint,
                x,
                row_y,
                span,
                self.metrics.height,
            );
            return;
        }

        let Some(ch) = char::from_u32(cell.codepoint) else {
            return;
        };
        let text = grapheme.unwrap_or_else(|| ch.to_string());
        self.surface.set_font(&css_font(
            self.font_size,
            &self.font_family,
            cell.flags.contains(CellFlags::BOLD),
            cell.flags.contains(CellFlags::ITALIC),
        ));
        self.surface
            .fill_text(&text, x, row_y + self.metrics.baseline);
    }

    /// Draw the cursor at cell `(x, y)`.
    pub(crate) fn draw_cursor(
        &mut self,
        buffer: &dyn Renderable,
        x: usize,
        y: usize,
        cols: usize,
        rows: usize,
    ) {
        if x >= cols || y >= rows {
            return;
        }
        let cell = buffer.line(y).and_then(|line| line.get(x)).copied();
        let cw = self.metrics.width;
        let ch = self.metrics.height;
        let span = cell.map_or(1.0, |c| c.width.max(1) as f32) * cw;
        let cell_x = x as f32 * cw;
        let cell_y = y as f32 * ch;

        self.surface.set_global_alpha(1.0);
        self.surface.set_fill_color(self.theme.cursor);
        match self.cursor_style {
            CursorStyle::Block => {
                self.surface.fill_rect(cell_x, cell_y, span, ch);
                // Repaint the glyph in the accent color so it stays
                // readable inside the filled block.
                if let Some(cell) = cell {
                    if cell.codepoint != 0 && !cell.flags.contains(CellFlags::INVISIBLE) {
                        let grapheme = if cell.grapheme_len > 0 {
                            buffer.grapheme(y, x)
                        } else {
                            None
                        };
                        let accent = self.theme.cursor_accent;
                        self.draw_cell_content(&cell, grapheme, cell_x, cell_y, span, accent);
                    }
                }
            }
            CursorStyle::Underline => {
                let strip = (ch * 0.15).floor().max(2.0);
                self.surface.fill_rect(cell_x, cell_y + ch - strip, span, strip);
            }
            CursorStyle::Bar => {
                let strip = (cw * 0.15).floor().max(2.0);
                self.surface.fill_rect(cell_x, cell_y, strip, ch);
            }
        }
    }
}

/// Background color after the INVERSE swap.
fn effective_bg(cell: &Cell) -> [u8; 3] {
    if cell.flags.contains(CellFlags::INVERSE) {
        cell.fg
    } else {
        cell.bg
    }
}

/// Foreground color after the INVERSE swap.
fn effective_fg(cell: &Cell) -> [u8; 3] {
    if cell.flags.contains(CellFlags::INVERSE) {
        cell.bg
    } else {
        cell.fg
    }
}
