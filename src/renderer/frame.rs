//! Per-frame orchestration: decides which rows to repaint, composes
//! scrollback with the live grid, and layers cursor and scrollbar on
//! top of the painted cells.

use crate::buffer::{Renderable, ScrollbackProvider};
use crate::cell::Cell;
use crate::renderer::Renderer;
use crate::scrollbar::{ScrollbarLayout, SCROLLBAR_WIDTH};
use crate::surface::RenderSurface;
use crate::theme::Color;

/// Scrollbar track and thumb base color.
const SCROLLBAR_COLOR: Color = Color::new(128, 128, 128);

impl<S: RenderSurface> Renderer<S> {
    /// Render one frame.
    ///
    /// * `force_all` — repaint every row regardless of dirty state.
    /// * `viewport_y` — lines scrolled up from the live bottom; may be
    ///   fractional, row indexing uses its floor so smooth-scroll
    ///   animators stay stable.
    /// * `scrollback` — historical lines, required only when scrolled.
    /// * `scrollbar_opacity` — fade multiplier; `0` hides the bar.
    ///
    /// Dirty state on the buffer and selection manager is cleared by
    /// the end of every call, including degenerate ones.
    pub fn render(
        &mut self,
        buffer: &mut dyn Renderable,
        force_all: bool,
        viewport_y: f64,
        scrollback: Option<&dyn ScrollbackProvider>,
        scrollbar_opacity: f32,
    ) {
        if self.disposed {
            return;
        }
        if self.surface.context_lost() {
            self.finish_frame(buffer);
            return;
        }
        let dims = buffer.dimensions();
        if dims.cols == 0 || dims.rows == 0 {
            self.finish_frame(buffer);
            return;
        }

        let mut force_full = force_all || self.full_redraw_pending || buffer.needs_full_redraw();

        // Keep the backing store matched to the grid; resizing resets
        // the transform, so the DPR scale is reapplied afterwards.
        let expected = self.device_size(dims.cols, dims.rows);
        if self.surface.size() != expected {
            self.surface.resize(expected.0, expected.1);
            force_full = true;
            log::debug!(
                "surface resized to {}x{} device px for {}x{} cells",
                expected.0,
                expected.1,
                dims.cols,
                dims.rows
            );
        }
        self.surface
            .set_scale(self.device_pixel_ratio, self.device_pixel_ratio);

        let vy = viewport_y.max(0.0).floor() as usize;
        if vy != self.last_viewport_y {
            force_full = true;
        }

        // Refresh emulator state once; the cursor position must match
        // the cells fetched below.
        let cursor = buffer.cursor();

        // Selection coordinates are cached for the frame so the inner
        // cell loop never re-queries the manager.
        let selection_coords = self.selection.as_ref().and_then(|sel| {
            let sel = sel.borrow();
            if sel.has_selection() {
                sel.selection_coords()
            } else {
                None
            }
        });

        let mut rows_to_render = vec![false; dims.rows];
        if force_full || vy > 0 {
            rows_to_render.fill(true);
        } else {
            for (y, marked) in rows_to_render.iter_mut().enumerate() {
                if buffer.is_row_dirty(y) {
                    *marked = true;
                }
            }
        }

        // Cursor rows: repaint on movement and while blinking.
        if vy == 0 {
            let moved = self.last_cursor != Some((cursor.x, cursor.y));
            if moved || self.blink.enabled() {
                if cursor.y < dims.rows {
                    rows_to_render[cursor.y] = true;
                }
                if moved {
                    if let Some((_, prev_y)) = self.last_cursor {
                        if prev_y < dims.rows {
                            rows_to_render[prev_y] = true;
                        }
                    }
                }
            }
        }

        // Selection rows: the current span plus rows whose selection
        // state changed (to erase stale overlay).
        if let Some(coords) = selection_coords {
            for y in coords.start_row..=coords.end_row {
                if y < dims.rows {
                    rows_to_render[y] = true;
                }
            }
        }
        if let Some(sel) = &self.selection {
            let mut sel = sel.borrow_mut();
            for y in sel.dirty_rows() {
                if y < dims.rows {
                    rows_to_render[y] = true;
                }
            }
            sel.clear_dirty_rows();
        }

        // Link hover changes: repaint rows containing the old or new
        // hyperlink group, and the old and new regex-link spans.
        if self.hovered_hyperlink_id != self.prev_hovered_hyperlink_id {
            let (old_id, new_id) = (self.prev_hovered_hyperlink_id, self.hovered_hyperlink_id);
            for (y, marked) in rows_to_render.iter_mut().enumerate() {
                if *marked {
                    continue;
                }
                if let (Some(line), _) = resolve_line(&*buffer, scrollback, vy, y) {
                    if line.iter().any(|cell| {
                        cell.hyperlink_id != 0
                            && (cell.hyperlink_id == old_id || cell.hyperlink_id == new_id)
                    }) {
                        *marked = true;
                    }
                }
            }
            self.prev_hovered_hyperlink_id = self.hovered_hyperlink_id;
        }
        if self.hovered_link_range != self.prev_hovered_link_range {
            for range in [self.prev_hovered_link_range, self.hovered_link_range]
                .into_iter()
                .flatten()
            {
                for y in range.rows() {
                    if y < dims.rows {
                        rows_to_render[y] = true;
                    }
                }
            }
            self.prev_hovered_link_range = self.hovered_link_range;
        }

        // Expand to neighbor rows to absorb glyph overflow from tall
        // diacritics repainted by the two-pass cell draw.
        let expanded: Vec<bool> = (0..dims.rows)
            .map(|y| {
                rows_to_render[y]
                    || (y > 0 && rows_to_render[y - 1])
                    || (y + 1 < dims.rows && rows_to_render[y + 1])
            })
            .collect();

        for (y, render_row) in expanded.iter().enumerate() {
            if !render_row {
                continue;
            }
            let (line, buffer_row) = resolve_line(&*buffer, scrollback, vy, y);
            let Some(line) = line else {
                continue;
            };
            self.paint_row(y, line, &*buffer, buffer_row, selection_coords, dims.cols);
        }

        if vy == 0 && cursor.visible && self.blink.visible() && !self.cursor_suppressed {
            self.draw_cursor(&*buffer, cursor.x, cursor.y, dims.cols, dims.rows);
        }

        if let Some(sb) = scrollback {
            self.draw_scrollbar(
                dims.cols,
                dims.rows,
                viewport_y,
                sb.scrollback_len(),
                scrollbar_opacity,
            );
        }

        self.last_cursor = Some((cursor.x, cursor.y));
        self.last_viewport_y = vy;
        self.full_redraw_pending = false;
        buffer.clear_dirty();
    }

    /// Degenerate-frame epilogue: dirty state is cleared even when no
    /// pixel was touched.
    fn finish_frame(&mut self, buffer: &mut dyn Renderable) {
        if let Some(sel) = &self.selection {
            sel.borrow_mut().clear_dirty_rows();
        }
        buffer.clear_dirty();
    }

    fn draw_scrollbar(
        &mut self,
        cols: usize,
        rows: usize,
        viewport_y: f64,
        scrollback_len: usize,
        opacity: f32,
    ) {
        let css_width = cols as f32 * self.metrics.width;
        let css_height = rows as f32 * self.metrics.height;

        // Clear the gutter first, even at zero opacity, so a fully
        // faded thumb never ghosts.
        let (gx, gy, gw, gh) = ScrollbarLayout::gutter(css_width, css_height);
        self.surface.set_global_alpha(1.0);
        self.surface.set_fill_color(self.theme.background);
        self.surface.fill_rect(gx, gy, gw, gh);
        if opacity <= 0.0 {
            return;
        }

        let Some(layout) =
            ScrollbarLayout::compute(css_width, css_height, viewport_y, scrollback_len, rows)
        else {
            return;
        };

        self.surface.set_fill_color(SCROLLBAR_COLOR);
        self.surface.set_global_alpha(0.1 * opacity);
        self.surface
            .fill_rect(layout.x, layout.track_y, SCROLLBAR_WIDTH, layout.track_height);

        let thumb_alpha = if viewport_y > 0.0 { 0.5 } else { 0.3 };
        self.surface.set_global_alpha(thumb_alpha * opacity);
        self.surface
            .fill_rect(layout.x, layout.thumb_y, SCROLLBAR_WIDTH, layout.thumb_height);
        self.surface.set_global_alpha(1.0);
    }
}

/// Pick the source line for viewport row `y`: scrollback above the
/// seam, live buffer below it. The second value is the buffer-relative
/// row when the line came from the live grid (grapheme lookups are
/// only valid there).
fn resolve_line<'a>(
    buffer: &'a dyn Renderable,
    scrollback: Option<&'a dyn ScrollbackProvider>,
    vy: usize,
    y: usize,
) -> (Option<&'a [Cell]>, Option<usize>) {
    if vy == 0 {
        return (buffer.line(y), Some(y));
    }
    if y < vy {
        let Some(sb) = scrollback else {
            return (None, None);
        };
        // Offset of the on-screen top row within scrollback storage.
        let Some(base) = sb.scrollback_len().checked_sub(vy) else {
            return (None, None);
        };
        (sb.scrollback_line(base + y), None)
    } else {
        let row = y - vy;
        (buffer.line(row), Some(row))
    }
}
