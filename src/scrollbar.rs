//! Scrollbar geometry and hit testing.
//!
//! Pure layout math shared by the renderer (which draws the computed
//! rectangles with fade alpha) and by hosts implementing thumb
//! dragging. All coordinates are CSS pixels relative to the surface.

/// Scrollbar width in CSS pixels.
pub const SCROLLBAR_WIDTH: f32 = 8.0;
/// Padding from the right edge and from the top/bottom edges.
pub const SCROLLBAR_PADDING: f32 = 4.0;
/// Minimum thumb height so it stays grabbable on deep scrollback.
pub const MIN_THUMB_HEIGHT: f32 = 20.0;

/// Computed scrollbar geometry for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollbarLayout {
    /// Left edge of the track (and thumb).
    pub x: f32,
    /// Top of the track.
    pub track_y: f32,
    pub track_height: f32,
    /// Top of the thumb.
    pub thumb_y: f32,
    pub thumb_height: f32,
}

impl ScrollbarLayout {
    /// Compute scrollbar geometry.
    ///
    /// Returns `None` when there is nothing to scroll (`scrollback_len`
    /// is zero) or no room to draw a track.
    pub fn compute(
        surface_width: f32,
        surface_height: f32,
        viewport_y: f64,
        scrollback_len: usize,
        visible_rows: usize,
    ) -> Option<Self> {
        if scrollback_len == 0 || visible_rows == 0 {
            return None;
        }
        let track_height = surface_height - 2.0 * SCROLLBAR_PADDING;
        if track_height <= 0.0 {
            return None;
        }
        let total_lines = scrollback_len + visible_rows;
        let thumb_height =
            (visible_rows as f32 / total_lines as f32 * track_height).max(MIN_THUMB_HEIGHT);
        let thumb_height = thumb_height.min(track_height);

        // viewport_y counts lines scrolled up from the live bottom, so
        // the thumb sits at the bottom when it is zero.
        let scrolled = (viewport_y / scrollback_len as f64).clamp(0.0, 1.0) as f32;
        let track_y = SCROLLBAR_PADDING;
        let thumb_y = track_y + (track_height - thumb_height) * (1.0 - scrolled);

        Some(Self {
            x: surface_width - SCROLLBAR_WIDTH - SCROLLBAR_PADDING,
            track_y,
            track_height,
            thumb_y,
            thumb_height,
        })
    }

    /// The gutter rectangle `(x, y, w, h)` to clear before drawing, so
    /// a faded-out thumb leaves no ghost.
    pub fn gutter(surface_width: f32, surface_height: f32) -> (f32, f32, f32, f32) {
        (
            surface_width - SCROLLBAR_WIDTH - SCROLLBAR_PADDING,
            0.0,
            SCROLLBAR_WIDTH + SCROLLBAR_PADDING,
            surface_height,
        )
    }

    /// Whether a point (CSS pixels) is inside the thumb.
    pub fn contains_point(&self, x: f32, y: f32) -> bool {
        x >= self.x
            && x <= self.x + SCROLLBAR_WIDTH
            && y >= self.thumb_y
            && y <= self.thumb_y + self.thumb_height
    }

    /// Whether an x coordinate falls inside the track column.
    pub fn track_contains_x(&self, x: f32) -> bool {
        x >= self.x && x <= self.x + SCROLLBAR_WIDTH
    }

    /// Thumb bounds as `(top, height)`.
    pub fn thumb_bounds(&self) -> (f32, f32) {
        (self.thumb_y, self.thumb_height)
    }

    /// Convert a desired thumb-top y coordinate into a viewport offset,
    /// for scrollbar dragging.
    pub fn thumb_y_to_viewport(&self, thumb_top: f32, scrollback_len: usize) -> usize {
        let travel = (self.track_height - self.thumb_height).max(1.0);
        let clamped = (thumb_top - self.track_y).clamp(0.0, travel);
        let scrolled = 1.0 - clamped / travel;
        (scrolled as f64 * scrollback_len as f64).round() as usize
    }
}
