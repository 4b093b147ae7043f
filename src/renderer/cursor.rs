//! Cursor shape selection and blink timing.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

/// Blink half-period: visibility toggles every 530 ms.
pub const BLINK_INTERVAL_MS: u128 = 530;

/// Cursor rendering shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CursorStyle {
    #[default]
    Block,
    Underline,
    Bar,
}

/// Wall-clock blink state.
///
/// Visibility is derived from elapsed time at draw time rather than a
/// timer thread, which keeps blinking independent of frame rate and
/// leaves nothing to unregister on dispose beyond freezing the state.
#[derive(Debug, Clone)]
pub struct CursorBlink {
    enabled: bool,
    epoch: Instant,
}

impl CursorBlink {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            epoch: Instant::now(),
        }
    }

    /// Enable or disable blinking. Resets the phase so the cursor is
    /// visible immediately after any change.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        self.epoch = Instant::now();
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Whether the cursor is in the visible half of the blink cycle.
    pub fn visible(&self) -> bool {
        !self.enabled || Self::phase_visible(self.epoch.elapsed())
    }

    /// Pure phase function: visible during even 530 ms half-periods.
    pub fn phase_visible(elapsed: Duration) -> bool {
        (elapsed.as_millis() / BLINK_INTERVAL_MS) % 2 == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_blink_is_always_visible() {
        let blink = CursorBlink::new(false);
        assert!(blink.visible());
    }

    #[test]
    fn test_enabled_blink_starts_visible() {
        let blink = CursorBlink::new(true);
        assert!(blink.visible());
    }

    #[test]
    fn test_phase_toggles_every_interval() {
        assert!(CursorBlink::phase_visible(Duration::from_millis(0)));
        assert!(CursorBlink::phase_visible(Duration::from_millis(529)));
        assert!(!CursorBlink::phase_visible(Duration::from_millis(530)));
        assert!(!CursorBlink::phase_visible(Duration::from_millis(1059)));
        assert!(CursorBlink::phase_visible(Duration::from_millis(1060)));
    }

    #[test]
    fn test_cursor_style_serde_names() {
        assert_eq!(serde_json::to_string(&CursorStyle::Bar).unwrap(), "\"bar\"");
        let style: CursorStyle = serde_json::from_str("\"underline\"").unwrap();
        assert_eq!(style, CursorStyle::Underline);
    }
}
