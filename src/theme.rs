//! Color theme definitions for the renderer.

use serde::{Deserialize, Serialize};

/// A color in RGB format.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#rrggbb` hex string. Returns `None` on malformed input.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some(Self { r, g, b })
    }

    /// Format as a `#rrggbb` hex string.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn as_array(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    pub fn from_array(rgb: [u8; 3]) -> Self {
        Self::new(rgb[0], rgb[1], rgb[2])
    }
}

/// Terminal color theme: 16 ANSI colors plus the renderer-specific slots.
///
/// Selection uses solid replacement, not an alpha overlay: selected cells
/// paint `selection_bg` and draw text in `selection_fg`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Theme {
    pub foreground: Color,
    pub background: Color,
    pub cursor: Color,
    /// Color for the glyph repainted over a block cursor.
    pub cursor_accent: Color,
    pub selection_bg: Color,
    pub selection_fg: Color,

    // ANSI colors (0-15)
    pub black: Color,
    pub red: Color,
    pub green: Color,
    pub yellow: Color,
    pub blue: Color,
    pub magenta: Color,
    pub cyan: Color,
    pub white: Color,
    pub bright_black: Color,
    pub bright_red: Color,
    pub bright_green: Color,
    pub bright_yellow: Color,
    pub bright_blue: Color,
    pub bright_magenta: Color,
    pub bright_cyan: Color,
    pub bright_white: Color,
}

impl Theme {
    /// Get ANSI color by index (0-15). Out-of-range indexes fall back to
    /// the foreground color.
    pub fn ansi_color(&self, index: u8) -> Color {
        match index {
            0 => self.black,
            1 => self.red,
            2 => self.green,
            3 => self.yellow,
            4 => self.blue,
            5 => self.magenta,
            6 => self.cyan,
            7 => self.white,
            8 => self.bright_black,
            9 => self.bright_red,
            10 => self.bright_green,
            11 => self.bright_yellow,
            12 => self.bright_blue,
            13 => self.bright_magenta,
            14 => self.bright_cyan,
            15 => self.bright_white,
            _ => self.foreground,
        }
    }

    /// The VS Code dark palette. This is the default theme; partial
    /// overrides use struct-update syntax:
    ///
    /// ```
    /// use termframe::theme::{Color, Theme};
    /// let theme = Theme {
    ///     background: Color::new(0, 0, 0),
    ///     ..Theme::default()
    /// };
    /// assert_eq!(theme.foreground, Theme::default().foreground);
    /// ```
    pub fn vscode_dark() -> Self {
        Self {
            foreground: Color::new(0xd4, 0xd4, 0xd4),
            background: Color::new(0x1e, 0x1e, 0x1e),
            cursor: Color::new(0xff, 0xff, 0xff),
            cursor_accent: Color::new(0x1e, 0x1e, 0x1e),
            selection_bg: Color::new(0xd4, 0xd4, 0xd4),
            selection_fg: Color::new(0x1e, 0x1e, 0x1e),
            black: Color::new(0x00, 0x00, 0x00),
            red: Color::new(0xcd, 0x31, 0x31),
            green: Color::new(0x0d, 0xbc, 0x79),
            yellow: Color::new(0xe5, 0xe5, 0x10),
            blue: Color::new(0x24, 0x72, 0xc8),
            magenta: Color::new(0xbc, 0x3f, 0xbc),
            cyan: Color::new(0x11, 0xa8, 0xcd),
            white: Color::new(0xe5, 0xe5, 0xe5),
            bright_black: Color::new(0x66, 0x66, 0x66),
            bright_red: Color::new(0xf1, 0x4c, 0x4c),
            bright_green: Color::new(0x23, 0xd1, 0x8b),
            bright_yellow: Color::new(0xf5, 0xf5, 0x43),
            bright_blue: Color::new(0x3b, 0x8e, 0xea),
            bright_magenta: Color::new(0xd6, 0x70, 0xd6),
            bright_cyan: Color::new(0x29, 0xb8, 0xdb),
            bright_white: Color::new(0xff, 0xff, 0xff),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::vscode_dark()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_roundtrip() {
        let color = Color::from_hex("#1e1e1e").unwrap();
        assert_eq!(color, Color::new(0x1e, 0x1e, 0x1e));
        assert_eq!(color.to_hex(), "#1e1e1e");

        // Prefix is optional
        assert_eq!(Color::from_hex("d4d4d4"), Some(Color::new(0xd4, 0xd4, 0xd4)));
    }

    #[test]
    fn test_from_hex_rejects_malformed() {
        assert_eq!(Color::from_hex("#fff"), None);
        assert_eq!(Color::from_hex("#gggggg"), None);
        assert_eq!(Color::from_hex(""), None);
    }

    #[test]
    fn test_default_theme_palette() {
        let theme = Theme::default();
        assert_eq!(theme.background.to_hex(), "#1e1e1e");
        assert_eq!(theme.foreground.to_hex(), "#d4d4d4");
        assert_eq!(theme.ansi_color(1).to_hex(), "#cd3131");
        assert_eq!(theme.ansi_color(15).to_hex(), "#ffffff");
        // Out of range falls back to foreground
        assert_eq!(theme.ansi_color(200), theme.foreground);
    }

    #[test]
    fn test_theme_serde_roundtrip() {
        let theme = Theme::default();
        let json = serde_json::to_string(&theme).unwrap();
        let back: Theme = serde_json::from_str(&json).unwrap();
        assert_eq!(back, theme);
    }
}
