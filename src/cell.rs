//! Terminal cell: the atomic unit delivered by the emulator.
//!
//! This is the bridge between terminal emulation (which resolves SGR
//! state, palettes and grapheme segmentation) and rendering (which
//! turns cells into colored rectangles, procedural glyphs and text
//! draws). Colors arrive fully resolved as 8-bit RGB; the renderer
//! never consults a palette for cell content.

use bitflags::bitflags;

bitflags! {
    /// SGR text attribute flags carried by a cell.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct CellFlags: u16 {
        /// Bold text (also selects the bold face for host text draws).
        const BOLD          = 1 << 0;
        /// Italic text.
        const ITALIC        = 1 << 1;
        /// Underlined text.
        const UNDERLINE     = 1 << 2;
        /// Text with a line through it.
        const STRIKETHROUGH = 1 << 3;
        /// Swapped foreground/background colors.
        const INVERSE       = 1 << 4;
        /// Faint (dim) text, drawn at half alpha.
        const FAINT         = 1 << 5;
        /// Concealed text: the glyph is suppressed, decorations remain.
        const INVISIBLE     = 1 << 6;
        /// Blinking text. Recognized but not animated.
        const BLINK         = 1 << 7;
    }
}

/// A single grid cell with styled content for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// Primary codepoint. `0` means the cell is empty.
    pub codepoint: u32,
    /// Non-zero when additional codepoints combine with the base; the
    /// full cluster is then fetched via [`Renderable::grapheme`].
    ///
    /// [`Renderable::grapheme`]: crate::buffer::Renderable::grapheme
    pub grapheme_len: u8,
    /// Column span: `0` is the trailing spacer of a wide glyph (never
    /// drawn), `1` is normal, `2` advances two columns.
    pub width: u8,
    /// Foreground color, 8-bit RGB.
    pub fg: [u8; 3],
    /// Background color, 8-bit RGB. `[0, 0, 0]` is the default-background
    /// sentinel: the row background shows through instead of a fill.
    pub bg: [u8; 3],
    /// SGR attribute flags.
    pub flags: CellFlags,
    /// OSC 8 hyperlink group. `0` means no link.
    pub hyperlink_id: u32,
}

impl Cell {
    /// A cell showing `ch` with default colors and no attributes.
    pub fn new(ch: char) -> Self {
        Self {
            codepoint: ch as u32,
            ..Self::default()
        }
    }

    /// A cell with explicit colors and flags.
    pub fn styled(ch: char, fg: [u8; 3], bg: [u8; 3], flags: CellFlags) -> Self {
        Self {
            codepoint: ch as u32,
            fg,
            bg,
            flags,
            ..Self::default()
        }
    }

    /// The trailing spacer cell that follows a wide (2-column) glyph.
    pub fn wide_spacer() -> Self {
        Self {
            width: 0,
            ..Self::default()
        }
    }

    /// Whether this cell holds no drawable codepoint.
    pub fn is_empty(&self) -> bool {
        self.codepoint == 0
    }

    /// The base codepoint as a `char`, or `None` when empty or invalid.
    pub fn ch(&self) -> Option<char> {
        if self.codepoint == 0 {
            None
        } else {
            char::from_u32(self.codepoint)
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            codepoint: 0,
            grapheme_len: 0,
            width: 1,
            fg: [255, 255, 255],
            bg: [0, 0, 0],
            flags: CellFlags::empty(),
            hyperlink_id: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_cell_is_empty() {
        let cell = Cell::default();
        assert!(cell.is_empty());
        assert_eq!(cell.width, 1);
        assert_eq!(cell.hyperlink_id, 0);
        assert!(cell.flags.is_empty());
    }

    #[test]
    fn test_new_sets_codepoint() {
        let cell = Cell::new('A');
        assert_eq!(cell.codepoint, 0x41);
        assert_eq!(cell.ch(), Some('A'));
    }

    #[test]
    fn test_wide_spacer_never_advances() {
        let spacer = Cell::wide_spacer();
        assert_eq!(spacer.width, 0);
        assert!(spacer.is_empty());
    }

    #[test]
    fn test_flags_compose() {
        let flags = CellFlags::BOLD | CellFlags::UNDERLINE;
        assert!(flags.contains(CellFlags::BOLD));
        assert!(!flags.contains(CellFlags::ITALIC));
    }
}
