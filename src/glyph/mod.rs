//! Procedural glyph engine.
//!
//! Classifies codepoints into drawing families and renders each family
//! with primitives aligned to cell bounds, so adjacent cells tile
//! seamlessly — something font glyphs cannot guarantee. Anything
//! unclassified falls through to the host text engine.

mod block_elements;
mod box_drawing;
mod braille;
mod legacy;
mod triangles;

pub use box_drawing::{heavy_thickness, light_thickness};

use crate::surface::RenderSurface;

/// Explicit powerline / directional triangle set.
const POWERLINE_SET: &[u32] = &[
    0xE0B0, 0xE0B2, 0xE0B4, 0xE0B6, 0x25B2, 0x25B6, 0x25BA, 0x25BC, 0x25C0, 0x25C4,
];

/// Dashed box-drawing codepoints, carved out of the box range because
/// they draw as dash runs instead of stub decompositions.
const DASHED_SET: &[u32] = &[
    0x2504, 0x2505, 0x2506, 0x2507, 0x2508, 0x2509, 0x250A, 0x250B, 0x254C, 0x254D, 0x254E, 0x254F,
];

/// Glyph family: which drawing procedure owns a codepoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlyphFamily {
    /// Not procedurally drawn — the host text engine renders it.
    None,
    /// Box drawing lines, corners and junctions (U+2500–U+257F).
    BoxDrawing,
    /// Rounded arc corners (U+256D–U+2570). Matched before the box
    /// range; rounded wins when drawing.
    Rounded,
    /// Dashed box lines.
    Dashed,
    /// Block elements (U+2580–U+259F).
    Block,
    /// Braille patterns (U+2800–U+28FF).
    Braille,
    /// Sextants (U+1FB00–U+1FB3B).
    Sextant,
    /// Wedge triangles and eighth blocks (U+1FB3C–U+1FB8B).
    Wedge,
    /// Smooth mosaics (U+1FB90–U+1FBAF).
    Mosaic,
    /// Octants (U+1CD00–U+1CDE5).
    Octant,
    /// Corner triangles (U+25E2–U+25E5).
    CornerTriangle,
    /// Powerline arrows and directional triangles.
    Powerline,
}

/// Classify a codepoint for rendering. Total function: anything outside
/// the procedural ranges is `GlyphFamily::None`.
pub fn classify_codepoint(cp: u32) -> GlyphFamily {
    if DASHED_SET.contains(&cp) {
        return GlyphFamily::Dashed;
    }
    if (0x256D..=0x2570).contains(&cp) {
        return GlyphFamily::Rounded;
    }
    if (0x2500..=0x257F).contains(&cp) {
        return GlyphFamily::BoxDrawing;
    }
    if (0x2580..=0x259F).contains(&cp) {
        return GlyphFamily::Block;
    }
    if (0x25E2..=0x25E5).contains(&cp) {
        return GlyphFamily::CornerTriangle;
    }
    if POWERLINE_SET.contains(&cp) {
        return GlyphFamily::Powerline;
    }
    if (0x2800..=0x28FF).contains(&cp) {
        return GlyphFamily::Braille;
    }
    if (0x1FB00..=0x1FB3B).contains(&cp) {
        return GlyphFamily::Sextant;
    }
    if (0x1FB3C..=0x1FB8B).contains(&cp) {
        return GlyphFamily::Wedge;
    }
    if (0x1FB90..=0x1FBAF).contains(&cp) {
        return GlyphFamily::Mosaic;
    }
    if (0x1CD00..=0x1CDE5).contains(&cp) {
        return GlyphFamily::Octant;
    }
    GlyphFamily::None
}

/// Draw a classified codepoint into the cell rectangle
/// `(x, y, w, h)` (CSS pixels; `w` already spans wide cells).
///
/// The caller has set the fill and stroke colors and global alpha;
/// procedures only emit geometry. Returns false when the family is
/// `None`, meaning the caller should draw the grapheme as text.
pub fn draw_glyph<S: RenderSurface>(
    surface: &mut S,
    family: GlyphFamily,
    cp: u32,
    x: f32,
    y: f32,
    w: f32,
    h: f32,
) -> bool {
    match family {
        GlyphFamily::None => false,
        GlyphFamily::BoxDrawing => {
            box_drawing::draw_box(surface, cp, x, y, w, h);
            true
        }
        GlyphFamily::Rounded => {
            box_drawing::draw_rounded(surface, cp, x, y, w, h);
            true
        }
        GlyphFamily::Dashed => {
            box_drawing::draw_dashed(surface, cp, x, y, w, h);
            true
        }
        GlyphFamily::Block => {
            block_elements::draw_block(surface, cp, x, y, w, h);
            true
        }
        GlyphFamily::Braille => {
            braille::draw_braille(surface, cp, x, y, w, h);
            true
        }
        GlyphFamily::Sextant => {
            legacy::draw_sextant(surface, cp, x, y, w, h);
            true
        }
        GlyphFamily::Wedge => {
            legacy::draw_wedge(surface, cp, x, y, w, h);
            true
        }
        GlyphFamily::Mosaic => {
            legacy::draw_mosaic(surface, cp, x, y, w, h);
            true
        }
        GlyphFamily::Octant => {
            legacy::draw_octant(surface, cp, x, y, w, h);
            true
        }
        GlyphFamily::CornerTriangle => {
            triangles::draw_corner_triangle(surface, cp, x, y, w, h);
            true
        }
        GlyphFamily::Powerline => {
            triangles::draw_powerline(surface, cp, x, y, w, h);
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_box_drawing() {
        assert_eq!(classify_codepoint('─' as u32), GlyphFamily::BoxDrawing);
        assert_eq!(classify_codepoint('┃' as u32), GlyphFamily::BoxDrawing);
        assert_eq!(classify_codepoint('╬' as u32), GlyphFamily::BoxDrawing);
        assert_eq!(classify_codepoint('╿' as u32), GlyphFamily::BoxDrawing);
    }

    #[test]
    fn test_classify_rounded_wins_over_box() {
        for cp in 0x256D..=0x2570 {
            assert_eq!(classify_codepoint(cp), GlyphFamily::Rounded);
        }
        assert_eq!(classify_codepoint(0x256C), GlyphFamily::BoxDrawing);
        assert_eq!(classify_codepoint(0x2571), GlyphFamily::BoxDrawing);
    }

    #[test]
    fn test_classify_dashed_wins_over_box() {
        assert_eq!(classify_codepoint(0x2504), GlyphFamily::Dashed);
        assert_eq!(classify_codepoint(0x254F), GlyphFamily::Dashed);
        // Neighbors stay box
        assert_eq!(classify_codepoint(0x2503), GlyphFamily::BoxDrawing);
        assert_eq!(classify_codepoint(0x250C), GlyphFamily::BoxDrawing);
        assert_eq!(classify_codepoint(0x254B), GlyphFamily::BoxDrawing);
        assert_eq!(classify_codepoint(0x2550), GlyphFamily::BoxDrawing);
    }

    #[test]
    fn test_classify_blocks_and_braille() {
        assert_eq!(classify_codepoint('█' as u32), GlyphFamily::Block);
        assert_eq!(classify_codepoint('▒' as u32), GlyphFamily::Block);
        assert_eq!(classify_codepoint(0x2800), GlyphFamily::Braille);
        assert_eq!(classify_codepoint(0x28FF), GlyphFamily::Braille);
    }

    #[test]
    fn test_classify_legacy_computing_ranges() {
        assert_eq!(classify_codepoint(0x1FB00), GlyphFamily::Sextant);
        assert_eq!(classify_codepoint(0x1FB3B), GlyphFamily::Sextant);
        assert_eq!(classify_codepoint(0x1FB3C), GlyphFamily::Wedge);
        assert_eq!(classify_codepoint(0x1FB8B), GlyphFamily::Wedge);
        assert_eq!(classify_codepoint(0x1FB90), GlyphFamily::Mosaic);
        assert_eq!(classify_codepoint(0x1FBAF), GlyphFamily::Mosaic);
        assert_eq!(classify_codepoint(0x1CD00), GlyphFamily::Octant);
        assert_eq!(classify_codepoint(0x1CDE5), GlyphFamily::Octant);
        // Gap between wedges and mosaics is unclassified
        assert_eq!(classify_codepoint(0x1FB8C), GlyphFamily::None);
    }

    #[test]
    fn test_classify_triangles() {
        assert_eq!(classify_codepoint(0x25E2), GlyphFamily::CornerTriangle);
        assert_eq!(classify_codepoint(0x25E5), GlyphFamily::CornerTriangle);
        assert_eq!(classify_codepoint(0xE0B0), GlyphFamily::Powerline);
        assert_eq!(classify_codepoint(0x25B6), GlyphFamily::Powerline);
        assert_eq!(classify_codepoint(0x25BC), GlyphFamily::Powerline);
    }

    #[test]
    fn test_classify_passthrough() {
        assert_eq!(classify_codepoint('a' as u32), GlyphFamily::None);
        assert_eq!(classify_codepoint('中' as u32), GlyphFamily::None);
        assert_eq!(classify_codepoint(0x1F600), GlyphFamily::None);
        assert_eq!(classify_codepoint(0x25B3), GlyphFamily::None); // white up triangle
        assert_eq!(classify_codepoint(0xE0B1), GlyphFamily::None); // thin powerline chevron
    }
}
