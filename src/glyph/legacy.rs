//! Symbols for Legacy Computing: sextants, octants, wedge diagonals,
//! eighth blocks and smooth mosaics.
//!
//! Sextants and octants are exact grid fills. The wedge diagonal range
//! is drawn from a parametric corner-anchored model and the mosaic
//! range from shade/triangle composites; both preserve the seamless
//! tiling contract even where the exact glyph identity is approximate.

use crate::glyph::box_drawing::light_thickness;
use crate::surface::{LineCap, RenderSurface};

/// Octant patterns that predate the contiguous octant block and are
/// therefore skipped by its encoding: empty/full, the four half
/// blocks, the ten quadrant combinations, the four quarter blocks and
/// the six separately-encoded octants.
const OCTANT_SKIPS: [u8; 26] = [
    0x00, 0x01, 0x02, 0x03, 0x05, 0x0A, 0x0F, 0x14, 0x28, 0x3F, 0x40, 0x50, 0x55, 0x5A, 0x5F,
    0x80, 0xA0, 0xA5, 0xAA, 0xAF, 0xC0, 0xF0, 0xF5, 0xFA, 0xFC, 0xFF,
];

/// Decode a sextant codepoint to its 6-bit pattern (bit = row·2 + col).
///
/// The block encodes patterns 1–62 minus the two half-block patterns
/// (21 and 42) that already exist as `▌`/`▐`.
pub(crate) fn sextant_pattern(cp: u32) -> Option<u8> {
    if !(0x1FB00..=0x1FB3B).contains(&cp) {
        return None;
    }
    let mut pattern = (cp - 0x1FB00 + 1) as u8;
    if pattern >= 21 {
        pattern += 1;
    }
    if pattern >= 42 {
        pattern += 1;
    }
    Some(pattern)
}

/// Decode an octant codepoint to its 8-bit pattern (bit = row·2 + col).
pub(crate) fn octant_pattern(cp: u32) -> Option<u8> {
    if !(0x1CD00..=0x1CDE5).contains(&cp) {
        return None;
    }
    let index = (cp - 0x1CD00) as usize;
    (0u16..=255)
        .map(|p| p as u8)
        .filter(|p| !OCTANT_SKIPS.contains(p))
        .nth(index)
}

/// Draw a sextant: six cells on a 2×3 grid, edge cells absorbing the
/// rounding remainder.
pub fn draw_sextant<S: RenderSurface>(surface: &mut S, cp: u32, x: f32, y: f32, w: f32, h: f32) {
    let Some(pattern) = sextant_pattern(cp) else {
        return;
    };
    let col_w = (w / 2.0).ceil();
    let row_h = (h / 3.0).ceil();
    let xs = [x, x + col_w, x + w];
    let ys = [y, y + row_h, y + 2.0 * row_h, y + h];
    for row in 0..3 {
        for col in 0..2 {
            if pattern & (1 << (row * 2 + col)) != 0 {
                let x0 = xs[col];
                let x1 = xs[col + 1];
                let y0 = ys[row];
                let y1 = ys[row + 1].max(y0);
                surface.fill_rect(x0, y0, x1 - x0, y1 - y0);
            }
        }
    }
}

/// Draw an octant: eight cells on a 2×4 grid.
pub fn draw_octant<S: RenderSurface>(surface: &mut S, cp: u32, x: f32, y: f32, w: f32, h: f32) {
    let Some(pattern) = octant_pattern(cp) else {
        return;
    };
    let col_w = (w / 2.0).ceil();
    let xs = [x, x + col_w, x + w];
    let ys = [
        y,
        y + (h / 4.0).round(),
        y + (h / 2.0).round(),
        y + (3.0 * h / 4.0).round(),
        y + h,
    ];
    for row in 0..4 {
        for col in 0..2 {
            if pattern & (1 << (row * 2 + col)) != 0 {
                let x0 = xs[col];
                let x1 = xs[col + 1];
                surface.fill_rect(x0, ys[row], x1 - x0, ys[row + 1] - ys[row]);
            }
        }
    }
}

fn fill_polygon<S: RenderSurface>(surface: &mut S, points: &[(f32, f32)]) {
    surface.begin_path();
    let mut iter = points.iter();
    if let Some(&(px, py)) = iter.next() {
        surface.move_to(px, py);
    }
    for &(px, py) in iter {
        surface.line_to(px, py);
    }
    surface.close_path();
    surface.fill_path();
}

/// The eleven corner-anchored diagonal shapes of each wedge family, in
/// normalized coordinates for the lower-left anchor. `(lx, by)` style
/// pairs describe where the diagonal meets the left edge and the top
/// or bottom edge; the other families mirror these.
fn lower_left_wedge(index: u32, w: f32, h: f32) -> Vec<(f32, f32)> {
    let third = 1.0 / 3.0;
    match index {
        // Triangles hugging the lower-left corner
        0 => vec![(0.0, 2.0 * third), (0.0, 1.0), (0.5, 1.0)],
        1 => vec![(0.0, 2.0 * third), (0.0, 1.0), (1.0, 1.0)],
        2 => vec![(0.0, third), (0.0, 1.0), (0.5, 1.0)],
        3 => vec![(0.0, third), (0.0, 1.0), (1.0, 1.0)],
        4 => vec![(0.0, 0.0), (0.0, 1.0), (0.5, 1.0)],
        // Everything below a diagonal entering the top edge
        5 => vec![(0.0, third), (0.5, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)],
        6 => vec![(0.0, third), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)],
        7 => vec![(0.0, 2.0 * third), (0.5, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)],
        8 => vec![(0.0, 2.0 * third), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)],
        9 => vec![(0.0, 1.0), (0.5, 0.0), (1.0, 0.0), (1.0, 1.0)],
        // Shallow diagonal across both side edges
        _ => vec![(0.0, 2.0 * third), (1.0, third), (1.0, 1.0), (0.0, 1.0)],
    }
    .into_iter()
    .map(|(px, py)| (px * w, py * h))
    .collect()
}

/// Quarter-cell triangle pointing at the cell center from one edge.
fn quarter_triangle(edge: u32, w: f32, h: f32) -> Vec<(f32, f32)> {
    let cx = w / 2.0;
    let cy = h / 2.0;
    match edge {
        0 => vec![(0.0, 0.0), (cx, cy), (0.0, h)],  // left
        1 => vec![(0.0, 0.0), (w, 0.0), (cx, cy)],  // upper
        2 => vec![(w, 0.0), (w, h), (cx, cy)],      // right
        _ => vec![(0.0, h), (cx, cy), (w, h)],      // lower
    }
}

fn eighth(len: f32, i: u32) -> f32 {
    (len * i as f32 / 8.0).round()
}

fn fill_vertical_eighth<S: RenderSurface>(surface: &mut S, x: f32, y: f32, w: f32, h: f32, n: u32) {
    let x0 = x + eighth(w, n - 1);
    let x1 = x + eighth(w, n);
    surface.fill_rect(x0, y, x1 - x0, h);
}

fn fill_horizontal_eighth<S: RenderSurface>(surface: &mut S, x: f32, y: f32, w: f32, h: f32, n: u32) {
    let y0 = y + eighth(h, n - 1);
    let y1 = y + eighth(h, n);
    surface.fill_rect(x, y0, w, y1 - y0);
}

/// Draw a wedge-range codepoint (U+1FB3C–U+1FB8B): block diagonals,
/// quarter triangles and eighth blocks.
pub fn draw_wedge<S: RenderSurface>(surface: &mut S, cp: u32, x: f32, y: f32, w: f32, h: f32) {
    let offset = match cp.checked_sub(0x1FB3C) {
        Some(o) if o <= 0x4F => o,
        _ => return,
    };
    match offset {
        // Four families of eleven diagonal shapes, mirrored from the
        // lower-left table.
        0x00..=0x2B => {
            let family = offset / 11;
            let index = offset % 11;
            let points: Vec<(f32, f32)> = lower_left_wedge(index, w, h)
                .into_iter()
                .map(|(px, py)| match family {
                    0 => (px, py),         // lower-left
                    1 => (w - px, py),     // lower-right
                    2 => (px, h - py),     // upper-left
                    _ => (w - px, h - py), // upper-right
                })
                .map(|(px, py)| (x + px, y + py))
                .collect();
            fill_polygon(surface, &points);
        }
        // Three-quarter blocks: full cell minus one quarter triangle
        0x2C..=0x2F => {
            let missing = match offset {
                0x2C => 0, // upper+right+lower, left missing
                0x2D => 1, // left+lower+right, upper missing
                0x2E => 2, // upper+left+lower, right missing
                _ => 3,    // left+upper+right, lower missing
            };
            for edge in 0..4 {
                if edge != missing {
                    let points: Vec<(f32, f32)> = quarter_triangle(edge, w, h)
                        .into_iter()
                        .map(|(px, py)| (x + px, y + py))
                        .collect();
                    fill_polygon(surface, &points);
                }
            }
        }
        // Quarter triangles pointing at the center
        0x30..=0x33 => {
            let points: Vec<(f32, f32)> = quarter_triangle(offset - 0x30, w, h)
                .into_iter()
                .map(|(px, py)| (x + px, y + py))
                .collect();
            fill_polygon(surface, &points);
        }
        // Vertical one eighth blocks 2-7
        0x34..=0x39 => fill_vertical_eighth(surface, x, y, w, h, offset - 0x34 + 2),
        // Horizontal one eighth blocks 2-7
        0x3A..=0x3F => fill_horizontal_eighth(surface, x, y, w, h, offset - 0x3A + 2),
        // Corner pairs of eighth strips
        0x40 => {
            fill_vertical_eighth(surface, x, y, w, h, 1);
            fill_horizontal_eighth(surface, x, y, w, h, 8);
        }
        0x41 => {
            fill_vertical_eighth(surface, x, y, w, h, 1);
            fill_horizontal_eighth(surface, x, y, w, h, 1);
        }
        0x42 => {
            fill_vertical_eighth(surface, x, y, w, h, 8);
            fill_horizontal_eighth(surface, x, y, w, h, 1);
        }
        0x43 => {
            fill_vertical_eighth(surface, x, y, w, h, 8);
            fill_horizontal_eighth(surface, x, y, w, h, 8);
        }
        0x44 => {
            fill_horizontal_eighth(surface, x, y, w, h, 1);
            fill_horizontal_eighth(surface, x, y, w, h, 8);
        }
        // Horizontal one eighth block 1358
        0x45 => {
            for n in [1, 3, 5, 8] {
                fill_horizontal_eighth(surface, x, y, w, h, n);
            }
        }
        // Upper N/8 blocks (2, 3, 5, 6, 7)
        0x46..=0x4A => {
            let n = [2, 3, 5, 6, 7][(offset - 0x46) as usize];
            surface.fill_rect(x, y, w, eighth(h, n));
        }
        // Right N/8 blocks (2, 3, 5, 6, 7)
        _ => {
            let n = [2, 3, 5, 6, 7][(offset - 0x4B) as usize];
            let part = eighth(w, n);
            surface.fill_rect(x + w - part, y, part, h);
        }
    }
}

fn shaded_rect<S: RenderSurface>(surface: &mut S, x: f32, y: f32, w: f32, h: f32, density: f32) {
    let prev = surface.global_alpha();
    surface.set_global_alpha(prev * density);
    surface.fill_rect(x, y, w, h);
    surface.set_global_alpha(prev);
}

fn shaded_polygon<S: RenderSurface>(surface: &mut S, points: &[(f32, f32)], density: f32) {
    let prev = surface.global_alpha();
    surface.set_global_alpha(prev * density);
    fill_polygon(surface, points);
    surface.set_global_alpha(prev);
}

/// Draw a smooth-mosaic codepoint (U+1FB90–U+1FBAF): shade composites,
/// triangular half blocks and diagonal stroke combinations.
pub fn draw_mosaic<S: RenderSurface>(surface: &mut S, cp: u32, x: f32, y: f32, w: f32, h: f32) {
    let cx = x + w / 2.0;
    let cy = y + h / 2.0;
    match cp {
        // Shade fills and half-and-shade composites
        0x1FB90 | 0x1FB95 | 0x1FB96 | 0x1FB97 | 0x1FB98 | 0x1FB99 => {
            shaded_rect(surface, x, y, w, h, 0.5);
        }
        0x1FB91 => {
            surface.fill_rect(x, y, w, (h / 2.0).floor());
            shaded_rect(surface, x, y + (h / 2.0).floor(), w, h - (h / 2.0).floor(), 0.5);
        }
        0x1FB92 => {
            shaded_rect(surface, x, y, w, (h / 2.0).floor(), 0.5);
            surface.fill_rect(x, y + (h / 2.0).floor(), w, h - (h / 2.0).floor());
        }
        0x1FB94 => {
            shaded_rect(surface, x, y, (w / 2.0).floor(), h, 0.5);
            surface.fill_rect(x + (w / 2.0).floor(), y, w - (w / 2.0).floor(), h);
        }
        // Hourglass halves
        0x1FB9A => {
            fill_polygon(surface, &[(x, y), (x + w, y), (cx, cy)]);
            fill_polygon(surface, &[(x, y + h), (cx, cy), (x + w, y + h)]);
        }
        0x1FB9B => {
            fill_polygon(surface, &[(x, y), (cx, cy), (x, y + h)]);
            fill_polygon(surface, &[(x + w, y), (x + w, y + h), (cx, cy)]);
        }
        // Shaded corner triangles
        0x1FB9C => {
            shaded_polygon(surface, &[(x, y), (x + w, y), (x, y + h)], 0.5);
        }
        0x1FB9D => {
            shaded_polygon(surface, &[(x, y), (x + w, y), (x + w, y + h)], 0.5);
        }
        0x1FB9E => {
            shaded_polygon(surface, &[(x + w, y), (x + w, y + h), (x, y + h)], 0.5);
        }
        0x1FB9F => {
            shaded_polygon(surface, &[(x, y), (x + w, y + h), (x, y + h)], 0.5);
        }
        // Diagonal stroke combinations between edge midpoints
        0x1FBA0..=0x1FBAE => {
            let segments: u8 = match cp {
                0x1FBA0 => 0b0001,           // upper centre to middle left
                0x1FBA1 => 0b0010,           // upper centre to middle right
                0x1FBA2 => 0b0100,           // middle left to lower centre
                0x1FBA3 => 0b1000,           // middle right to lower centre
                0x1FBA4 => 0b0101,
                0x1FBA5 => 0b1010,
                0x1FBA6 => 0b1100,
                0x1FBA7 => 0b0011,
                0x1FBA8 => 0b1001,
                0x1FBA9 => 0b0110,
                0x1FBAA => 0b1110,
                0x1FBAB => 0b1101,
                0x1FBAC => 0b1011,
                0x1FBAD => 0b0111,
                _ => 0b1111, // full diamond
            };
            let t = light_thickness(h);
            surface.set_line_width(t);
            surface.set_line_cap(LineCap::Butt);
            surface.begin_path();
            if segments & 0b0001 != 0 {
                surface.move_to(cx, y);
                surface.line_to(x, cy);
            }
            if segments & 0b0010 != 0 {
                surface.move_to(cx, y);
                surface.line_to(x + w, cy);
            }
            if segments & 0b0100 != 0 {
                surface.move_to(x, cy);
                surface.line_to(cx, y + h);
            }
            if segments & 0b1000 != 0 {
                surface.move_to(x + w, cy);
                surface.line_to(cx, y + h);
            }
            surface.stroke_path();
        }
        // Light horizontal with vertical stroke
        0x1FBAF => {
            let t = light_thickness(h);
            surface.fill_rect(x, cy - t / 2.0, w, t);
            surface.fill_rect(cx - t / 2.0, y + h / 4.0, t, h / 2.0);
        }
        _ => {} // 1FB93 is reserved
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headless::HeadlessSurface;
    use crate::theme::Color;

    const W: f32 = 8.0;
    const H: f32 = 16.0;

    fn surface() -> HeadlessSurface {
        let mut s = HeadlessSurface::new(W as u32, H as u32);
        s.set_fill_color(Color::new(255, 255, 255));
        s.set_stroke_color(Color::new(255, 255, 255));
        s
    }

    fn lit(s: &HeadlessSurface, x: u32, y: u32) -> bool {
        s.pixel(x, y) != [0, 0, 0]
    }

    #[test]
    fn test_sextant_pattern_skips_half_blocks() {
        assert_eq!(sextant_pattern(0x1FB00), Some(1));
        assert_eq!(sextant_pattern(0x1FB13), Some(20));
        // Pattern 21 (left half) is skipped
        assert_eq!(sextant_pattern(0x1FB14), Some(22));
        // Pattern 42 (right half) is skipped
        assert_eq!(sextant_pattern(0x1FB27), Some(41));
        assert_eq!(sextant_pattern(0x1FB28), Some(43));
        assert_eq!(sextant_pattern(0x1FB3B), Some(62));
        assert_eq!(sextant_pattern(0x1FB3C), None);
    }

    #[test]
    fn test_sextant_patterns_unique_and_in_range() {
        let mut seen = std::collections::HashSet::new();
        for cp in 0x1FB00..=0x1FB3B {
            let p = sextant_pattern(cp).unwrap();
            assert!((1..=62).contains(&p));
            assert_ne!(p, 21);
            assert_ne!(p, 42);
            assert!(seen.insert(p), "duplicate pattern {p}");
        }
        assert_eq!(seen.len(), 60);
    }

    #[test]
    fn test_octant_pattern_endpoints() {
        // First non-skipped pattern is 0x04
        assert_eq!(octant_pattern(0x1CD00), Some(0x04));
        // Last codepoint maps to the last non-skipped pattern, 0xFE
        assert_eq!(octant_pattern(0x1CDE5), Some(0xFE));
        assert_eq!(octant_pattern(0x1CDE6), None);
    }

    #[test]
    fn test_octant_patterns_unique_and_skipped() {
        let mut seen = std::collections::HashSet::new();
        for cp in 0x1CD00..=0x1CDE5 {
            let p = octant_pattern(cp).unwrap();
            assert!(!OCTANT_SKIPS.contains(&p), "skipped pattern 0x{p:02X} emitted");
            assert!(seen.insert(p));
        }
        assert_eq!(seen.len(), 230);
    }

    #[test]
    fn test_sextant_draws_marked_cells_only() {
        // Pattern 1 = top-left sextant cell only
        let mut s = surface();
        draw_sextant(&mut s, 0x1FB00, 0.0, 0.0, W, H);
        assert!(lit(&s, 1, 1));
        assert!(!lit(&s, 6, 1));
        assert!(!lit(&s, 1, 14));
        assert!(!lit(&s, 6, 14));
    }

    #[test]
    fn test_octant_draws_bottom_row() {
        // 0x1CD00 decodes to 0x04: middle-upper-left octant (row 1 col 0)
        let mut s = surface();
        draw_octant(&mut s, 0x1CD00, 0.0, 0.0, W, H);
        assert!(lit(&s, 1, 5));
        assert!(!lit(&s, 6, 5));
        assert!(!lit(&s, 1, 1));
        assert!(!lit(&s, 1, 14));
    }

    #[test]
    fn test_vertical_eighth_block_position() {
        // U+1FB70 = vertical eighth block 2: second eighth column
        let mut s = surface();
        draw_wedge(&mut s, 0x1FB70, 0.0, 0.0, W, H);
        assert!(lit(&s, 1, 8));
        assert!(!lit(&s, 0, 8));
        assert!(!lit(&s, 2, 8));
    }

    #[test]
    fn test_upper_quarter_block() {
        // U+1FB82 = upper one quarter: round(16·2/8) = 4 rows
        let mut s = surface();
        draw_wedge(&mut s, 0x1FB82, 0.0, 0.0, W, H);
        assert!(lit(&s, 4, 0));
        assert!(lit(&s, 4, 3));
        assert!(!lit(&s, 4, 4));
    }

    #[test]
    fn test_right_three_quarters_block() {
        // U+1FB8A = right three quarters: right 6 of 8 columns
        let mut s = surface();
        draw_wedge(&mut s, 0x1FB8A, 0.0, 0.0, W, H);
        assert!(!lit(&s, 1, 8));
        assert!(lit(&s, 2, 8));
        assert!(lit(&s, 7, 8));
    }

    #[test]
    fn test_lower_left_wedge_triangle() {
        // U+1FB3D: triangle over the whole bottom edge rising to 2/3 on
        // the left
        let mut s = surface();
        draw_wedge(&mut s, 0x1FB3D, 0.0, 0.0, W, H);
        assert!(lit(&s, 1, 14), "deep corner filled");
        assert!(!lit(&s, 6, 1), "opposite corner empty");
    }

    #[test]
    fn test_mosaic_half_and_shade() {
        // U+1FB91: solid upper half, 50% lower half
        let mut s = surface();
        draw_mosaic(&mut s, 0x1FB91, 0.0, 0.0, W, H);
        assert_eq!(s.pixel(4, 2), [255, 255, 255]);
        assert_eq!(s.pixel(4, 12), [128, 128, 128]);
    }

    #[test]
    fn test_mosaic_reserved_draws_nothing() {
        let mut s = surface();
        draw_mosaic(&mut s, 0x1FB93, 0.0, 0.0, W, H);
        for y in 0..H as u32 {
            for x in 0..W as u32 {
                assert!(!lit(&s, x, y));
            }
        }
    }

    #[test]
    fn test_mosaic_diamond_strokes() {
        let mut s = surface();
        draw_mosaic(&mut s, 0x1FBAE, 0.0, 0.0, W, H);
        // Edge midpoints are inked, center is hollow
        assert!(lit(&s, 4, 0) || lit(&s, 3, 0));
        assert!(lit(&s, 0, 8) || lit(&s, 0, 7));
        assert!(!lit(&s, 4, 8));
    }
}
