//! Braille patterns (U+2800–U+28FF) drawn as a 2×4 grid of dots.
//!
//! The low 8 bits of `codepoint − 0x2800` are the dot bitmap: bits 1–6
//! are the upper 3×2 dots in column-major order, bits 7–8 the bottom
//! row.

use std::f32::consts::PI;

use crate::surface::RenderSurface;

const H_PADDING: f32 = 0.15;
const V_PADDING: f32 = 0.10;

/// Dot grid position `(col, row)` for each bit of the pattern byte.
const DOT_POSITIONS: [(u32, u32); 8] = [
    (0, 0), // bit 0, dot 1
    (0, 1), // bit 1, dot 2
    (0, 2), // bit 2, dot 3
    (1, 0), // bit 3, dot 4
    (1, 1), // bit 4, dot 5
    (1, 2), // bit 5, dot 6
    (0, 3), // bit 6, dot 7
    (1, 3), // bit 7, dot 8
];

/// Draw a braille pattern into the cell rect.
pub fn draw_braille<S: RenderSurface>(surface: &mut S, cp: u32, x: f32, y: f32, w: f32, h: f32) {
    let pattern = (cp.wrapping_sub(0x2800) & 0xFF) as u8;
    if pattern == 0 {
        return;
    }
    let inner_x = x + w * H_PADDING;
    let inner_y = y + h * V_PADDING;
    let inner_w = w * (1.0 - 2.0 * H_PADDING);
    let inner_h = h * (1.0 - 2.0 * V_PADDING);
    let radius = (0.9 * (inner_w / 4.0).min(inner_h / 8.0)).max(0.5);

    for (bit, &(col, row)) in DOT_POSITIONS.iter().enumerate() {
        if pattern & (1 << bit) == 0 {
            continue;
        }
        let cx = inner_x + col as f32 * inner_w;
        let cy = inner_y + row as f32 * (inner_h / 3.0);
        surface.begin_path();
        surface.arc(cx, cy, radius, 0.0, 2.0 * PI);
        surface.close_path();
        surface.fill_path();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headless::HeadlessSurface;
    use crate::theme::Color;

    const W: f32 = 10.0;
    const H: f32 = 20.0;

    fn draw(cp: u32) -> HeadlessSurface {
        let mut surface = HeadlessSurface::new(W as u32, H as u32);
        surface.set_fill_color(Color::new(255, 255, 255));
        draw_braille(&mut surface, cp, 0.0, 0.0, W, H);
        surface
    }

    fn ink_count(surface: &HeadlessSurface) -> usize {
        (0..H as u32)
            .flat_map(|y| (0..W as u32).map(move |x| (x, y)))
            .filter(|&(x, y)| surface.pixel(x, y) != [0, 0, 0])
            .count()
    }

    #[test]
    fn test_empty_pattern_draws_nothing() {
        let surface = draw(0x2800);
        assert_eq!(ink_count(&surface), 0);
    }

    #[test]
    fn test_single_dot_top_left() {
        // U+2801 = dot 1 (top-left)
        let surface = draw(0x2801);
        let count = ink_count(&surface);
        assert!(count > 0);
        // All ink is in the upper-left quadrant
        for y in 0..H as u32 {
            for x in 0..W as u32 {
                if surface.pixel(x, y) != [0, 0, 0] {
                    assert!(x < W as u32 / 2, "dot leaked right: ({x},{y})");
                    assert!(y < H as u32 / 2, "dot leaked down: ({x},{y})");
                }
            }
        }
    }

    #[test]
    fn test_full_pattern_covers_all_rows() {
        // U+28FF = all eight dots: ink near the top and the bottom
        let surface = draw(0x28FF);
        let count = ink_count(&surface);
        assert!(count > 8, "expected several dots, got {count} px");
        let top_half = (0..(H as u32 / 2))
            .flat_map(|y| (0..W as u32).map(move |x| (x, y)))
            .any(|(x, y)| surface.pixel(x, y) != [0, 0, 0]);
        let bottom_half = ((H as u32 / 2)..H as u32)
            .flat_map(|y| (0..W as u32).map(move |x| (x, y)))
            .any(|(x, y)| surface.pixel(x, y) != [0, 0, 0]);
        assert!(top_half && bottom_half);
    }

    #[test]
    fn test_bit_seven_is_bottom_row() {
        // U+2840 = dot 7 alone (bottom-left)
        let surface = draw(0x2840);
        for y in 0..H as u32 {
            for x in 0..W as u32 {
                if surface.pixel(x, y) != [0, 0, 0] {
                    assert!(y >= H as u32 / 2, "dot 7 must sit low: ({x},{y})");
                    assert!(x < W as u32 / 2, "dot 7 must sit left: ({x},{y})");
                }
            }
        }
    }
}
