//! Box drawing characters (U+2500–U+257F): stub decomposition and
//! seam-free line rendering.
//!
//! Every character decomposes into four directional stubs (up, right,
//! down, left), each styled none/light/heavy/double. When two opposing
//! stubs share a style the line is drawn as one full-edge rectangle, so
//! adjacent cells join with no sub-pixel seam at the shared edge. Mixed
//! and perpendicular stubs overlap the cell center by half-thickness
//! amounts so corners and junctions close without notches.

use std::f32::consts::PI;

use crate::surface::{LineCap, RenderSurface};

/// Light line thickness for a cell of height `h`.
pub fn light_thickness(h: f32) -> f32 {
    (h / 12.0).round().max(1.0)
}

/// Heavy line thickness for a cell of height `h`.
pub fn heavy_thickness(h: f32) -> f32 {
    (h / 6.0).round().max(2.0)
}

/// Thickness of each line of a double pair.
fn double_thickness(h: f32) -> f32 {
    (h / 16.0).round().max(1.0)
}

/// Center-to-center separation of a double pair.
fn double_separation(h: f32) -> f32 {
    (h / 8.0).round().max(2.0)
}

/// Style of one directional stub.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    None,
    Light,
    Heavy,
    Double,
}

use LineStyle::{Double, Heavy, Light, None as Absent};

/// The four directional stubs of a box-drawing character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stubs {
    pub up: LineStyle,
    pub right: LineStyle,
    pub down: LineStyle,
    pub left: LineStyle,
}

impl Stubs {
    const fn new(up: LineStyle, right: LineStyle, down: LineStyle, left: LineStyle) -> Self {
        Self {
            up,
            right,
            down,
            left,
        }
    }
}

/// Decompose a box-drawing codepoint into directional stubs.
///
/// Returns `None` for the codepoints that do not fit the stub model:
/// dashed lines, rounded arcs and diagonals, which have their own
/// drawing procedures.
pub fn decompose(cp: u32) -> Option<Stubs> {
    let stubs = match cp {
        0x2500 => Stubs::new(Absent, Light, Absent, Light),
        0x2501 => Stubs::new(Absent, Heavy, Absent, Heavy),
        0x2502 => Stubs::new(Light, Absent, Light, Absent),
        0x2503 => Stubs::new(Heavy, Absent, Heavy, Absent),
        // 0x2504..=0x250B are dashed
        0x250C => Stubs::new(Absent, Light, Light, Absent),
        0x250D => Stubs::new(Absent, Heavy, Light, Absent),
        0x250E => Stubs::new(Absent, Light, Heavy, Absent),
        0x250F => Stubs::new(Absent, Heavy, Heavy, Absent),
        0x2510 => Stubs::new(Absent, Absent, Light, Light),
        0x2511 => Stubs::new(Absent, Absent, Light, Heavy),
        0x2512 => Stubs::new(Absent, Absent, Heavy, Light),
        0x2513 => Stubs::new(Absent, Absent, Heavy, Heavy),
        0x2514 => Stubs::new(Light, Light, Absent, Absent),
        0x2515 => Stubs::new(Light, Heavy, Absent, Absent),
        0x2516 => Stubs::new(Heavy, Light, Absent, Absent),
        0x2517 => Stubs::new(Heavy, Heavy, Absent, Absent),
        0x2518 => Stubs::new(Light, Absent, Absent, Light),
        0x2519 => Stubs::new(Light, Absent, Absent, Heavy),
        0x251A => Stubs::new(Heavy, Absent, Absent, Light),
        0x251B => Stubs::new(Heavy, Absent, Absent, Heavy),
        0x251C => Stubs::new(Light, Light, Light, Absent),
        0x251D => Stubs::new(Light, Heavy, Light, Absent),
        0x251E => Stubs::new(Heavy, Light, Light, Absent),
        0x251F => Stubs::new(Light, Light, Heavy, Absent),
        0x2520 => Stubs::new(Heavy, Light, Heavy, Absent),
        0x2521 => Stubs::new(Heavy, Heavy, Light, Absent),
        0x2522 => Stubs::new(Light, Heavy, Heavy, Absent),
        0x2523 => Stubs::new(Heavy, Heavy, Heavy, Absent),
        0x2524 => Stubs::new(Light, Absent, Light, Light),
        0x2525 => Stubs::new(Light, Absent, Light, Heavy),
        0x2526 => Stubs::new(Heavy, Absent, Light, Light),
        0x2527 => Stubs::new(Light, Absent, Heavy, Light),
        0x2528 => Stubs::new(Heavy, Absent, Heavy, Light),
        0x2529 => Stubs::new(Heavy, Absent, Light, Heavy),
        0x252A => Stubs::new(Light, Absent, Heavy, Heavy),
        0x252B => Stubs::new(Heavy, Absent, Heavy, Heavy),
        0x252C => Stubs::new(Absent, Light, Light, Light),
        0x252D => Stubs::new(Absent, Light, Light, Heavy),
        0x252E => Stubs::new(Absent, Heavy, Light, Light),
        0x252F => Stubs::new(Absent, Heavy, Light, Heavy),
        0x2530 => Stubs::new(Absent, Light, Heavy, Light),
        0x2531 => Stubs::new(Absent, Light, Heavy, Heavy),
        0x2532 => Stubs::new(Absent, Heavy, Heavy, Light),
        0x2533 => Stubs::new(Absent, Heavy, Heavy, Heavy),
        0x2534 => Stubs::new(Light, Light, Absent, Light),
        0x2535 => Stubs::new(Light, Light, Absent, Heavy),
        0x2536 => Stubs::new(Light, Heavy, Absent, Light),
        0x2537 => Stubs::new(Light, Heavy, Absent, Heavy),
        0x2538 => Stubs::new(Heavy, Light, Absent, Light),
        0x2539 => Stubs::new(Heavy, Light, Absent, Heavy),
        0x253A => Stubs::new(Heavy, Heavy, Absent, Light),
        0x253B => Stubs::new(Heavy, Heavy, Absent, Heavy),
        0x253C => Stubs::new(Light, Light, Light, Light),
        0x253D => Stubs::new(Light, Light, Light, Heavy),
        0x253E => Stubs::new(Light, Heavy, Light, Light),
        0x253F => Stubs::new(Light, Heavy, Light, Heavy),
        0x2540 => Stubs::new(Heavy, Light, Light, Light),
        0x2541 => Stubs::new(Light, Light, Heavy, Light),
        0x2542 => Stubs::new(Heavy, Light, Heavy, Light),
        0x2543 => Stubs::new(Heavy, Light, Light, Heavy),
        0x2544 => Stubs::new(Heavy, Heavy, Light, Light),
        0x2545 => Stubs::new(Light, Light, Heavy, Heavy),
        0x2546 => Stubs::new(Light, Heavy, Heavy, Light),
        0x2547 => Stubs::new(Heavy, Heavy, Light, Heavy),
        0x2548 => Stubs::new(Light, Heavy, Heavy, Heavy),
        0x2549 => Stubs::new(Heavy, Light, Heavy, Heavy),
        0x254A => Stubs::new(Heavy, Heavy, Heavy, Light),
        0x254B => Stubs::new(Heavy, Heavy, Heavy, Heavy),
        // 0x254C..=0x254F are dashed
        0x2550 => Stubs::new(Absent, Double, Absent, Double),
        0x2551 => Stubs::new(Double, Absent, Double, Absent),
        0x2552 => Stubs::new(Absent, Double, Light, Absent),
        0x2553 => Stubs::new(Absent, Light, Double, Absent),
        0x2554 => Stubs::new(Absent, Double, Double, Absent),
        0x2555 => Stubs::new(Absent, Absent, Light, Double),
        0x2556 => Stubs::new(Absent, Absent, Double, Light),
        0x2557 => Stubs::new(Absent, Absent, Double, Double),
        0x2558 => Stubs::new(Light, Double, Absent, Absent),
        0x2559 => Stubs::new(Double, Light, Absent, Absent),
        0x255A => Stubs::new(Double, Double, Absent, Absent),
        0x255B => Stubs::new(Light, Absent, Absent, Double),
        0x255C => Stubs::new(Double, Absent, Absent, Light),
        0x255D => Stubs::new(Double, Absent, Absent, Double),
        0x255E => Stubs::new(Light, Double, Light, Absent),
        0x255F => Stubs::new(Double, Light, Double, Absent),
        0x2560 => Stubs::new(Double, Double, Double, Absent),
        0x2561 => Stubs::new(Light, Absent, Light, Double),
        0x2562 => Stubs::new(Double, Absent, Double, Light),
        0x2563 => Stubs::new(Double, Absent, Double, Double),
        0x2564 => Stubs::new(Absent, Double, Light, Double),
        0x2565 => Stubs::new(Absent, Light, Double, Light),
        0x2566 => Stubs::new(Absent, Double, Double, Double),
        0x2567 => Stubs::new(Light, Double, Absent, Double),
        0x2568 => Stubs::new(Double, Light, Absent, Light),
        0x2569 => Stubs::new(Double, Double, Absent, Double),
        0x256A => Stubs::new(Light, Double, Light, Double),
        0x256B => Stubs::new(Double, Light, Double, Light),
        0x256C => Stubs::new(Double, Double, Double, Double),
        // 0x256D..=0x2570 are rounded arcs, 0x2571..=0x2573 diagonals
        0x2574 => Stubs::new(Absent, Absent, Absent, Light),
        0x2575 => Stubs::new(Light, Absent, Absent, Absent),
        0x2576 => Stubs::new(Absent, Light, Absent, Absent),
        0x2577 => Stubs::new(Absent, Absent, Light, Absent),
        0x2578 => Stubs::new(Absent, Absent, Absent, Heavy),
        0x2579 => Stubs::new(Heavy, Absent, Absent, Absent),
        0x257A => Stubs::new(Absent, Heavy, Absent, Absent),
        0x257B => Stubs::new(Absent, Absent, Heavy, Absent),
        0x257C => Stubs::new(Absent, Heavy, Absent, Light),
        0x257D => Stubs::new(Light, Absent, Heavy, Absent),
        0x257E => Stubs::new(Absent, Light, Absent, Heavy),
        0x257F => Stubs::new(Heavy, Absent, Light, Absent),
        _ => return None,
    };
    Some(stubs)
}

/// Half-width of the ink a perpendicular stub occupies around the cell
/// center line, used to overlap junctions cleanly.
fn half_ink(style: LineStyle, h: f32) -> f32 {
    match style {
        Absent => 0.0,
        Light => light_thickness(h) / 2.0,
        Heavy => heavy_thickness(h) / 2.0,
        Double => double_separation(h) / 2.0 + double_thickness(h) / 2.0,
    }
}

fn single_thickness(style: LineStyle, h: f32) -> f32 {
    match style {
        Heavy => heavy_thickness(h),
        _ => light_thickness(h),
    }
}

/// How far past the cell center a single-style stub extends.
///
/// A stub facing an opposing stub of a different style crosses by its
/// own half-thickness so the two overlap; a stub meeting a
/// pass-through double rail stops at the near rail line; a stub meeting
/// any other perpendicular crosses just enough to cover its ink; a lone
/// stub stops at the center so nothing pokes out of L/T corners.
fn single_overshoot(
    own: LineStyle,
    opposite: LineStyle,
    perp_a: LineStyle,
    perp_b: LineStyle,
    h: f32,
) -> f32 {
    if opposite != Absent {
        return single_thickness(own, h) / 2.0;
    }
    if perp_a == Double && perp_b == Double {
        return -(double_separation(h) / 2.0 - double_thickness(h) / 2.0);
    }
    half_ink(perp_a, h).max(half_ink(perp_b, h))
}

/// Draw a stub-decomposable box-drawing character.
pub fn draw_box<S: RenderSurface>(surface: &mut S, cp: u32, x: f32, y: f32, w: f32, h: f32) {
    if (0x2571..=0x2573).contains(&cp) {
        draw_diagonal(surface, cp, x, y, w, h);
        return;
    }
    let Some(stubs) = decompose(cp) else {
        return;
    };
    let cx = x + w / 2.0;
    let cy = y + h / 2.0;

    // Horizontal axis
    if stubs.left == stubs.right && stubs.left != Absent {
        draw_full_horizontal(surface, stubs.left, x, w, cy, h);
    } else {
        if stubs.left != Absent {
            draw_horizontal_stub(surface, &stubs, false, x, cx, cy, h);
        }
        if stubs.right != Absent {
            draw_horizontal_stub(surface, &stubs, true, x + w, cx, cy, h);
        }
    }

    // Vertical axis
    if stubs.up == stubs.down && stubs.up != Absent {
        draw_full_vertical(surface, stubs.up, y, h, cx);
    } else {
        if stubs.up != Absent {
            draw_vertical_stub(surface, &stubs, false, y, cx, cy, h);
        }
        if stubs.down != Absent {
            draw_vertical_stub(surface, &stubs, true, y + h, cx, cy, h);
        }
    }
}

fn draw_full_horizontal<S: RenderSurface>(
    surface: &mut S,
    style: LineStyle,
    x: f32,
    w: f32,
    cy: f32,
    h: f32,
) {
    match style {
        Double => {
            let t = double_thickness(h);
            let off = double_separation(h) / 2.0;
            surface.fill_rect(x, cy - off - t / 2.0, w, t);
            surface.fill_rect(x, cy + off - t / 2.0, w, t);
        }
        _ => {
            let t = single_thickness(style, h);
            surface.fill_rect(x, cy - t / 2.0, w, t);
        }
    }
}

fn draw_full_vertical<S: RenderSurface>(surface: &mut S, style: LineStyle, y: f32, h: f32, cx: f32) {
    match style {
        Double => {
            let t = double_thickness(h);
            let off = double_separation(h) / 2.0;
            surface.fill_rect(cx - off - t / 2.0, y, t, h);
            surface.fill_rect(cx + off - t / 2.0, y, t, h);
        }
        _ => {
            let t = single_thickness(style, h);
            surface.fill_rect(cx - t / 2.0, y, t, h);
        }
    }
}

/// Draw a left or right stub. `edge` is the cell edge x the stub grows
/// from; `toward_right` selects which stub is being drawn.
fn draw_horizontal_stub<S: RenderSurface>(
    surface: &mut S,
    stubs: &Stubs,
    toward_right: bool,
    edge: f32,
    cx: f32,
    cy: f32,
    h: f32,
) {
    let (own, opposite) = if toward_right {
        (stubs.right, stubs.left)
    } else {
        (stubs.left, stubs.right)
    };
    match own {
        Double => {
            draw_double_stub_lines(
                surface, stubs, toward_right, true, edge, cx, cy, h,
            );
        }
        _ => {
            let t = single_thickness(own, h);
            let over = single_overshoot(own, opposite, stubs.up, stubs.down, h);
            let (x0, x1) = if toward_right {
                (cx - over, edge)
            } else {
                (edge, cx + over)
            };
            surface.fill_rect(x0, cy - t / 2.0, x1 - x0, t);
        }
    }
}

fn draw_vertical_stub<S: RenderSurface>(
    surface: &mut S,
    stubs: &Stubs,
    toward_down: bool,
    edge: f32,
    cx: f32,
    cy: f32,
    h: f32,
) {
    let (own, opposite) = if toward_down {
        (stubs.down, stubs.up)
    } else {
        (stubs.up, stubs.down)
    };
    match own {
        Double => {
            draw_double_stub_lines(
                surface, stubs, toward_down, false, edge, cx, cy, h,
            );
        }
        _ => {
            let t = single_thickness(own, h);
            let over = single_overshoot(own, opposite, stubs.left, stubs.right, h);
            let (y0, y1) = if toward_down {
                (cy - over, edge)
            } else {
                (edge, cy + over)
            };
            surface.fill_rect(cx - t / 2.0, y0, t, y1 - y0);
        }
    }
}

/// Draw the two parallel lines of a double stub, joining pairwise with
/// the perpendicular lines: outer line meets outer line, inner meets
/// inner, so corner windows stay open.
#[allow(clippy::too_many_arguments)]
fn draw_double_stub_lines<S: RenderSurface>(
    surface: &mut S,
    stubs: &Stubs,
    toward_positive: bool,
    horizontal: bool,
    edge: f32,
    cx: f32,
    cy: f32,
    h: f32,
) {
    let t = double_thickness(h);
    let off = double_separation(h) / 2.0;
    let (center_along, center_across) = if horizontal { (cx, cy) } else { (cy, cx) };
    let (perp_neg, perp_pos) = if horizontal {
        (stubs.up, stubs.down)
    } else {
        (stubs.left, stubs.right)
    };

    // Each of the two lines sits at `center_across + side·off` and runs
    // from the cell edge to a stop near the center.
    for side in [-1.0f32, 1.0f32] {
        let near_perp = if side < 0.0 { perp_neg } else { perp_pos };
        let far_perp = if side < 0.0 { perp_pos } else { perp_neg };

        // Distance past (positive) or short of (negative) the center at
        // which this line stops, measured toward the opposite edge.
        let overshoot = if near_perp == Double || far_perp == Double {
            if near_perp != Absent && far_perp != Absent {
                // Pass-through perpendicular: stop at the near line.
                -(off - t / 2.0)
            } else if near_perp == Double {
                // Corner, this is the inner line.
                -(off - t / 2.0)
            } else {
                // Corner, this is the outer line.
                off + t / 2.0
            }
        } else if near_perp != Absent || far_perp != Absent {
            // Single perpendicular: cross it completely.
            half_ink(near_perp, h).max(half_ink(far_perp, h))
        } else {
            0.0
        };

        let stop = if toward_positive {
            center_along - overshoot
        } else {
            center_along + overshoot
        };
        let (a0, a1) = if toward_positive {
            (stop, edge)
        } else {
            (edge, stop)
        };
        let across0 = center_across + side * off - t / 2.0;
        if horizontal {
            surface.fill_rect(a0, across0, a1 - a0, t);
        } else {
            surface.fill_rect(across0, a0, t, a1 - a0);
        }
    }
}

fn draw_diagonal<S: RenderSurface>(surface: &mut S, cp: u32, x: f32, y: f32, w: f32, h: f32) {
    let t = light_thickness(h);
    surface.set_line_width(t);
    surface.set_line_cap(LineCap::Butt);
    surface.begin_path();
    if cp == 0x2571 || cp == 0x2573 {
        surface.move_to(x + w, y);
        surface.line_to(x, y + h);
    }
    if cp == 0x2572 || cp == 0x2573 {
        surface.move_to(x, y);
        surface.line_to(x + w, y + h);
    }
    surface.stroke_path();
}

/// Draw a dashed box line (`┄ ┅ ┆ ┇ ┈ ┉ ┊ ┋ ╌ ╍ ╎ ╏`): `N` dashes of
/// `axis / (2N − 1)` with equal interleaved gaps.
pub fn draw_dashed<S: RenderSurface>(surface: &mut S, cp: u32, x: f32, y: f32, w: f32, h: f32) {
    let (vertical, heavy, dashes) = match cp {
        0x2504 => (false, false, 3),
        0x2505 => (false, true, 3),
        0x2506 => (true, false, 3),
        0x2507 => (true, true, 3),
        0x2508 => (false, false, 4),
        0x2509 => (false, true, 4),
        0x250A => (true, false, 4),
        0x250B => (true, true, 4),
        0x254C => (false, false, 2),
        0x254D => (false, true, 2),
        0x254E => (true, false, 2),
        0x254F => (true, true, 2),
        _ => return,
    };
    let t = if heavy {
        heavy_thickness(h)
    } else {
        light_thickness(h)
    };
    let axis = if vertical { h } else { w };
    let dash = axis / (2.0 * dashes as f32 - 1.0);
    for i in 0..dashes {
        let start = i as f32 * 2.0 * dash;
        if vertical {
            surface.fill_rect(x + w / 2.0 - t / 2.0, y + start, t, dash);
        } else {
            surface.fill_rect(x + start, y + h / 2.0 - t / 2.0, dash, t);
        }
    }
}

/// Draw a rounded arc corner (`╭ ╮ ╯ ╰`): a quarter arc whose endpoints
/// meet the cell center on one axis and straight extensions to the cell
/// edges on the other.
pub fn draw_rounded<S: RenderSurface>(surface: &mut S, cp: u32, x: f32, y: f32, w: f32, h: f32) {
    let t = light_thickness(h);
    let r = (w.min(h) / 2.0 - t / 2.0).max(1.0);
    let cx = x + w / 2.0;
    let cy = y + h / 2.0;

    surface.set_line_width(t);
    surface.set_line_cap(LineCap::Square);
    surface.begin_path();
    match cp {
        // ╭ down and right
        0x256D => {
            surface.move_to(cx, y + h);
            surface.line_to(cx, cy + r);
            surface.arc(cx + r, cy + r, r, PI, 1.5 * PI);
            surface.line_to(x + w, cy);
        }
        // ╮ down and left
        0x256E => {
            surface.move_to(x, cy);
            surface.line_to(cx - r, cy);
            surface.arc(cx - r, cy + r, r, 1.5 * PI, 2.0 * PI);
            surface.line_to(cx, y + h);
        }
        // ╯ up and left
        0x256F => {
            surface.move_to(cx, y);
            surface.line_to(cx, cy - r);
            surface.arc(cx - r, cy - r, r, 0.0, 0.5 * PI);
            surface.line_to(x, cy);
        }
        // ╰ up and right
        0x2570 => {
            surface.move_to(cx, y);
            surface.line_to(cx, cy - r);
            surface.arc(cx + r, cy - r, r, PI, 0.5 * PI);
            surface.line_to(x + w, cy);
        }
        _ => return,
    }
    surface.stroke_path();
}
