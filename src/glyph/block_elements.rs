//! Block elements (U+2580–U+259F): full/partial blocks, quadrants and
//! shades as cell-aligned rectangle fills.

use crate::surface::RenderSurface;

/// Quadrant occupancy, top-left/top-right/bottom-left/bottom-right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Quadrants {
    tl: bool,
    tr: bool,
    bl: bool,
    br: bool,
}

/// Decoded drawing form of a block element.
#[derive(Debug, Clone, Copy, PartialEq)]
enum BlockForm {
    Full,
    /// Top-anchored, `n` eighths tall.
    Upper(u32),
    /// Bottom-anchored, `n` eighths tall.
    Lower(u32),
    /// Left-anchored, `n` eighths wide.
    Left(u32),
    /// Right-anchored, `n` eighths wide.
    Right(u32),
    Quadrants(Quadrants),
    /// Uniform fill at the given ink density.
    Shade(f32),
}

fn decode(cp: u32) -> Option<BlockForm> {
    let form = match cp {
        0x2580 => BlockForm::Upper(4),
        0x2581 => BlockForm::Lower(1),
        0x2582 => BlockForm::Lower(2),
        0x2583 => BlockForm::Lower(3),
        0x2584 => BlockForm::Lower(4),
        0x2585 => BlockForm::Lower(5),
        0x2586 => BlockForm::Lower(6),
        0x2587 => BlockForm::Lower(7),
        0x2588 => BlockForm::Full,
        0x2589 => BlockForm::Left(7),
        0x258A => BlockForm::Left(6),
        0x258B => BlockForm::Left(5),
        0x258C => BlockForm::Left(4),
        0x258D => BlockForm::Left(3),
        0x258E => BlockForm::Left(2),
        0x258F => BlockForm::Left(1),
        0x2590 => BlockForm::Right(4),
        0x2591 => BlockForm::Shade(0.25),
        0x2592 => BlockForm::Shade(0.5),
        0x2593 => BlockForm::Shade(0.75),
        0x2594 => BlockForm::Upper(1),
        0x2595 => BlockForm::Right(1),
        0x2596..=0x259F => {
            let (tl, tr, bl, br) = match cp {
                0x2596 => (false, false, true, false),
                0x2597 => (false, false, false, true),
                0x2598 => (true, false, false, false),
                0x2599 => (true, false, true, true),
                0x259A => (true, false, false, true),
                0x259B => (true, true, true, false),
                0x259C => (true, true, false, true),
                0x259D => (false, true, false, false),
                0x259E => (false, true, true, false),
                _ => (false, true, true, true), // 0x259F
            };
            BlockForm::Quadrants(Quadrants { tl, tr, bl, br })
        }
        _ => return None,
    };
    Some(form)
}

/// Draw a block element into the cell rect.
pub fn draw_block<S: RenderSurface>(surface: &mut S, cp: u32, x: f32, y: f32, w: f32, h: f32) {
    let Some(form) = decode(cp) else {
        return;
    };
    match form {
        BlockForm::Full => surface.fill_rect(x, y, w, h),
        BlockForm::Upper(n) => {
            surface.fill_rect(x, y, w, (h * n as f32 / 8.0).round());
        }
        BlockForm::Lower(n) => {
            let part = (h * n as f32 / 8.0).round();
            surface.fill_rect(x, y + h - part, w, part);
        }
        BlockForm::Left(n) => {
            surface.fill_rect(x, y, (w * n as f32 / 8.0).round(), h);
        }
        BlockForm::Right(n) => {
            let part = (w * n as f32 / 8.0).round();
            surface.fill_rect(x + w - part, y, part, h);
        }
        BlockForm::Quadrants(q) => {
            // Split at floor(w/2)/floor(h/2); the second half absorbs
            // the rounding remainder so neighbors tile exactly.
            let half_w = (w / 2.0).floor();
            let half_h = (h / 2.0).floor();
            if q.tl {
                surface.fill_rect(x, y, half_w, half_h);
            }
            if q.tr {
                surface.fill_rect(x + half_w, y, w - half_w, half_h);
            }
            if q.bl {
                surface.fill_rect(x, y + half_h, half_w, h - half_h);
            }
            if q.br {
                surface.fill_rect(x + half_w, y + half_h, w - half_w, h - half_h);
            }
        }
        BlockForm::Shade(density) => {
            let prev = surface.global_alpha();
            surface.set_global_alpha(prev * density);
            surface.fill_rect(x, y, w, h);
            surface.set_global_alpha(prev);
        }
    }
}
