//! Rasterization primitives.
//!
//! Free functions taking the target [`Canvas`] explicitly; no ambient
//! drawing state anywhere. Everything clips per-pixel through
//! [`Canvas::set_pixel`], so partially off-canvas shapes degrade silently.

use crate::{Canvas, Color};

/// Set every pixel to `color`.
pub fn fill(canvas: &mut Canvas, color: Color) {
    canvas.clear(color);
}

/// Filled axis-aligned rectangle. Zero or negative extents draw nothing.
pub fn rect(canvas: &mut Canvas, x: i32, y: i32, w: i32, h: i32, color: Color) {
    if w <= 0 || h <= 0 {
        return;
    }
    for row in 0..h {
        for col in 0..w {
            canvas.set_pixel(x + col, y + row, color);
        }
    }
}

/// Filled disk: bounding-box scan with a squared-distance test. `r = 0`
/// sets exactly the center pixel.
pub fn circle(canvas: &mut Canvas, cx: i32, cy: i32, r: i32, color: Color) {
    if r < 0 {
        return;
    }
    for dy in -r..=r {
        for dx in -r..=r {
            if dx * dx + dy * dy <= r * r {
                canvas.set_pixel(cx + dx, cy + dy, color);
            }
        }
    }
}

/// Line between two points by Bresenham stepping, stamping a filled disk of
/// radius `thickness` at every step. Thickness 0 gives single pixels;
/// larger values give rounded caps and joins by construction. Coincident
/// endpoints draw one stamp.
pub fn line(canvas: &mut Canvas, x1: i32, y1: i32, x2: i32, y2: i32, thickness: i32, color: Color) {
    let (mut x, mut y) = (x1, y1);
    let dx = (x2 - x1).abs();
    let dy = (y2 - y1).abs();
    let sx = if x1 < x2 { 1 } else { -1 };
    let sy = if y1 < y2 { 1 } else { -1 };
    let mut err = dx - dy;

    loop {
        circle(canvas, x, y, thickness, color);

        if x == x2 && y == y2 {
            break;
        }
        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            x += sx;
        }
        if e2 < dx {
            err += dx;
            y += sy;
        }
    }
}
