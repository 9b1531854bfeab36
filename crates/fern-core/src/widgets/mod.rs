//! The widget layer.
//!
//! Retained widgets (things with interaction state) implement [`Widget`]
//! and live in the registry; circles, lines and text carry no state and are
//! drawn immediately through the helpers below.

pub mod button;
pub mod container;

use crate::gradient::{Direction, LinearGradient};
use crate::{draw, font, Canvas, Color, InputState, Point};

/// A drawable, input-reactive unit.
pub trait Widget {
    /// Draw into the canvas.
    fn render(&self, canvas: &mut Canvas);

    /// React to this frame's input. Returns `true` iff the widget consumed
    /// it (a click fired on this widget), which stops dispatch to widgets
    /// below it in z-order.
    fn handle_input(&mut self, input: &InputState) -> bool;
}

// ─── Immediate-mode helpers ──────────────────────────────────────────────────

/// Draw a filled circle. Not registered; no interaction state.
pub fn circle_widget(canvas: &mut Canvas, radius: i32, position: Point, color: Color) {
    draw::circle(canvas, position.x, position.y, radius, color);
}

/// Draw a line segment with rounded caps.
pub fn line_widget(canvas: &mut Canvas, start: Point, end: Point, thickness: i32, color: Color) {
    draw::line(canvas, start.x, start.y, end.x, end.y, thickness, color);
}

/// Draw a text run.
pub fn text_widget(canvas: &mut Canvas, start: Point, text: &str, scale: i32, color: Color) {
    font::draw_text(canvas, text, start.x, start.y, scale, color);
}

/// Fill a rectangle with a linear gradient, one row or column of solid
/// color at a time.
pub fn gradient_rect(
    canvas: &mut Canvas,
    x: i32,
    y: i32,
    width: i32,
    height: i32,
    gradient: &LinearGradient,
) {
    if width <= 0 || height <= 0 {
        return;
    }
    match gradient.direction() {
        Direction::Vertical => {
            for row in 0..height {
                let color = gradient.color_at(row as f32 / height as f32);
                draw::rect(canvas, x, y + row, width, 1, color);
            }
        }
        Direction::Horizontal => {
            for col in 0..width {
                let color = gradient.color_at(col as f32 / width as f32);
                draw::rect(canvas, x + col, y, 1, height, color);
            }
        }
    }
}
