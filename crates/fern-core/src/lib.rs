//! # fern-core
//!
//! Backend-agnostic 2D toolkit: a software rasterizer drawing into a flat
//! RGBA pixel buffer, plus a small retained widget layer (buttons,
//! containers) with hit-testing and a per-frame render loop.
//! Pair with a backend crate to put pixels on screen:
//! - `fern-minifb`  (desktop window via minifb)

pub mod canvas;
pub mod color;
pub mod draw;
pub mod font;
pub mod gradient;
pub mod input;
pub mod ppm;
pub mod registry;
pub mod runtime;
pub mod signal;
pub mod widgets;

// ─── re-exports ──────────────────────────────────────────────────────────────
pub use canvas::Canvas;
pub use color::Color;
pub use gradient::{Direction, GradientStop, LinearGradient};
pub use input::InputState;
pub use registry::{WidgetId, WidgetManager};
pub use runtime::{App, Platform, PlatformError};
pub use signal::{ConnectionId, Signal};
pub use widgets::{button::Button, button::ButtonConfig, container::Container, Widget};

// ─── Prelude ─────────────────────────────────────────────────────────────────
pub mod prelude {
    pub use super::{
        canvas::Canvas,
        draw,
        input::InputState,
        runtime::{App, Platform},
        widgets::{button::Button, button::ButtonConfig, container::Container, Widget},
        Color, Point, Rect,
    };
}

// ─── Primitive geometry types ────────────────────────────────────────────────

/// 2-D integer point in canvas pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ZERO: Self = Self { x: 0, y: 0 };

    #[inline] pub fn new(x: i32, y: i32) -> Self { Self { x, y } }
}

impl From<(i32, i32)> for Point { fn from((x, y): (i32, i32)) -> Self { Self::new(x, y) } }

/// Axis-aligned integer rectangle (origin inclusive, extent exclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    #[inline] pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self { Self { x, y, w, h } }

    #[inline]
    pub fn contains(self, p: Point) -> bool {
        p.x >= self.x && p.x < self.x + self.w && p.y >= self.y && p.y < self.y + self.h
    }

    #[inline] pub fn is_empty(self) -> bool { self.w <= 0 || self.h <= 0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_contains_is_exclusive_on_far_edges() {
        let r = Rect::new(10, 10, 5, 5);
        assert!(r.contains(Point::new(10, 10)));
        assert!(r.contains(Point::new(14, 14)));
        assert!(!r.contains(Point::new(15, 10)));
        assert!(!r.contains(Point::new(10, 15)));
        assert!(!r.contains(Point::new(9, 10)));
    }

    #[test]
    fn degenerate_rect_is_empty() {
        assert!(Rect::new(0, 0, 0, 10).is_empty());
        assert!(Rect::new(0, 0, -3, 10).is_empty());
        assert!(!Rect::new(0, 0, 1, 1).is_empty());
    }
}
