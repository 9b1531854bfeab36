//! Multi-stop linear gradients.

use crate::Color;

/// Gradient axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Horizontal,
    Vertical,
}

/// One color stop at a normalized position in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    pub color: Color,
    pub position: f32,
}

impl GradientStop {
    pub fn new(color: Color, position: f32) -> Self {
        Self { color, position }
    }
}

/// An ordered sequence of stops along one axis.
///
/// Callers must supply at least two stops with non-decreasing positions;
/// this is checked with `debug_assert!` only. Positions before the first
/// stop or after the last clamp to that stop's color.
#[derive(Debug, Clone)]
pub struct LinearGradient {
    stops: Vec<GradientStop>,
    direction: Direction,
}

impl LinearGradient {
    pub fn new(stops: Vec<GradientStop>, direction: Direction) -> Self {
        debug_assert!(stops.len() >= 2, "gradient needs at least two stops");
        debug_assert!(
            stops.windows(2).all(|w| w[0].position <= w[1].position),
            "gradient stops must be sorted by position"
        );
        Self { stops, direction }
    }

    #[inline] pub fn direction(&self) -> Direction { self.direction }
    #[inline] pub fn stops(&self) -> &[GradientStop] { &self.stops }

    /// Color at normalized position `pos`, blending between the bracketing
    /// pair of stops.
    pub fn color_at(&self, pos: f32) -> Color {
        let first = self.stops[0];
        let last = self.stops[self.stops.len() - 1];
        if pos <= first.position {
            return first.color;
        }
        if pos >= last.position {
            return last.color;
        }
        for pair in self.stops.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if pos >= a.position && pos <= b.position {
                let span = b.position - a.position;
                if span <= f32::EPSILON {
                    return b.color;
                }
                let local_t = (pos - a.position) / span;
                return a.color.blend(b.color, local_t);
            }
        }
        last.color
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_stop() -> LinearGradient {
        LinearGradient::new(
            vec![
                GradientStop::new(Color::rgb(0, 0, 0), 0.0),
                GradientStop::new(Color::rgb(200, 100, 50), 1.0),
            ],
            Direction::Horizontal,
        )
    }

    #[test]
    fn endpoints_return_terminal_stops() {
        let g = two_stop();
        assert_eq!(g.color_at(0.0), Color::rgb(0, 0, 0));
        assert_eq!(g.color_at(1.0), Color::rgb(200, 100, 50));
    }

    #[test]
    fn positions_outside_range_clamp() {
        let g = two_stop();
        assert_eq!(g.color_at(-3.0), g.color_at(0.0));
        assert_eq!(g.color_at(2.0), g.color_at(1.0));
    }

    #[test]
    fn midpoint_blends_between_stops() {
        let g = two_stop();
        assert_eq!(g.color_at(0.5), Color::rgb(100, 50, 25));
    }

    #[test]
    fn continuous_across_interior_stop() {
        let g = LinearGradient::new(
            vec![
                GradientStop::new(Color::rgb(0, 0, 0), 0.0),
                GradientStop::new(Color::rgb(100, 100, 100), 0.5),
                GradientStop::new(Color::rgb(200, 200, 200), 1.0),
            ],
            Direction::Vertical,
        );
        // landing exactly on a stop returns that stop's color from either side
        assert_eq!(g.color_at(0.5), Color::rgb(100, 100, 100));
        // monotone in between
        let c1 = g.color_at(0.25).r();
        let c2 = g.color_at(0.49).r();
        let c3 = g.color_at(0.51).r();
        let c4 = g.color_at(0.75).r();
        assert!(c1 <= c2 && c2 <= 100);
        assert!(100 <= c3 && c3 <= c4);
    }

    #[test]
    fn offset_stop_positions_renormalize() {
        let g = LinearGradient::new(
            vec![
                GradientStop::new(Color::rgb(0, 0, 0), 0.2),
                GradientStop::new(Color::rgb(100, 0, 0), 0.8),
            ],
            Direction::Horizontal,
        );
        assert_eq!(g.color_at(0.1), Color::rgb(0, 0, 0));
        assert_eq!(g.color_at(0.5), Color::rgb(50, 0, 0));
        assert_eq!(g.color_at(0.9), Color::rgb(100, 0, 0));
    }
}
