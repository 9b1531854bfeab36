//! Containers: stateless filled-rectangle widgets.

use crate::{draw, Canvas, Color, InputState};

/// A solid rectangle with no interaction. Never consumes input, so widgets
/// stacked below it still receive clicks through it.
#[derive(Debug, Clone)]
pub struct Container {
    x: i32,
    y: i32,
    width: i32,
    height: i32,
    color: Color,
}

impl Container {
    pub fn new(x: i32, y: i32, width: i32, height: i32, color: Color) -> Self {
        Self { x, y, width, height, color }
    }

    /// A container centered in a canvas of the given dimensions.
    pub fn centered(canvas_width: i32, canvas_height: i32, width: i32, height: i32, color: Color) -> Self {
        Self::new((canvas_width - width) / 2, (canvas_height - height) / 2, width, height, color)
    }
}

impl super::Widget for Container {
    fn render(&self, canvas: &mut Canvas) {
        draw::rect(canvas, self.x, self.y, self.width, self.height, self.color);
    }

    fn handle_input(&mut self, _input: &InputState) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::Widget;

    #[test]
    fn container_never_consumes_input() {
        let mut c = Container::new(0, 0, 100, 100, Color::GRAY);
        let input = InputState {
            mouse_x: 50,
            mouse_y: 50,
            mouse_down: true,
            mouse_clicked: true,
        };
        assert!(!c.handle_input(&input));
    }

    #[test]
    fn centered_positions_in_the_middle() {
        let c = Container::centered(100, 60, 40, 20, Color::GRAY);
        let mut canvas = Canvas::new(100, 60);
        c.render(&mut canvas);
        assert_eq!(canvas.get_pixel(30, 20), Color::GRAY);
        assert_eq!(canvas.get_pixel(69, 39), Color::GRAY);
        assert_eq!(canvas.get_pixel(29, 20), Color::TRANSPARENT);
        assert_eq!(canvas.get_pixel(70, 39), Color::TRANSPARENT);
    }
}
