//! Mouse input state.
//!
//! The platform backend fills this in between ticks; widgets read from it
//! during the tick. `mouse_clicked` is an edge-triggered one-frame pulse:
//! it rises on the up→down transition of the button and is cleared
//! unconditionally at the end of every tick by [`InputState::end_frame`].

use crate::Point;

#[derive(Debug, Clone, Default)]
pub struct InputState {
    pub mouse_x: i32,
    pub mouse_y: i32,
    pub mouse_down: bool,
    pub mouse_clicked: bool,
}

impl InputState {
    #[inline]
    pub fn mouse_pos(&self) -> Point {
        Point::new(self.mouse_x, self.mouse_y)
    }

    // ── platform-side updates ─────────────────────────────────────────────────

    pub fn set_mouse_pos(&mut self, x: i32, y: i32) {
        self.mouse_x = x;
        self.mouse_y = y;
    }

    /// Report the button state. Only the up→down transition raises the
    /// one-shot `mouse_clicked` flag; held or repeated reports do not.
    pub fn set_mouse_button(&mut self, down: bool) {
        if down && !self.mouse_down {
            self.mouse_clicked = true;
        }
        self.mouse_down = down;
    }

    // ── frame lifecycle ───────────────────────────────────────────────────────

    /// Clear one-shot events. Called once at the end of every tick.
    pub fn end_frame(&mut self) {
        self.mouse_clicked = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn click_rises_only_on_the_down_transition() {
        let mut s = InputState::default();
        s.set_mouse_button(true);
        assert!(s.mouse_clicked);
        s.end_frame();

        // still held: no new pulse
        s.set_mouse_button(true);
        assert!(!s.mouse_clicked);

        s.set_mouse_button(false);
        assert!(!s.mouse_clicked);

        s.set_mouse_button(true);
        assert!(s.mouse_clicked);
    }

    #[test]
    fn end_frame_clears_the_pulse_but_not_the_button() {
        let mut s = InputState::default();
        s.set_mouse_button(true);
        s.end_frame();
        assert!(!s.mouse_clicked);
        assert!(s.mouse_down);
    }

    #[test]
    fn release_alone_never_pulses() {
        let mut s = InputState::default();
        s.set_mouse_button(false);
        assert!(!s.mouse_clicked);
    }
}
