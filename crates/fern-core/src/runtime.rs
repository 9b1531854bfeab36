//! The application shell and per-frame render loop.
//!
//! [`App`] owns the canvas, the input state and the widget registry.
//! A platform backend implements [`Platform`] to pump OS input into the
//! app and blit the finished buffer to a display surface; [`App::run`]
//! drives the tick cycle until the platform reports shutdown.

use crate::{Canvas, InputState, WidgetManager};

/// Presentation/input backend failure.
#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error("window creation failed: {0}")]
    WindowCreate(String),
    #[error("presenting the frame failed: {0}")]
    Present(String),
}

/// The seam between the core and the host platform.
///
/// `pump_events` runs before each tick and writes raw mouse state into the
/// `InputState`; `present` runs after rendering with the finished pixel
/// buffer. Both execute on the single driving thread.
pub trait Platform {
    /// Forward pending OS events into `input`. Returns `false` when the
    /// host wants to shut down, which ends [`App::run`].
    fn pump_events(&mut self, input: &mut InputState) -> bool;

    /// Blit the buffer (row-major, `width * height` packed `0xAABBGGRR`
    /// pixels) to the display surface.
    fn present(&mut self, width: i32, height: i32, buffer: &[u32]) -> Result<(), PlatformError>;
}

/// Everything one running toolkit instance owns.
pub struct App {
    canvas: Canvas,
    input: InputState,
    widgets: WidgetManager,
    draw_callback: Option<Box<dyn FnMut(&mut Canvas, &mut WidgetManager, &InputState)>>,
    frame_count: u64,
}

impl App {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            canvas: Canvas::new(width, height),
            input: InputState::default(),
            widgets: WidgetManager::new(),
            draw_callback: None,
            frame_count: 0,
        }
    }

    #[inline] pub fn canvas(&self) -> &Canvas { &self.canvas }
    #[inline] pub fn canvas_mut(&mut self) -> &mut Canvas { &mut self.canvas }
    #[inline] pub fn input(&self) -> &InputState { &self.input }
    #[inline] pub fn input_mut(&mut self) -> &mut InputState { &mut self.input }
    #[inline] pub fn widgets(&self) -> &WidgetManager { &self.widgets }
    #[inline] pub fn widgets_mut(&mut self) -> &mut WidgetManager { &mut self.widgets }
    #[inline] pub fn frame_count(&self) -> u64 { self.frame_count }

    /// Register the per-frame draw callback. It runs first in every tick
    /// and may issue rasterizer calls directly and/or register widgets.
    pub fn set_draw_callback(
        &mut self,
        callback: impl FnMut(&mut Canvas, &mut WidgetManager, &InputState) + 'static,
    ) {
        self.draw_callback = Some(Box::new(callback));
    }

    /// One frame, minus presentation:
    /// 1. run the draw callback,
    /// 2. dispatch input top-down (first consumer wins),
    /// 3. render widgets bottom-up.
    ///
    /// The caller presents the buffer afterwards and then calls
    /// [`App::end_frame`].
    pub fn tick(&mut self) {
        if let Some(callback) = self.draw_callback.as_mut() {
            callback(&mut self.canvas, &mut self.widgets, &self.input);
        }
        self.widgets.dispatch_input(&self.input);
        self.widgets.render_all(&mut self.canvas);
        self.frame_count += 1;
    }

    /// Reset one-shot input events. Runs after presentation, closing the
    /// tick.
    pub fn end_frame(&mut self) {
        self.input.end_frame();
    }

    /// Drive the loop at the platform's cadence until `pump_events`
    /// reports shutdown. There is no other stop condition.
    pub fn run(&mut self, platform: &mut impl Platform) -> Result<(), PlatformError> {
        log::debug!(
            "render loop starting, canvas {}x{}",
            self.canvas.width(),
            self.canvas.height()
        );
        while platform.pump_events(&mut self.input) {
            self.tick();
            platform.present(self.canvas.width(), self.canvas.height(), self.canvas.buffer())?;
            self.end_frame();
        }
        log::debug!("render loop stopped after {} frames", self.frame_count);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::button::{Button, ButtonConfig};
    use crate::{draw, Color};
    use std::cell::Cell;
    use std::rc::Rc;

    /// Scripted platform: replays mouse frames, records presented buffers.
    struct ScriptedPlatform {
        frames: Vec<(i32, i32, bool)>,
        cursor: usize,
        presented: Vec<Vec<u32>>,
    }

    impl ScriptedPlatform {
        fn new(frames: Vec<(i32, i32, bool)>) -> Self {
            Self { frames, cursor: 0, presented: Vec::new() }
        }
    }

    impl Platform for ScriptedPlatform {
        fn pump_events(&mut self, input: &mut InputState) -> bool {
            let Some(&(x, y, down)) = self.frames.get(self.cursor) else { return false };
            self.cursor += 1;
            input.set_mouse_pos(x, y);
            input.set_mouse_button(down);
            true
        }

        fn present(&mut self, _w: i32, _h: i32, buffer: &[u32]) -> Result<(), PlatformError> {
            self.presented.push(buffer.to_vec());
            Ok(())
        }
    }

    #[test]
    fn tick_runs_draw_callback_then_widget_render() {
        let mut app = App::new(8, 8);
        app.set_draw_callback(|canvas, widgets, _input| {
            draw::fill(canvas, Color::RED);
            if widgets.is_empty() {
                widgets.add(Rc::new(std::cell::RefCell::new(crate::Container::new(
                    0,
                    0,
                    4,
                    4,
                    Color::BLUE,
                ))));
            }
        });
        app.tick();
        // widget rendered after (on top of) the callback's fill
        assert_eq!(app.canvas().get_pixel(2, 2), Color::BLUE);
        assert_eq!(app.canvas().get_pixel(6, 6), Color::RED);
    }

    #[test]
    fn full_loop_click_fires_once_and_pulse_resets_between_frames() {
        let clicks = Rc::new(Cell::new(0));
        let mut app = App::new(32, 32);
        {
            let clicks = clicks.clone();
            let button = Button::create(ButtonConfig {
                x: 0,
                y: 0,
                width: 32,
                height: 32,
                on_click: Some(Box::new(move || clicks.set(clicks.get() + 1))),
                ..Default::default()
            });
            app.widgets_mut().add(button);
        }

        // up → down (held twice) → up: exactly one click
        let mut platform = ScriptedPlatform::new(vec![
            (5, 5, false),
            (5, 5, true),
            (5, 5, true),
            (5, 5, false),
        ]);
        app.run(&mut platform).unwrap();

        assert_eq!(clicks.get(), 1);
        assert_eq!(platform.presented.len(), 4);
        assert_eq!(app.frame_count(), 4);
        assert!(!app.input().mouse_clicked);
    }

    #[test]
    fn presented_buffer_reflects_the_rendered_frame() {
        let mut app = App::new(4, 4);
        app.set_draw_callback(|canvas, _w, _i| draw::fill(canvas, Color::GOLD));
        let mut platform = ScriptedPlatform::new(vec![(0, 0, false)]);
        app.run(&mut platform).unwrap();
        assert!(platform.presented[0].iter().all(|&p| p == Color::GOLD.0));
    }
}
