//! # fern-minifb
//!
//! Desktop presentation backend for **fern-core** built on
//! [minifb](https://crates.io/crates/minifb): opens a window, pumps mouse
//! state into the toolkit's `InputState` each tick, and blits the finished
//! pixel buffer.
//!
//! ```no_run
//! use fern_core::prelude::*;
//! use fern_minifb::MinifbPlatform;
//!
//! let mut app = App::new(800, 600);
//! app.set_draw_callback(|canvas, _widgets, _input| {
//!     draw::fill(canvas, Color::CHARCOAL);
//! });
//! let mut platform = MinifbPlatform::new("fern", 800, 600).unwrap();
//! app.run(&mut platform).unwrap();
//! ```

use fern_core::{InputState, Platform, PlatformError};
use minifb::{Key, MouseButton, MouseMode, Window, WindowOptions};

/// A minifb window driving the toolkit at a fixed cadence.
pub struct MinifbPlatform {
    window: Window,
    /// Scratch buffer for the packed-RGBA → minifb ARGB conversion.
    convert: Vec<u32>,
}

impl MinifbPlatform {
    /// Open a window. The render loop is capped at 60 frames per second.
    pub fn new(title: &str, width: u32, height: u32) -> Result<Self, PlatformError> {
        log::info!("opening {}x{} window '{}'", width, height, title);
        let mut window =
            Window::new(title, width as usize, height as usize, WindowOptions::default())
                .map_err(|e| PlatformError::WindowCreate(e.to_string()))?;
        window.set_target_fps(60);
        Ok(Self {
            window,
            convert: vec![0; (width * height) as usize],
        })
    }
}

impl Platform for MinifbPlatform {
    fn pump_events(&mut self, input: &mut InputState) -> bool {
        if !self.window.is_open() || self.window.is_key_down(Key::Escape) {
            return false;
        }
        if let Some((x, y)) = self.window.get_mouse_pos(MouseMode::Clamp) {
            input.set_mouse_pos(x as i32, y as i32);
        }
        input.set_mouse_button(self.window.get_mouse_down(MouseButton::Left));
        true
    }

    fn present(&mut self, width: i32, height: i32, buffer: &[u32]) -> Result<(), PlatformError> {
        // The canvas packs 0xAABBGGRR (low byte red); minifb wants
        // 0x00RRGGBB. Swap red and blue, drop alpha.
        self.convert.resize(buffer.len(), 0);
        for (dst, &src) in self.convert.iter_mut().zip(buffer) {
            let r = src & 0xFF;
            let g = (src >> 8) & 0xFF;
            let b = (src >> 16) & 0xFF;
            *dst = (r << 16) | (g << 8) | b;
        }
        self.window
            .update_with_buffer(&self.convert, width as usize, height as usize)
            .map_err(|e| PlatformError::Present(e.to_string()))
    }
}
