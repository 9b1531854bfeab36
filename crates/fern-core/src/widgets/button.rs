//! Clickable buttons.

use std::cell::RefCell;
use std::rc::Rc;

use crate::{draw, font, Canvas, Color, InputState, Rect, Signal};

/// Everything needed to construct a [`Button`]. Immutable after
/// construction; interaction state lives on the button itself.
pub struct ButtonConfig {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub normal_color: Color,
    pub hover_color: Color,
    pub press_color: Color,
    pub label: String,
    pub text_scale: i32,
    pub text_color: Color,
    pub on_click: Option<Box<dyn FnMut()>>,
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self {
            x: 0,
            y: 0,
            width: 100,
            height: 30,
            normal_color: Color::PRIMARY,
            hover_color: Color::INFO,
            press_color: Color::NAVY,
            label: String::new(),
            text_scale: 1,
            text_color: Color::WHITE,
            on_click: None,
        }
    }
}

/// A three-state (idle / hovered / pressed) push button.
///
/// State is recomputed from the input every frame: hovered means the mouse
/// is inside the bounds, pressed means hovered with the button held. A
/// click (hovered while the one-shot `mouse_clicked` pulse is up) fires
/// [`on_click`] and consumes the frame's input.
///
/// [`on_click`]: Button::on_click
pub struct Button {
    config: ButtonConfig,
    is_hovered: bool,
    is_pressed: bool,
    pub on_click: Signal<()>,
    /// Fires with the new state when the pointer enters or leaves.
    pub on_hover: Signal<bool>,
    /// Fires with the new state when the press state changes.
    pub on_press: Signal<bool>,
}

impl Button {
    pub fn new(mut config: ButtonConfig) -> Self {
        let mut on_click = Signal::new();
        if let Some(mut cb) = config.on_click.take() {
            on_click.connect(move |_| cb());
        }
        Self {
            config,
            is_hovered: false,
            is_pressed: false,
            on_click,
            on_hover: Signal::new(),
            on_press: Signal::new(),
        }
    }

    /// Construct behind a shared handle, ready to hand to the registry
    /// while the caller keeps a reference for signal subscription.
    pub fn create(config: ButtonConfig) -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self::new(config)))
    }

    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::new(self.config.x, self.config.y, self.config.width, self.config.height)
    }

    #[inline] pub fn is_hovered(&self) -> bool { self.is_hovered }
    #[inline] pub fn is_pressed(&self) -> bool { self.is_pressed }
}

impl super::Widget for Button {
    fn render(&self, canvas: &mut Canvas) {
        let fill = if self.is_pressed {
            self.config.press_color
        } else if self.is_hovered {
            self.config.hover_color
        } else {
            self.config.normal_color
        };
        draw::rect(canvas, self.config.x, self.config.y, self.config.width, self.config.height, fill);

        if !self.config.label.is_empty() {
            let scale = self.config.text_scale;
            let text_w = self.config.label.chars().count() as i32 * 8 * scale;
            let text_x = self.config.x + (self.config.width - text_w) / 2;
            let text_y = self.config.y + (self.config.height - 8 * scale) / 2;
            font::draw_text(canvas, &self.config.label, text_x, text_y, scale, self.config.text_color);
        }
    }

    fn handle_input(&mut self, input: &InputState) -> bool {
        let was_hovered = self.is_hovered;
        let was_pressed = self.is_pressed;

        self.is_hovered = self.bounds().contains(input.mouse_pos());
        self.is_pressed = self.is_hovered && input.mouse_down;

        if was_hovered != self.is_hovered {
            self.on_hover.emit(&self.is_hovered);
        }
        if was_pressed != self.is_pressed {
            self.on_press.emit(&self.is_pressed);
        }

        if self.is_hovered && input.mouse_clicked {
            self.on_click.emit(&());
            return true;
        }
        false
    }
}
