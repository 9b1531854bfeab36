//! Interactive Mandelbrot explorer: the fractal redraws on demand while
//! pan/zoom buttons along the bottom exercise the widget layer.

use std::cell::RefCell;
use std::rc::Rc;

use fern_core::gradient::{Direction, GradientStop, LinearGradient};
use fern_core::prelude::*;
use fern_core::widgets::text_widget;
use fern_minifb::MinifbPlatform;

const WIDTH: i32 = 800;
const HEIGHT: i32 = 600;
const VIEW_HEIGHT: i32 = HEIGHT - 80; // bottom strip is for controls
const MAX_ITERATIONS: u32 = 100;

struct View {
    center_x: f64,
    center_y: f64,
    zoom: f64,
    dirty: bool,
}

impl View {
    fn reset() -> Self {
        Self { center_x: -0.5, center_y: 0.0, zoom: 4.0, dirty: true }
    }
}

fn mandelbrot(cr: f64, ci: f64, max_iter: u32) -> u32 {
    let (mut zr, mut zi) = (0.0f64, 0.0f64);
    for i in 0..max_iter {
        let zr2 = zr * zr;
        let zi2 = zi * zi;
        if zr2 + zi2 > 4.0 {
            return i;
        }
        zi = 2.0 * zr * zi + ci;
        zr = zr2 - zi2 + cr;
    }
    max_iter
}

fn render_fractal(canvas: &mut Canvas, view: &View, palette: &LinearGradient) {
    let aspect = WIDTH as f64 / VIEW_HEIGHT as f64;
    for py in 0..VIEW_HEIGHT {
        for px in 0..WIDTH {
            let cr = view.center_x + (px as f64 / WIDTH as f64 - 0.5) * view.zoom * aspect;
            let ci = view.center_y + (py as f64 / VIEW_HEIGHT as f64 - 0.5) * view.zoom;
            let iter = mandelbrot(cr, ci, MAX_ITERATIONS);
            let color = if iter == MAX_ITERATIONS {
                Color::BLACK
            } else {
                let t = (iter as f32 / MAX_ITERATIONS as f32).sqrt();
                palette.color_at(t)
            };
            canvas.set_pixel(px, py, color);
        }
    }
}

fn control_button(
    x: i32,
    label: &str,
    view: &Rc<RefCell<View>>,
    apply: impl Fn(&mut View) + 'static,
) -> Rc<RefCell<Button>> {
    let view = view.clone();
    Button::create(ButtonConfig {
        x,
        y: VIEW_HEIGHT + 20,
        width: 90,
        height: 40,
        normal_color: Color::SECONDARY,
        hover_color: Color::PRIMARY,
        press_color: Color::NAVY,
        label: label.into(),
        text_scale: 1,
        text_color: Color::WHITE,
        on_click: Some(Box::new(move || {
            let mut v = view.borrow_mut();
            apply(&mut v);
            v.dirty = true;
        })),
    })
}

fn main() {
    env_logger::init();

    let view = Rc::new(RefCell::new(View::reset()));
    let palette = LinearGradient::new(
        vec![
            GradientStop::new(Color::NAVY, 0.0),
            GradientStop::new(Color::TURQUOISE, 0.4),
            GradientStop::new(Color::GOLD, 0.8),
            GradientStop::new(Color::WHITE, 1.0),
        ],
        Direction::Horizontal,
    );

    let mut app = App::new(WIDTH as u32, HEIGHT as u32);

    let buttons: Vec<(&str, Box<dyn Fn(&mut View)>)> = vec![
        ("IN", Box::new(|v| v.zoom *= 0.5)),
        ("OUT", Box::new(|v| v.zoom *= 2.0)),
        ("LEFT", Box::new(|v| v.center_x -= v.zoom * 0.1)),
        ("RIGHT", Box::new(|v| v.center_x += v.zoom * 0.1)),
        ("UP", Box::new(|v| v.center_y -= v.zoom * 0.1)),
        ("DOWN", Box::new(|v| v.center_y += v.zoom * 0.1)),
        ("RESET", Box::new(|v| *v = View::reset())),
    ];
    for (i, (label, apply)) in buttons.into_iter().enumerate() {
        let x = 20 + i as i32 * 110;
        app.widgets_mut()
            .add(control_button(x, label, &view, move |v| apply(v)));
    }

    let draw_view = view.clone();
    app.set_draw_callback(move |canvas, _widgets, _input| {
        let mut v = draw_view.borrow_mut();
        if v.dirty {
            log::debug!("redrawing at zoom {:.3e}", v.zoom);
            render_fractal(canvas, &v, &palette);
            draw::rect(canvas, 0, VIEW_HEIGHT, WIDTH, HEIGHT - VIEW_HEIGHT, Color::CHARCOAL);
            text_widget(canvas, Point::new(20, VIEW_HEIGHT + 4), "MANDELBROT", 1, Color::LIGHT_GRAY);
            v.dirty = false;
        }
    });

    let mut platform = match MinifbPlatform::new("fern fractal explorer", WIDTH as u32, HEIGHT as u32) {
        Ok(p) => p,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    };
    if let Err(e) = app.run(&mut platform) {
        log::error!("{e}");
        std::process::exit(1);
    }
}
