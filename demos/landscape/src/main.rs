//! A static scene drawn entirely with immediate-mode primitives: gold sky,
//! sun, green ground, two line-fan hills and a few cloud blobs.

use fern_core::gradient::{Direction, GradientStop, LinearGradient};
use fern_core::prelude::*;
use fern_core::widgets::{circle_widget, gradient_rect, line_widget, text_widget};
use fern_minifb::MinifbPlatform;

const WIDTH: i32 = 1200;
const HEIGHT: i32 = 600;

fn draw_scene(canvas: &mut Canvas) {
    let sky = LinearGradient::new(
        vec![
            GradientStop::new(Color::GOLD, 0.0),
            GradientStop::new(Color::AMBER, 1.0),
        ],
        Direction::Vertical,
    );
    gradient_rect(canvas, 0, 0, WIDTH, HEIGHT, &sky);

    // sun
    circle_widget(canvas, 80, Point::new(WIDTH - 200, 120), Color::SKY_BLUE);

    // ground
    draw::rect(canvas, 0, HEIGHT - 150, WIDTH, 150, Color::FOREST);

    // left hill: fan of lines converging on a peak
    for i in 0..180 {
        let base_x = 100 + i * 400 / 180;
        line_widget(
            canvas,
            Point::new(base_x, HEIGHT - 150),
            Point::new(300, HEIGHT - 350),
            1,
            Color::GRAY,
        );
    }

    // right hill, taller and darker
    for i in 0..180 {
        let base_x = 700 + i * 400 / 180;
        line_widget(
            canvas,
            Point::new(base_x, HEIGHT - 150),
            Point::new(900, HEIGHT - 400),
            1,
            Color::rgb(0x69, 0x69, 0x69),
        );
    }

    // snow cap on the right peak
    for i in 0..50 {
        let base_x = 850 + i * 2;
        line_widget(
            canvas,
            Point::new(base_x, HEIGHT - 350),
            Point::new(900, HEIGHT - 400),
            1,
            Color::WHITE,
        );
    }

    // clouds
    for &(x, y, r) in &[
        (200, 100, 30),
        (240, 90, 40),
        (280, 100, 30),
        (600, 150, 25),
        (635, 140, 35),
        (670, 150, 25),
    ] {
        circle_widget(canvas, r, Point::new(x, y), Color::WHITE);
    }

    text_widget(canvas, Point::new(20, 20), "FERN LANDSCAPE", 2, Color::CHARCOAL);
}

fn main() {
    env_logger::init();

    let mut app = App::new(WIDTH as u32, HEIGHT as u32);
    app.set_draw_callback(|canvas, _widgets, _input| draw_scene(canvas));

    let mut platform = match MinifbPlatform::new("fern landscape", WIDTH as u32, HEIGHT as u32) {
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
