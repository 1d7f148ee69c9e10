//! Headless walk through the per-frame pipeline: build the Warmagic title
//! screen in design space, fit it to a couple of window sizes, and log the
//! draw stream a backend would consume.
//!
//! Run with `cargo run -p warmagic-ui --example title_screen`.

use warmagic_engine::logging::{LoggingConfig, init_logging};
use warmagic_ui::prelude::*;

const DESIGN_WIDTH: f32 = 800.0;
const DESIGN_HEIGHT: f32 = 600.0;

fn main() {
    init_logging(LoggingConfig::default());

    let fonts = FontSystem::new();
    let font = FontId::FALLBACK;

    let mut scene = Scene::new();
    scene.insert(Widget::panel(
        Rect::new(0.0, 0.0, DESIGN_WIDTH, DESIGN_HEIGHT),
        Style::WARMAGIC_BORDERLESS,
    ));
    scene.insert(Widget::label(
        Rect::new(10.0, 10.0, 260.0, 50.0),
        "Warmagic",
        35.0,
        Align::CENTER,
        Style::WARMAGIC,
    ));
    scene.insert(Widget::button(
        Rect::new(300.0, 250.0, 500.0, 300.0),
        "New game",
        24.0,
        Align::CENTER,
        Style::WARMAGIC,
    ));
    let sound = scene.insert(Widget::toggle_button(
        Rect::new(300.0, 320.0, 500.0, 370.0),
        "Sound",
        24.0,
        Align::CENTER,
        Style::WARMAGIC,
        true,
    ));

    let mut draw_list = DrawList::new();

    // A resize is just a new fit; widget geometry never changes. The second
    // tuple element plays the role of a pointer position in window pixels,
    // parked over the sound toggle in both window sizes.
    let frames = [
        (800.0, 600.0, Point::new(400.0, 345.0)),
        (1920.0, 1080.0, Point::new(960.0, 621.0)),
    ];
    for (window_w, window_h, pointer) in frames {
        let transform = ScreenTransform::fit(window_w, window_h, DESIGN_WIDTH, DESIGN_HEIGHT);
        log::info!(
            "window {window_w}x{window_h}: scale {:.3}, offset ({:.1}, {:.1})",
            transform.scale,
            transform.x_offset,
            transform.y_offset
        );

        draw_list.clear();
        let mut painter = Painter::new(&mut draw_list, &fonts, font);
        scene.draw_transformed(&transform, &mut painter);
        log::info!("recorded {} draw command(s)", draw_list.len());

        // Pointer positions arrive in window pixels; map back to design
        // space before hit-testing against the authored rects.
        let hit = scene.hit_test(transform.unapply_point(pointer));
        log::info!("pointer over sound toggle: {}", hit == Some(sound));
    }
}
