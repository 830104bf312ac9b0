//! Headless driver: builds the demo scene, clicks every placemark that is
//! on screen, and logs what each pick cycle did.
//!
//! Usage: `geopick [options.toml]`. Run with `RUST_LOG=info` (or `debug`
//! for pick traces).

use std::path::Path;

use geopick::camera::Viewport;
use geopick::demo;
use geopick::input::{InputEvent, MouseButton};
use geopick::{
    ClickTarget, GeoPickError, HeadlessSurface, InputProcessor, Options,
    PickController,
};

fn load_options() -> Result<Options, GeoPickError> {
    match std::env::args().nth(1) {
        Some(path) => Options::load(Path::new(&path)),
        None => Ok(Options::default()),
    }
}

fn button(pressed: bool) -> InputEvent {
    InputEvent::MouseButton {
        button: MouseButton::Left,
        pressed,
    }
}

fn main() {
    env_logger::init();

    let options = match load_options() {
        Ok(options) => options,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    };

    let viewport = Viewport::default();
    let mut scene = demo::build_scene(&options, viewport);
    let mut controller =
        PickController::new(options.modal_trigger(), HeadlessSurface);
    let mut input = InputProcessor::with_options(&options.input);

    let targets: Vec<_> = scene
        .placemarks()
        .filter_map(|(id, _)| {
            let center = scene.footprint(id)?.image.center();
            let on_screen = (0.0..viewport.width).contains(&center.x)
                && (0.0..viewport.height).contains(&center.y);
            on_screen.then_some((id, center))
        })
        .collect();
    log::info!("{} placemarks on screen", targets.len());

    for (id, point) in targets {
        let _ = input.handle_event(InputEvent::CursorMoved {
            x: point.x,
            y: point.y,
        });
        let _ = input.handle_event(button(true));
        let Some(pointer) = input.handle_event(button(false)) else {
            continue;
        };

        let outcome = controller.handle_pick(&mut scene, pointer);
        log::info!(
            "layer {} placemark {}: {} cleared, {} highlighted, redraw {}",
            id.layer,
            id.index,
            outcome.cleared,
            outcome.highlighted,
            outcome.redrawn
        );
        if controller.modal().is_shown() {
            let _ = controller.handle_click(ClickTarget::Outside);
        }
    }

    let _ = controller.clear(&mut scene);
    log::info!("{} redraws requested", scene.redraw_requests());
}
