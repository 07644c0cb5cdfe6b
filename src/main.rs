// src/main.rs
use nannou::prelude::*;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use sweepvis::{config::Config, controllers::ControllerEvent, views::Surface};

struct Model {
    surface: Surface,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    nannou::app(model).update(update).run();
}

fn model(app: &App) -> Model {
    // Load config
    let config = Config::load().expect("Failed to load config file");
    let surface = Surface::from_config(&config).expect("Invalid config");

    app.new_window()
        .title(concat!("sweepvis ", env!("CARGO_PKG_VERSION")))
        .size(config.window.width, config.window.height)
        .view(view)
        .mouse_pressed(mouse_pressed)
        .touch(touch)
        .build()
        .expect("Failed to create window");

    info!(
        width = config.window.width,
        height = config.window.height,
        "window open, click to advance"
    );

    Model { surface }
}

fn mouse_pressed(_app: &App, model: &mut Model, button: MouseButton) {
    let started = model.surface.on_mouse_press(button);
    log_activate(model, started);
}

fn touch(_app: &App, model: &mut Model, touch: TouchEvent) {
    let started = model.surface.on_touch(touch.phase);
    log_activate(model, started);
}

fn log_activate(model: &Model, started: bool) {
    let controller = model.surface.controller();
    debug!(
        started,
        state = ?controller.state(),
        node = controller.cursor().current(),
        "activate"
    );
}

fn update(_app: &App, model: &mut Model, update: Update) {
    if let ControllerEvent::StepCompleted { node, direction } =
        model.surface.update(update.since_last)
    {
        debug!(node, ?direction, "cursor moved");
    }
}

// Draw the state of Model into the given Frame
fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    model.surface.repaint(&draw, app.window_rect());

    if let Err(e) = draw.to_frame(app, &frame) {
        error!("failed to draw frame: {:?}", e);
    }
}
