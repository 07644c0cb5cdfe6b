// src/views/surface.rs
//
// The drawing surface: clears the background, forwards clicks and taps to
// the controller and paints whatever node the cursor is on.

use nannou::prelude::*;
use std::time::Duration;
use tracing::info;

use crate::config::{Config, ConfigError};
use crate::controllers::{AnimationController, ControllerEvent};
use crate::render::{MotifPainter, MotifStyle};

pub struct Surface {
    controller: AnimationController,
    style: MotifStyle,
}

impl Surface {
    pub fn new(controller: AnimationController, style: MotifStyle) -> Self {
        Self { controller, style }
    }

    /// Expects a config that passed `Config::validate`, as `Config::load` returns.
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        let style = MotifStyle::from_config(&config.style, config.animation.partition_count)?;
        let controller = AnimationController::from_config(config.node_count(), &config.animation);
        info!(
            nodes = config.node_count(),
            tick_ms = config.animation.tick_interval_ms,
            step = controller.step_size(),
            "surface ready"
        );
        Ok(Self::new(controller, style))
    }

    pub fn controller(&self) -> &AnimationController {
        &self.controller
    }

    /// The single "activate" input.
    pub fn on_activate(&mut self) -> bool {
        self.controller.on_input()
    }

    /// Left click activates; other buttons are ignored.
    pub fn on_mouse_press(&mut self, button: MouseButton) -> bool {
        button == MouseButton::Left && self.on_activate()
    }

    /// A tap activates when the finger goes down, not when it moves or lifts.
    pub fn on_touch(&mut self, phase: TouchPhase) -> bool {
        phase == TouchPhase::Started && self.on_activate()
    }

    pub fn update(&mut self, dt: Duration) -> ControllerEvent {
        self.controller.update(dt)
    }

    pub fn repaint(&self, draw: &Draw, bounds: Rect) {
        draw.background().color(self.style.background);
        let mut painter = MotifPainter::new(draw, &self.style, bounds);
        self.controller.draw(&mut painter);
    }
}
