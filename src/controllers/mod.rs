pub mod sequence_controller;

pub use sequence_controller::{AnimationController, ControllerEvent, ControllerState};
