// src/animation/progress.rs
//
// Per-node normalized progress.
// A node toggles between two stable positions, 0.0 and 1.0. A step moves
// `scale` from one to the other a little each tick.

use super::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    /// No step in flight, nothing changed
    Idle,
    /// Step advanced but has not reached its boundary yet
    InFlight,
    /// Step reached its boundary and committed. Reported once per step.
    Completed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProgressState {
    scale: f32,
    prev_scale: f32,
    active: bool,
}

impl Default for ProgressState {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressState {
    pub fn new() -> Self {
        Self {
            scale: 0.0,
            prev_scale: 0.0,
            active: false,
        }
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn prev_scale(&self) -> f32 {
        self.prev_scale
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// The direction a step started from the committed position has to take.
    pub fn toggle_direction(&self) -> Direction {
        if self.prev_scale < 0.5 {
            Direction::Forward
        } else {
            Direction::Backward
        }
    }

    /// Starts a step heading `direction`. Returns false (and changes nothing)
    /// if a step is already in flight.
    pub fn begin_step(&mut self, direction: Direction) -> bool {
        if self.active {
            return false;
        }
        debug_assert_eq!(
            direction,
            self.toggle_direction(),
            "step from {} cannot head {:?}",
            self.prev_scale,
            direction
        );
        self.active = true;
        true
    }

    /// Moves `scale` by `step_size` toward the target position, committing
    /// once the distance travelled exceeds one unit.
    pub fn advance(&mut self, step_size: f32, direction: Direction) -> StepStatus {
        if !self.active {
            return StepStatus::Idle;
        }

        let sign = direction.sign();
        self.scale += step_size * sign;

        if (self.scale - self.prev_scale).abs() > 1.0 {
            self.scale = self.prev_scale + sign;
            self.prev_scale = self.scale;
            self.active = false;
            return StepStatus::Completed;
        }
        StepStatus::InFlight
    }
}

/// Progress of `part` past its band start, unclamped above.
pub fn max_scale(scale: f32, part: usize, parts: usize) -> f32 {
    (scale - part as f32 / parts as f32).max(0.0)
}

/// Local 0..1 progress of band `part` when 0..1 is split into `parts` equal
/// bands. Bands fill one after another as `scale` sweeps upward.
pub fn divide_scale(scale: f32, part: usize, parts: usize) -> f32 {
    debug_assert!(parts > 0, "partition count must be positive");
    let band = 1.0 / parts as f32;
    max_scale(scale, part, parts).min(band) * parts as f32
}
