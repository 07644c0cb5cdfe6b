// src/controllers/sequence_controller.rs
//
// AnimationController turns clicks into steps.
// A click starts the scheduler only if the cursor was idle; each tick advances
// the cursor; the scheduler stops when the step commits.

use std::time::Duration;

use tracing::debug;

use crate::animation::{
    Direction, NodeChain, NodePainter, SequenceCursor, StepStatus, TickScheduler,
};
use crate::config::AnimationConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    Idle,
    Running,
}

/// What happened during one `update`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerEvent {
    Idle,
    Ticked,
    StepCompleted { node: usize, direction: Direction },
}

pub struct AnimationController {
    scheduler: TickScheduler,
    cursor: SequenceCursor,
    step_size: f32,
}

impl AnimationController {
    pub fn new(node_count: usize, tick_interval: Duration, step_size: f32) -> Self {
        Self {
            scheduler: TickScheduler::new(tick_interval),
            cursor: SequenceCursor::new(NodeChain::new(node_count)),
            step_size,
        }
    }

    pub fn from_config(node_count: usize, config: &AnimationConfig) -> Self {
        Self::new(
            node_count,
            Duration::from_millis(config.tick_interval_ms),
            config.step_size(),
        )
    }

    pub fn state(&self) -> ControllerState {
        if self.scheduler.is_running() {
            ControllerState::Running
        } else {
            ControllerState::Idle
        }
    }

    pub fn cursor(&self) -> &SequenceCursor {
        &self.cursor
    }

    pub fn step_size(&self) -> f32 {
        self.step_size
    }

    /// Handles one activate event. Returns true if it started a step.
    pub fn on_input(&mut self) -> bool {
        if !self.cursor.begin_advance() {
            debug!(node = self.cursor.current(), "step in flight, input ignored");
            return false;
        }
        self.scheduler.start();
        debug!(
            node = self.cursor.current(),
            direction = ?self.cursor.direction(),
            "step started"
        );
        true
    }

    /// Feeds frame time to the scheduler and runs a tick if one is due.
    pub fn update(&mut self, dt: Duration) -> ControllerEvent {
        if !self.scheduler.poll(dt) {
            return ControllerEvent::Idle;
        }

        match self.cursor.advance(self.step_size) {
            StepStatus::Completed => {
                self.scheduler.stop();
                let event = ControllerEvent::StepCompleted {
                    node: self.cursor.current(),
                    direction: self.cursor.direction(),
                };
                debug!(?event, "step completed");
                event
            }
            StepStatus::InFlight => ControllerEvent::Ticked,
            StepStatus::Idle => {
                // scheduler running without a step in flight
                self.scheduler.stop();
                ControllerEvent::Idle
            }
        }
    }

    pub fn draw(&self, painter: &mut dyn NodePainter) {
        self.cursor.draw(painter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TICK: Duration = Duration::from_millis(20);

    fn controller() -> AnimationController {
        AnimationController::new(5, TICK, 0.01)
    }

    // Runs ticks until the current step commits, returning the completion event
    fn run_step(controller: &mut AnimationController) -> ControllerEvent {
        for _ in 0..1000 {
            let event = controller.update(TICK);
            if let ControllerEvent::StepCompleted { .. } = event {
                return event;
            }
            assert_eq!(event, ControllerEvent::Ticked);
        }
        panic!("step never completed");
    }

    #[test]
    fn test_starts_idle() {
        let mut controller = controller();
        assert_eq!(controller.state(), ControllerState::Idle);
        assert_eq!(controller.update(TICK), ControllerEvent::Idle);
        assert_eq!(controller.cursor().current(), 0);
    }

    #[test]
    fn test_input_starts_running() {
        let mut controller = controller();
        assert!(controller.on_input());
        assert_eq!(controller.state(), ControllerState::Running);

        // first tick is one period away
        assert_eq!(controller.update(Duration::from_millis(5)), ControllerEvent::Idle);
        assert_eq!(controller.update(Duration::from_millis(15)), ControllerEvent::Ticked);
    }

    #[test]
    fn test_input_while_running_is_ignored() {
        let mut controller = controller();
        controller.on_input();
        controller.update(TICK);
        let scale = controller.cursor().chain().node(0).progress().scale();

        assert!(!controller.on_input());
        assert_eq!(controller.state(), ControllerState::Running);
        assert_eq!(controller.cursor().chain().node(0).progress().scale(), scale);
    }

    #[test]
    fn test_completion_stops_scheduler() {
        let mut controller = controller();
        controller.on_input();
        run_step(&mut controller);

        assert_eq!(controller.state(), ControllerState::Idle);
        assert_eq!(controller.update(TICK), ControllerEvent::Idle);
    }

    #[test]
    fn test_six_input_trace() {
        let mut controller = controller();
        let expected = [
            (1, Direction::Forward),
            (2, Direction::Forward),
            (3, Direction::Forward),
            (4, Direction::Forward),
            (4, Direction::Backward),
            (3, Direction::Backward),
        ];

        for (input, (node, direction)) in expected.iter().enumerate() {
            assert!(controller.on_input(), "input {} was ignored", input + 1);
            let event = run_step(&mut controller);
            assert_eq!(
                event,
                ControllerEvent::StepCompleted {
                    node: *node,
                    direction: *direction
                },
                "after input {}",
                input + 1
            );
            assert_eq!(controller.cursor().current(), *node);
            assert_eq!(controller.cursor().direction(), *direction);
        }
    }

    #[test]
    fn test_draw_paints_cursor_node() {
        let mut controller = controller();
        controller.on_input();
        controller.update(TICK);

        let mut painted = Vec::new();
        let mut painter = |index: usize, scale: f32| painted.push((index, scale));
        controller.draw(&mut painter);
        assert_eq!(painted.len(), 1);
        assert_eq!(painted[0].0, 0);
        assert!((painted[0].1 - 0.01).abs() < 1e-6);
    }

    #[test]
    fn test_from_config_uses_step_size() {
        let config = AnimationConfig::default();
        let controller = AnimationController::from_config(5, &config);
        assert!((controller.step_size() - 0.01).abs() < 1e-6);
    }
}
