pub mod cursor;
pub mod node;
pub mod progress;
pub mod scheduler;

pub use cursor::SequenceCursor;
pub use node::{AnimationNode, NodeChain};
pub use progress::{divide_scale, max_scale, ProgressState, StepStatus};
pub use scheduler::TickScheduler;

/// Travel direction along the chain, and along a node's 0..1 progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    pub fn sign(self) -> f32 {
        match self {
            Direction::Forward => 1.0,
            Direction::Backward => -1.0,
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        }
    }
}

// The rendering side of a node: gets the node's palette index and its scale.
pub trait NodePainter {
    fn paint(&mut self, index: usize, scale: f32);
}

impl<F: FnMut(usize, f32)> NodePainter for F {
    fn paint(&mut self, index: usize, scale: f32) {
        self(index, scale)
    }
}
