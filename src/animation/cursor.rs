// src/animation/cursor.rs
//
// SequenceCursor walks the chain one step at a time and bounces at either end.
// It is the only owner of the travel direction; nodes are told which way to go.

use super::{Direction, NodeChain, NodePainter, StepStatus};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct SequenceCursor {
    chain: NodeChain,
    current: usize,
    direction: Direction,
}

impl SequenceCursor {
    pub fn new(chain: NodeChain) -> Self {
        Self {
            chain,
            current: 0,
            direction: Direction::Forward,
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn chain(&self) -> &NodeChain {
        &self.chain
    }

    pub fn is_stepping(&self) -> bool {
        self.chain.node(self.current).progress().is_active()
    }

    pub fn draw(&self, painter: &mut dyn NodePainter) {
        self.chain.node(self.current).draw(painter);
    }

    /// Starts a step on the current node. False if one is already running.
    pub fn begin_advance(&mut self) -> bool {
        let direction = self.direction;
        self.chain.node_mut(self.current).begin_step(direction)
    }

    /// Advances the current node. When its step completes the cursor moves on,
    /// or stays and turns around if there is nothing further that way.
    pub fn advance(&mut self, step_size: f32) -> StepStatus {
        let direction = self.direction;
        let node = self.chain.node_mut(self.current);
        let status = node.update(step_size, direction);

        if status == StepStatus::Completed {
            match node.neighbor(direction) {
                Some(next) => self.current = next,
                None => {
                    self.direction = direction.reversed();
                    debug!(
                        node = self.current,
                        direction = ?self.direction,
                        "reached end of chain, reversing"
                    );
                }
            }
        }
        status
    }
}
