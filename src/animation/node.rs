// src/animation/node.rs
//
// AnimationNode and the fixed chain that owns them.
// Links are indices into the chain's Vec, so the chain is acyclic by construction.

use super::{Direction, NodePainter, ProgressState, StepStatus};

#[derive(Debug, Clone)]
pub struct AnimationNode {
    index: usize,
    prev: Option<usize>,
    next: Option<usize>,
    progress: ProgressState,
}

impl AnimationNode {
    fn new(index: usize, len: usize) -> Self {
        Self {
            index,
            prev: index.checked_sub(1),
            next: (index + 1 < len).then_some(index + 1),
            progress: ProgressState::new(),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn progress(&self) -> &ProgressState {
        &self.progress
    }

    pub fn draw(&self, painter: &mut dyn NodePainter) {
        painter.paint(self.index, self.progress.scale());
    }

    pub fn update(&mut self, step_size: f32, direction: Direction) -> StepStatus {
        self.progress.advance(step_size, direction)
    }

    pub fn begin_step(&mut self, direction: Direction) -> bool {
        self.progress.begin_step(direction)
    }

    /// The adjacent node in `direction`, or None at that end of the chain.
    pub fn neighbor(&self, direction: Direction) -> Option<usize> {
        match direction {
            Direction::Backward => self.prev,
            Direction::Forward => self.next,
        }
    }
}

#[derive(Debug, Clone)]
pub struct NodeChain {
    nodes: Vec<AnimationNode>,
}

impl NodeChain {
    /// Builds `len` linked nodes. A chain must hold at least one node.
    pub fn new(len: usize) -> Self {
        assert!(len > 0, "a node chain needs at least one node");
        let nodes = (0..len).map(|i| AnimationNode::new(i, len)).collect();
        Self { nodes }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, index: usize) -> &AnimationNode {
        &self.nodes[index]
    }

    pub fn node_mut(&mut self, index: usize) -> &mut AnimationNode {
        &mut self.nodes[index]
    }

    pub fn iter(&self) -> impl Iterator<Item = &AnimationNode> {
        self.nodes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_links() {
        let chain = NodeChain::new(5);
        assert_eq!(chain.len(), 5);

        let first = chain.node(0);
        assert_eq!(first.neighbor(Direction::Backward), None);
        assert_eq!(first.neighbor(Direction::Forward), Some(1));

        let last = chain.node(4);
        assert_eq!(last.neighbor(Direction::Forward), None);
        assert_eq!(last.neighbor(Direction::Backward), Some(3));

        for node in chain.iter().skip(1).take(3) {
            let i = node.index();
            assert_eq!(node.neighbor(Direction::Backward), Some(i - 1));
            assert_eq!(node.neighbor(Direction::Forward), Some(i + 1));
        }
    }

    #[test]
    fn test_walk_covers_chain_once() {
        // following next links from node 0 visits every node exactly once
        let chain = NodeChain::new(5);
        let mut visited = vec![0];
        let mut current = 0;
        while let Some(next) = chain.node(current).neighbor(Direction::Forward) {
            visited.push(next);
            current = next;
        }
        assert_eq!(visited, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_single_node_chain_has_no_neighbors() {
        let chain = NodeChain::new(1);
        let node = chain.node(0);
        assert_eq!(node.neighbor(Direction::Forward), None);
        assert_eq!(node.neighbor(Direction::Backward), None);
    }

    #[test]
    #[should_panic]
    fn test_empty_chain_rejected() {
        NodeChain::new(0);
    }

    #[test]
    fn test_draw_reports_index_and_scale() {
        let mut chain = NodeChain::new(3);
        let node = chain.node_mut(2);
        node.begin_step(Direction::Forward);
        node.update(0.25, Direction::Forward);

        let mut painted = Vec::new();
        let mut painter = |index: usize, scale: f32| painted.push((index, scale));
        chain.node(2).draw(&mut painter);
        assert_eq!(painted, vec![(2, 0.25)]);
    }
}
