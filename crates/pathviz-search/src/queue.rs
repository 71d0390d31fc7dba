//! A bounded FIFO queue with monotonic cursors.

use crate::node::Node;

/// A fixed-capacity queue of [`Node`]s.
///
/// The front cursor only ever advances and slots are never reused, so total
/// lifetime pushes are bounded by the capacity. That is acceptable for the
/// searches because each cell is enqueued at most once per run.
#[derive(Debug)]
pub struct Queue {
    nodes: Vec<Node>,
    front: usize,
    capacity: usize,
}

impl Queue {
    /// Create a queue that can accept up to `capacity` pushes over its
    /// lifetime.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            front: 0,
            capacity,
        }
    }

    /// Number of nodes currently queued.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len() - self.front
    }

    /// Whether the queue holds no nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.front == self.nodes.len()
    }

    /// Push a node at the rear. Returns `false` and leaves the queue
    /// unchanged once the lifetime capacity is spent.
    pub fn push(&mut self, node: Node) -> bool {
        if self.nodes.len() >= self.capacity {
            return false;
        }
        self.nodes.push(node);
        true
    }

    /// Pop the oldest node, or `None` if empty.
    pub fn pop(&mut self) -> Option<Node> {
        if self.is_empty() {
            return None;
        }
        let node = self.nodes[self.front];
        self.front += 1;
        Some(node)
    }
}
