//! A bounded LIFO stack with removal at an arbitrary slot.

use crate::node::Node;

/// A fixed-capacity stack of [`Node`]s.
///
/// Besides the usual LIFO operations it supports indexed peeking and
/// [`remove_at`](Stack::remove_at), which Prim's maze generator uses to
/// discard a wall candidate chosen at a random position.
#[derive(Debug)]
pub struct Stack {
    nodes: Vec<Node>,
    capacity: usize,
}

impl Stack {
    /// Create a stack that can hold up to `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Number of nodes currently held.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the stack holds no nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Push a node. Returns `false` and leaves the stack unchanged when
    /// full.
    pub fn push(&mut self, node: Node) -> bool {
        if self.nodes.len() >= self.capacity {
            return false;
        }
        self.nodes.push(node);
        true
    }

    /// Pop the most recently pushed node, or `None` if empty.
    #[inline]
    pub fn pop(&mut self) -> Option<Node> {
        self.nodes.pop()
    }

    /// Read the node at internal position `slot` (0 = bottom).
    #[inline]
    pub fn get(&self, slot: usize) -> Node {
        self.nodes[slot]
    }

    /// Remove the node at internal position `slot`, preserving the relative
    /// order of the rest: drain into a scratch stack skipping the slot, then
    /// refill.
    pub fn remove_at(&mut self, slot: usize) {
        debug_assert!(slot < self.nodes.len(), "remove_at slot {slot} out of range");
        let mut scratch: Vec<Node> = Vec::with_capacity(self.nodes.len());
        while let Some(node) = self.nodes.pop() {
            // After the pop, len() is the slot the node occupied.
            if self.nodes.len() != slot {
                scratch.push(node);
            }
        }
        while let Some(node) = scratch.pop() {
            self.nodes.push(node);
        }
    }
}
