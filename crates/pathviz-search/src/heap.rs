//! A bounded binary min-heap keyed by [`Node::distance`].
//!
//! Membership and priority updates use a linear scan: O(n) per call, an
//! accepted tradeoff at the 2500-cell grid bound.

use crate::node::Node;

/// A fixed-capacity binary min-heap of [`Node`]s ordered by `distance`.
///
/// `nodes[0..len]` is always a valid min-heap. There is no duplicate guard:
/// callers must not insert a cell index that is already present (the
/// searches guarantee this with their visited tables).
#[derive(Debug)]
pub struct MinHeap {
    nodes: Vec<Node>,
    capacity: usize,
}

impl MinHeap {
    /// Create a heap that can hold up to `capacity` nodes.
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

    /// Whether the heap holds no nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Insert a node and restore the heap order.
    ///
    /// # Panics
    ///
    /// Panics when the heap is full. Callers insert at most one node per
    /// grid cell and size the heap to the cell count, so this is a violated
    /// invariant rather than a runtime condition.
    pub fn insert(&mut self, node: Node) {
        assert!(
            self.nodes.len() < self.capacity,
            "min-heap over capacity ({})",
            self.capacity,
        );
        self.nodes.push(node);
        self.sift_up(self.nodes.len() - 1);
    }

    /// Remove and return the minimum-distance node, or `None` if empty.
    pub fn extract_min(&mut self) -> Option<Node> {
        if self.nodes.is_empty() {
            return None;
        }
        // Move the last element to the root, then sift it down.
        let root = self.nodes.swap_remove(0);
        if !self.nodes.is_empty() {
            self.sift_down(0);
        }
        Some(root)
    }

    /// Lower the distance of the node holding cell `index`, restoring heap
    /// order from its slot.
    ///
    /// The index must be present; callers [`find`](MinHeap::find) first.
    pub fn decrease_priority(&mut self, index: usize, distance: i32) {
        let mut found = None;
        for (slot, node) in self.nodes.iter_mut().enumerate() {
            if node.index == index {
                node.distance = distance;
                found = Some(slot);
            }
        }
        debug_assert!(found.is_some(), "decrease_priority on absent index {index}");
        if let Some(slot) = found {
            self.sift_up(slot);
        }
    }

    /// Whether a node for cell `index` is present (linear scan).
    pub fn find(&self, index: usize) -> bool {
        self.nodes.iter().any(|n| n.index == index)
    }

    fn sift_up(&mut self, mut slot: usize) {
        while slot != 0 {
            let parent = (slot - 1) / 2;
            if self.nodes[parent].distance <= self.nodes[slot].distance {
                break;
            }
            self.nodes.swap(parent, slot);
            slot = parent;
        }
    }

    fn sift_down(&mut self, mut slot: usize) {
        loop {
            let left = 2 * slot + 1;
            let right = 2 * slot + 2;
            let mut smallest = slot;
            if left < self.nodes.len() && self.nodes[left].distance < self.nodes[smallest].distance
            {
                smallest = left;
            }
            if right < self.nodes.len()
                && self.nodes[right].distance < self.nodes[smallest].distance
            {
                smallest = right;
            }
            if smallest == slot {
                break;
            }
            self.nodes.swap(slot, smallest);
            slot = smallest;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::NO_PARENT;

    fn node(index: usize, distance: i32) -> Node {
        Node::new(index, NO_PARENT, distance)
    }

    #[test]
    fn extract_min_is_sorted() {
        let mut heap = MinHeap::with_capacity(16);
        for (i, d) in [9, 3, 7, 1, 8, 2, 6, 0, 5, 4].into_iter().enumerate() {
            heap.insert(node(i, d));
        }
        let mut out = Vec::new();
        while let Some(n) = heap.extract_min() {
            out.push(n.distance);
        }
        assert_eq!(out, vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn interleaved_inserts_and_extracts() {
        // Alternate inserts and extracts; every extract must return the
        // current minimum over the live set.
        let mut heap = MinHeap::with_capacity(16);
        let mut live: Vec<i32> = Vec::new();
        let distances = [5, 12, 3, 3, 9, 1, 14, 7, 2, 11, 6];
        for (i, d) in distances.into_iter().enumerate() {
            heap.insert(node(100 + i, d));
            live.push(d);
            if i % 2 == 1 {
                let got = heap.extract_min().unwrap().distance;
                live.sort_unstable();
                assert_eq!(got, live.remove(0));
            }
        }
        while let Some(n) = heap.extract_min() {
            live.sort_unstable();
            assert_eq!(n.distance, live.remove(0));
        }
        assert!(live.is_empty());
    }

    #[test]
    fn decrease_priority_reorders() {
        let mut heap = MinHeap::with_capacity(8);
        heap.insert(node(0, 10));
        heap.insert(node(1, 20));
        heap.insert(node(2, 30));
        assert!(heap.find(2));

        heap.decrease_priority(2, 5);
        assert!(heap.find(2));
        let first = heap.extract_min().unwrap();
        assert_eq!(first.index, 2);
        assert_eq!(first.distance, 5);
        assert_eq!(heap.extract_min().unwrap().index, 0);
        assert_eq!(heap.extract_min().unwrap().index, 1);
        assert!(heap.extract_min().is_none());
    }

    #[test]
    fn find_absent() {
        let mut heap = MinHeap::with_capacity(4);
        assert!(!heap.find(0));
        heap.insert(node(3, 1));
        assert!(heap.find(3));
        assert!(!heap.find(4));
    }

    #[test]
    #[should_panic]
    fn insert_past_capacity_panics() {
        let mut heap = MinHeap::with_capacity(2);
        heap.insert(node(0, 1));
        heap.insert(node(1, 2));
        heap.insert(node(2, 3));
    }
}
