//! Node arena and priority queue.
//!
//! Predecessor links are arena indices, so a search tree costs one `Vec`
//! and reconstructing a path is a walk over indices.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::grid::Position;

/// A discovered node. Owned by the [`Frontier`] arena.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SearchNode {
    pub(crate) pos: Position,
    pub(crate) g: u64,
    pub(crate) parent: Option<usize>,
}

/// Heap entry ordered by `(key, seq)` ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FrontierEntry {
    key: u64,
    seq: u64,
    node: usize,
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: BinaryHeap is a max-heap, we pop the smallest key and,
        // among equal keys, the earliest insertion.
        other
            .key
            .cmp(&self.key)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Debug, Default)]
pub(crate) struct Frontier {
    nodes: Vec<SearchNode>,
    heap: BinaryHeap<FrontierEntry>,
    next_seq: u64,
}

impl Frontier {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Allocates a node and enqueues it with priority `key`.
    pub(crate) fn push(
        &mut self,
        pos: Position,
        g: u64,
        key: u64,
        parent: Option<usize>,
    ) -> usize {
        let node = self.nodes.len();
        self.nodes.push(SearchNode { pos, g, parent });
        self.heap.push(FrontierEntry {
            key,
            seq: self.next_seq,
            node,
        });
        self.next_seq += 1;
        node
    }

    /// Removes the minimum-priority entry and returns its node index.
    pub(crate) fn pop(&mut self) -> Option<usize> {
        self.heap.pop().map(|e| e.node)
    }

    pub(crate) fn node(&self, idx: usize) -> &SearchNode {
        &self.nodes[idx]
    }

    /// Nodes behind every queued entry, superseded ones included.
    pub(crate) fn queued(&self) -> impl Iterator<Item = &SearchNode> + '_ {
        self.heap.iter().map(|e| &self.nodes[e.node])
    }

    /// Follows predecessor links from `idx` back to the root and returns the
    /// positions root-first.
    pub(crate) fn trace(&self, idx: usize) -> Vec<Position> {
        let mut path = Vec::new();
        let mut cur = Some(idx);
        while let Some(i) = cur {
            let node = &self.nodes[i];
            path.push(node.pos);
            cur = node.parent;
        }
        path.reverse();
        path
    }
}
