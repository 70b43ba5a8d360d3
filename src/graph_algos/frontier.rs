use crate::collections::FxIndexMap;
use super::{GraphNodeMap, NO_PARENT};

use std::{
    cmp::Ordering,
    collections::{BinaryHeap, VecDeque},
    hash::Hash,
};
use indexmap::map::Entry::Vacant;


/// Working set of node indices awaiting expansion
/// The order of `pop` is the only thing that separates BFS, DFS and greedy best-first
pub trait Frontier<P> {
    fn push(&mut self, index: usize, priority: P);
    fn pop(&mut self) -> Option<usize>;
}

/// First in, first out: breadth-first order, priority ignored
#[derive(Debug, Default)]
pub struct Fifo(VecDeque<usize>);

impl<P> Frontier<P> for Fifo {
    fn push(&mut self, index: usize, _priority: P) {
        self.0.push_back(index);
    }

    fn pop(&mut self) -> Option<usize> {
        self.0.pop_front()
    }
}

/// Last in, first out: depth-first order, priority ignored
#[derive(Debug, Default)]
pub struct Lifo(Vec<usize>);

impl<P> Frontier<P> for Lifo {
    fn push(&mut self, index: usize, _priority: P) {
        self.0.push(index);
    }

    fn pop(&mut self) -> Option<usize> {
        self.0.pop()
    }
}

/// Lowest priority first; equal priorities come out in insertion order
#[derive(Debug)]
pub struct BestFirst<P> {
    heap: BinaryHeap<Queued<P>>,
    pushed: usize,
}

impl<P: Ord> Default for BestFirst<P> {
    fn default() -> Self {
        Self {
            heap: BinaryHeap::new(),
            pushed: 0,
        }
    }
}

impl<P: Ord> Frontier<P> for BestFirst<P> {
    fn push(&mut self, index: usize, priority: P) {
        self.heap.push(Queued {
            index,
            priority,
            seq: self.pushed,
        });
        self.pushed += 1;
    }

    fn pop(&mut self) -> Option<usize> {
        self.heap.pop().map(|q| q.index)
    }
}

/// Heap entry
/// - binary heap pops the biggest, so the ordering is reversed
/// - `seq` breaks ties so equal priorities never reorder arbitrarily
#[derive(Debug)]
pub(crate) struct Queued<P> {
    pub(crate) index: usize,
    pub(crate) priority: P,
    pub(crate) seq: usize,
}

impl<P: Ord> Ord for Queued<P> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}
impl<P: Ord> PartialOrd for Queued<P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<P: Ord> PartialEq for Queued<P> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl<P: Ord> Eq for Queued<P> {}


/// Unweighted frontier search
///
/// Each node enters the frontier at most once: it is recorded in the map, with
/// its parent, at the moment it is first discovered, and that parent is final.
/// The cost stored per node is its hop depth along the recorded parent chain.
///
/// `visit` is called for every node popped, before the goal check.
/// Returns the map of discovered nodes and the index of the goal if it was popped.
pub fn explore<N, P, F, IT, NN, PR, G, V>(
    start: N,
    mut frontier: F,
    neighbors: NN,
    priority_fn: PR,
    goal_fn: G,
    mut visit: V,
) -> (GraphNodeMap<N, usize>, Option<usize>)
where
    N: Eq + Hash + Clone,
    F: Frontier<P>,
    NN: Fn(&N) -> IT, // returns iterator of neighbors
    IT: IntoIterator<Item = N>,
    PR: Fn(&N) -> P, // frontier key, ignored by Fifo/Lifo
    G: Fn(&N) -> bool, // node qualifier for goal
    V: FnMut(&N),
{
    let mut node_map: GraphNodeMap<N, usize> = FxIndexMap::default();

    let start_priority = priority_fn(&start);
    let start_index = node_map.insert_full(start, (NO_PARENT, 0)).0;
    frontier.push(start_index, start_priority);

    while let Some(index) = frontier.pop() {
        let Some((node, &(_, depth))) = node_map.get_index(index) else {
            continue;
        };
        let node = node.clone();

        visit(&node);

        if goal_fn(&node) {
            return (node_map, Some(index));
        }

        for neighbor in neighbors(&node) {
            // First discovery wins; already discovered nodes keep their parent
            if let Vacant(e) = node_map.entry(neighbor) {
                let priority = priority_fn(e.key());
                let neighbor_index = e.index();
                e.insert((index, depth + 1));
                frontier.push(neighbor_index, priority);
            }
        }
    }

    (node_map, None)
}
