use std::hash::Hash;

use super::{GraphNodeMap, NO_PARENT};

/// Walk parent links back from `goal_index` to the start
/// Returns the ordered path as a vector of nodes from start to goal,
/// empty if `goal_index` is not in the map
pub fn shortest_path<N, C>(node_map: &GraphNodeMap<N, C>, goal_index: usize) -> Vec<N>
where
    N: Clone,
{
    let mut path = Vec::new();
    let mut current_index = goal_index;

    // Trace back from goal to start; a well-formed map has no cycles,
    // so no chain is longer than the map itself
    while current_index != NO_PARENT && path.len() <= node_map.len() {
        match node_map.get_index(current_index) {
            Some((node, &(parent_index, _))) => {
                path.push(node.clone());
                current_index = parent_index;
            }
            None => break,
        }
    }

    // The path is in reverse order, so reverse it
    path.reverse();
    path
}

/// Path from the start to `goal`, empty if `goal` was never reached
pub fn reconstruct_path<N, C>(node_map: &GraphNodeMap<N, C>, goal: &N) -> Vec<N>
where
    N: Eq + Hash + Clone,
{
    match node_map.get_index_of(goal) {
        Some(goal_index) => shortest_path(node_map, goal_index),
        None => Vec::new(),
    }
}
