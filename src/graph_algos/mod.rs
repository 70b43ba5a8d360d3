pub mod a_star;
pub mod frontier;
mod shortest_path;

pub use shortest_path::{reconstruct_path, shortest_path};

use crate::collections::FxIndexMap;

/// Parent map shared by every search
/// N: Node - space on a graph
/// C: Cost of reaching the node from the start
/// The tuple contains (parent_index, cost) where:
/// - parent_index is the index of the parent node in the map, `NO_PARENT` for the start node
/// - cost is the best known cost to reach this node from the start
pub type GraphNodeMap<N, C> = FxIndexMap<N, (usize, C)>;

/// Parent index of the start node
pub const NO_PARENT: usize = usize::MAX;
