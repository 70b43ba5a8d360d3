//! Pathfinding over 4-connected grids with blocked cells.
//!
//! Four interchangeable strategies share one parent-map bookkeeping scheme and
//! one path reconstruction routine:
//!
//! | Strategy | Frontier | Shortest path |
//! |---|---|---|
//! | Breadth-first | FIFO queue | yes |
//! | Depth-first | LIFO stack | no |
//! | A* | min-heap on g + Manhattan distance | yes |
//! | Greedy best-first | min-heap on Manhattan distance | no |
//!
//! ```
//! use gridwalk::{Cell, Grid, Strategy};
//!
//! let grid: Grid = "...\n.#.\n...".parse().unwrap();
//! let path = Strategy::AStar
//!     .find_path(&grid, Cell::new(0, 0), Cell::new(2, 2), |_, _| {})
//!     .unwrap();
//! assert_eq!(path.len(), 5);
//! ```
//!
//! The generic machinery in [`graph_algos`] works on any hashable node type.

pub mod collections;
pub mod errors;
pub mod graph_algos;
pub mod grid;
pub mod search;

pub use errors::{GridError, SearchError};
pub use grid::{Cell, Grid, Layout, Marker};
pub use search::{
    a_star, breadth_first, depth_first, greedy_best_first, replay_path, validate_endpoints,
    SearchReport, StepStatus, Strategy,
};
