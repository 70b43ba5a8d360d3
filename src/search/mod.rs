//! The four grid strategies.
//!
//! Every entry point validates its endpoints first and fails fast with a
//! [`SearchError`] if either one is out of bounds or blocked. An unreachable
//! end is not an error: the path comes back empty.

use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

use log::{debug, trace};

use crate::errors::SearchError;
use crate::graph_algos::a_star::AStar;
use crate::graph_algos::frontier::{explore, BestFirst, Fifo, Lifo};
use crate::graph_algos::reconstruct_path;
use crate::grid::{Cell, Grid};


/// What the observer is being told about a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepStatus {
    /// Popped from the frontier for expansion
    Visiting,
    /// Part of the final path, see [`replay_path`]
    OnPath,
}

impl StepStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            StepStatus::Visiting => "visiting",
            StepStatus::OnPath => "path",
        }
    }
}


#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    BreadthFirst,
    DepthFirst,
    AStar,
    /// Greedy best-first, a.k.a. hill climbing
    GreedyBestFirst,
}

impl Strategy {

    pub const ALL: [Strategy; 4] = [
        Strategy::BreadthFirst,
        Strategy::DepthFirst,
        Strategy::AStar,
        Strategy::GreedyBestFirst,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Strategy::BreadthFirst => "BFS",
            Strategy::DepthFirst => "DFS",
            Strategy::AStar => "A*",
            Strategy::GreedyBestFirst => "Hill Climbing",
        }
    }

    /// True for strategies whose paths are always shortest
    pub fn is_optimal(&self) -> bool {
        matches!(self, Strategy::BreadthFirst | Strategy::AStar)
    }

    /// Path from `start` to `end` inclusive, empty if `end` cannot be reached
    ///
    /// `observer` is called with [`StepStatus::Visiting`] once per cell expanded,
    /// in expansion order.
    pub fn find_path<O>(&self, grid: &Grid, start: Cell, end: Cell, mut observer: O) -> Result<Vec<Cell>, SearchError>
    where
        O: FnMut(Cell, StepStatus),
    {
        validate_endpoints(grid, start, end)?;

        let neighbors = |cell: &Cell| grid.neighbors(cell).collect::<Vec<_>>();
        let heuristic = |cell: &Cell| cell.manhattan(&end);
        let goal = |cell: &Cell| *cell == end;
        let visit = |cell: &Cell| {
            trace!("{} visiting {}", self.name(), cell);
            observer(*cell, StepStatus::Visiting);
        };

        let path = match self {
            Strategy::BreadthFirst => {
                let (node_map, _) = explore(start, Fifo::default(), neighbors, |_| (), goal, visit);
                reconstruct_path(&node_map, &end)
            }
            Strategy::DepthFirst => {
                let (node_map, _) = explore(start, Lifo::default(), neighbors, |_| (), goal, visit);
                reconstruct_path(&node_map, &end)
            }
            Strategy::GreedyBestFirst => {
                let (node_map, _) = explore(start, BestFirst::default(), neighbors, heuristic, goal, visit);
                reconstruct_path(&node_map, &end)
            }
            Strategy::AStar => {
                // Uniform grid: every step costs one
                let weighted = |cell: &Cell| {
                    grid.neighbors(cell).map(|n| (n, 1usize)).collect::<Vec<_>>()
                };
                let (node_map, _) = AStar.build_graph(start, weighted, heuristic, goal, visit);
                reconstruct_path(&node_map, &end)
            }
        };

        debug!("{} from {} to {}: {} cells", self.name(), start, end, path.len());
        Ok(path)
    }

    /// Run a search and time it
    pub fn run<O>(&self, grid: &Grid, start: Cell, end: Cell, mut observer: O) -> Result<SearchReport, SearchError>
    where
        O: FnMut(Cell, StepStatus),
    {
        let mut expanded = 0;
        let started = Instant::now();
        let path = self.find_path(grid, start, end, |cell, status| {
            expanded += 1;
            observer(cell, status);
        })?;
        let elapsed = started.elapsed();

        debug!("{} expanded {} cells in {:.2?}", self.name(), expanded, elapsed);
        Ok(SearchReport {
            strategy: *self,
            path,
            expanded,
            elapsed,
        })
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = SearchError;

    /// Accepts the full names and the single-key shortcuts b, d, a, h
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "b" | "bfs" | "breadth-first" => Ok(Strategy::BreadthFirst),
            "d" | "dfs" | "depth-first" => Ok(Strategy::DepthFirst),
            "a" | "a*" | "astar" | "a-star" => Ok(Strategy::AStar),
            "h" | "greedy" | "best-first" | "hill-climbing" => Ok(Strategy::GreedyBestFirst),
            _ => Err(SearchError::UnknownStrategy(s.to_string())),
        }
    }
}


/// Outcome of [`Strategy::run`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport {
    pub strategy: Strategy,
    pub path: Vec<Cell>,
    /// Cells popped for expansion
    pub expanded: usize,
    pub elapsed: Duration,
}

impl SearchReport {

    pub fn found(&self) -> bool {
        !self.path.is_empty()
    }

    /// Number of moves, one less than the number of cells
    pub fn moves(&self) -> Option<usize> {
        self.path.len().checked_sub(1)
    }
}

impl fmt::Display for SearchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.moves() {
            Some(moves) => write!(
                f,
                "{}: {} moves, {} cells expanded, {:.4}s",
                self.strategy,
                moves,
                self.expanded,
                self.elapsed.as_secs_f64()
            ),
            None => write!(
                f,
                "{}: no path, {} cells expanded, {:.4}s",
                self.strategy,
                self.expanded,
                self.elapsed.as_secs_f64()
            ),
        }
    }
}


/// Both endpoints must be in bounds and free
pub fn validate_endpoints(grid: &Grid, start: Cell, end: Cell) -> Result<(), SearchError> {
    for cell in [start, end] {
        if !grid.contains(&cell) {
            return Err(SearchError::OutOfBounds {
                cell,
                rows: grid.rows(),
                cols: grid.cols(),
            });
        }
        if grid.is_blocked(&cell) {
            return Err(SearchError::Blocked(cell));
        }
    }
    Ok(())
}

/// Report every cell of `path` to the observer as [`StepStatus::OnPath`]
pub fn replay_path<O>(path: &[Cell], mut observer: O)
where
    O: FnMut(Cell, StepStatus),
{
    for cell in path {
        observer(*cell, StepStatus::OnPath);
    }
}

/// Shortest path by hop count, FIFO frontier
pub fn breadth_first<O>(grid: &Grid, start: Cell, end: Cell, observer: O) -> Result<Vec<Cell>, SearchError>
where
    O: FnMut(Cell, StepStatus),
{
    Strategy::BreadthFirst.find_path(grid, start, end, observer)
}

/// Some path, not necessarily shortest, LIFO frontier
pub fn depth_first<O>(grid: &Grid, start: Cell, end: Cell, observer: O) -> Result<Vec<Cell>, SearchError>
where
    O: FnMut(Cell, StepStatus),
{
    Strategy::DepthFirst.find_path(grid, start, end, observer)
}

/// Shortest path, frontier ordered by g + Manhattan distance to `end`
pub fn a_star<O>(grid: &Grid, start: Cell, end: Cell, observer: O) -> Result<Vec<Cell>, SearchError>
where
    O: FnMut(Cell, StepStatus),
{
    Strategy::AStar.find_path(grid, start, end, observer)
}

/// Fast, not necessarily shortest; frontier ordered by Manhattan distance to `end` alone
pub fn greedy_best_first<O>(grid: &Grid, start: Cell, end: Cell, observer: O) -> Result<Vec<Cell>, SearchError>
where
    O: FnMut(Cell, StepStatus),
{
    Strategy::GreedyBestFirst.find_path(grid, start, end, observer)
}
