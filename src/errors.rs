use thiserror::Error;

use crate::grid::Cell;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRows { row: usize, expected: usize, found: usize },
    #[error("layout contains no cells")]
    EmptyLayout,
    #[error("unknown marker {marker:?} at row {row}, column {col}")]
    UnknownMarker { row: usize, col: usize, marker: char },
    #[error("endpoint marker {0:?} appears more than once")]
    DuplicateEndpoint(char),
    #[error("cell {cell} lies outside a {rows}x{cols} grid")]
    OutOfBounds { cell: Cell, rows: usize, cols: usize },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SearchError {
    #[error("endpoint {cell} lies outside a {rows}x{cols} grid")]
    OutOfBounds { cell: Cell, rows: usize, cols: usize },
    #[error("endpoint {0} is blocked")]
    Blocked(Cell),
    #[error("unknown strategy {0:?}")]
    UnknownStrategy(String),
    #[error(transparent)]
    Grid(#[from] GridError),
}
