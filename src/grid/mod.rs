use std::fmt;
use std::str::FromStr;

use crate::errors::GridError;


/// Orthogonal moves as (row, column) offsets: down, up, right, left
pub const DIRECTIONS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];


/// Grid coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {

    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Manhattan distance, the heuristic for A* and greedy best-first
    pub fn manhattan(&self, other: &Cell) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// Cell shifted by (d_row, d_col), None when it would fall below zero
    pub fn offset(&self, d_row: isize, d_col: isize) -> Option<Cell> {
        Some(Cell {
            row: self.row.checked_add_signed(d_row)?,
            col: self.col.checked_add_signed(d_col)?,
        })
    }

    /// True if `other` is exactly one orthogonal step away
    pub fn is_adjacent(&self, other: &Cell) -> bool {
        self.manhattan(other) == 1
    }
}

impl From<(usize, usize)> for Cell {
    fn from((row, col): (usize, usize)) -> Self {
        Cell::new(row, col)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}


/// Content of a single grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Marker {
    #[default]
    Free,
    Blocked,
}

impl Marker {

    fn from_char(c: char) -> Option<Self> {
        match c {
            '.' | ' ' | 'S' | 'E' => Some(Marker::Free),
            '#' => Some(Marker::Blocked),
            _ => None,
        }
    }

    fn as_char(self) -> char {
        match self {
            Marker::Free => '.',
            Marker::Blocked => '#',
        }
    }
}


/// Rectangular obstacle map, stored row-major
/// Searches only read it; edits happen between searches
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Marker>,
}

impl Grid {

    /// All-free grid
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![Marker::Free; rows * cols],
        }
    }

    /// Build from nested rows; every row must be as wide as the first
    pub fn from_markers(rows: Vec<Vec<Marker>>) -> Result<Self, GridError> {
        let expected = rows.first().map(Vec::len).ok_or(GridError::EmptyLayout)?;
        if expected == 0 {
            return Err(GridError::EmptyLayout);
        }

        let mut cells = Vec::with_capacity(rows.len() * expected);
        for (row, markers) in rows.iter().enumerate() {
            if markers.len() != expected {
                return Err(GridError::RaggedRows { row, expected, found: markers.len() });
            }
            cells.extend_from_slice(markers);
        }

        Ok(Self { rows: rows.len(), cols: expected, cells })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// 0 <= row < rows and 0 <= col < cols
    pub fn contains(&self, cell: &Cell) -> bool {
        cell.row < self.rows && cell.col < self.cols
    }

    fn index(&self, cell: &Cell) -> Option<usize> {
        self.contains(cell).then(|| cell.row * self.cols + cell.col)
    }

    /// Marker at `cell`, None if out of bounds
    pub fn marker(&self, cell: &Cell) -> Option<Marker> {
        self.index(cell).map(|i| self.cells[i])
    }

    /// Out-of-bounds cells are reported as not blocked; check `contains` first
    pub fn is_blocked(&self, cell: &Cell) -> bool {
        self.marker(cell) == Some(Marker::Blocked)
    }

    /// In bounds and free
    pub fn is_open(&self, cell: &Cell) -> bool {
        self.marker(cell) == Some(Marker::Free)
    }

    pub fn set(&mut self, cell: Cell, marker: Marker) -> Result<(), GridError> {
        let i = self.index(&cell).ok_or(GridError::OutOfBounds {
            cell,
            rows: self.rows,
            cols: self.cols,
        })?;
        self.cells[i] = marker;
        Ok(())
    }

    pub fn block(&mut self, cell: Cell) -> Result<(), GridError> {
        self.set(cell, Marker::Blocked)
    }

    /// Reset every cell to free
    pub fn clear(&mut self) {
        self.cells.fill(Marker::Free);
    }

    /// In-bounds, unblocked orthogonal neighbors of `cell`, at most four
    pub fn neighbors(&self, cell: &Cell) -> impl Iterator<Item = Cell> + '_ {
        let cell = *cell;
        DIRECTIONS
            .into_iter()
            .filter_map(move |(d_row, d_col)| cell.offset(d_row, d_col))
            .filter(|next| self.is_open(next))
    }

    /// Draw the grid with `path` overlaid as `*` and the endpoints as `S`/`E`
    pub fn render(&self, path: &[Cell], start: Option<Cell>, end: Option<Cell>) -> String {
        let mut canvas: Vec<Vec<char>> = (0..self.rows)
            .map(|row| {
                self.cells[row * self.cols..(row + 1) * self.cols]
                    .iter()
                    .map(|m| m.as_char())
                    .collect()
            })
            .collect();

        for cell in path.iter().filter(|c| self.contains(c)) {
            canvas[cell.row][cell.col] = '*';
        }
        for (endpoint, c) in [(start, 'S'), (end, 'E')] {
            if let Some(cell) = endpoint.filter(|p| self.contains(p)) {
                canvas[cell.row][cell.col] = c;
            }
        }

        let mut out = String::with_capacity(self.rows * (self.cols + 1));
        for line in canvas {
            out.extend(line);
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&[], None, None))
    }
}

impl FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(s.parse::<Layout>()?.grid)
    }
}


/// A grid together with the endpoints marked in its text form
///
/// `#` is blocked, `.` (or a space) is free, `S` and `E` are free cells that
/// also mark start and end. Blank lines are skipped, trailing whitespace is not
/// trimmed since a space is a free cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub grid: Grid,
    pub start: Option<Cell>,
    pub end: Option<Cell>,
}

impl FromStr for Layout {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rows = Vec::new();
        let mut start = None;
        let mut end = None;

        for line in s.lines().map(|l| l.trim_end_matches('\r')).filter(|l| !l.trim().is_empty()) {
            let row = rows.len();
            let mut markers = Vec::with_capacity(line.len());
            for (col, c) in line.chars().enumerate() {
                let marker = Marker::from_char(c).ok_or(GridError::UnknownMarker { row, col, marker: c })?;
                let slot = match c {
                    'S' => Some(&mut start),
                    'E' => Some(&mut end),
                    _ => None,
                };
                if let Some(slot) = slot {
                    if slot.replace(Cell::new(row, col)).is_some() {
                        return Err(GridError::DuplicateEndpoint(c));
                    }
                }
                markers.push(marker);
            }
            rows.push(markers);
        }

        let grid = Grid::from_markers(rows)?;
        Ok(Layout { grid, start, end })
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neighbors_in_open_interior() {
        let grid = Grid::new(3, 3);
        let mut n: Vec<Cell> = grid.neighbors(&Cell::new(1, 1)).collect();
        n.sort();
        assert_eq!(n, vec![Cell::new(0, 1), Cell::new(1, 0), Cell::new(1, 2), Cell::new(2, 1)]);
    }

    #[test]
    fn test_neighbors_respect_bounds_and_walls() {
        let mut grid = Grid::new(2, 3);
        grid.block(Cell::new(0, 1)).unwrap();

        // Corner: up and left fall off the grid, right is a wall
        let n: Vec<Cell> = grid.neighbors(&Cell::new(0, 0)).collect();
        assert_eq!(n, vec![Cell::new(1, 0)]);

        // Bottom-right corner
        let mut n: Vec<Cell> = grid.neighbors(&Cell::new(1, 2)).collect();
        n.sort();
        assert_eq!(n, vec![Cell::new(0, 2), Cell::new(1, 1)]);
    }

    #[test]
    fn test_manhattan_and_adjacency() {
        let a = Cell::new(0, 0);
        let b = Cell::new(4, 3);
        assert_eq!(a.manhattan(&b), 7);
        assert_eq!(b.manhattan(&a), 7);
        assert!(Cell::new(2, 2).is_adjacent(&Cell::new(2, 3)));
        assert!(!Cell::new(2, 2).is_adjacent(&Cell::new(3, 3)));
        assert!(!a.is_adjacent(&a));
    }

    #[test]
    fn test_offset_below_zero() {
        assert_eq!(Cell::new(0, 4).offset(-1, 0), None);
        assert_eq!(Cell::new(0, 4).offset(1, -1), Some(Cell::new(1, 3)));
    }

    #[test]
    fn test_from_markers_rejects_ragged_rows() {
        let rows = vec![vec![Marker::Free; 3], vec![Marker::Free; 2]];
        assert_eq!(
            Grid::from_markers(rows),
            Err(GridError::RaggedRows { row: 1, expected: 3, found: 2 })
        );
        assert_eq!(Grid::from_markers(vec![]), Err(GridError::EmptyLayout));
    }

    #[test]
    fn test_set_out_of_bounds() {
        let mut grid = Grid::new(2, 2);
        let err = grid.block(Cell::new(2, 0)).unwrap_err();
        assert!(matches!(err, GridError::OutOfBounds { rows: 2, cols: 2, .. }));
    }

    #[test]
    fn test_clear_frees_everything() {
        let mut grid: Grid = "##\n#.".parse().unwrap();
        grid.clear();
        assert_eq!(grid, Grid::new(2, 2));
    }

    #[test]
    fn test_parse_layout() {
        let layout: Layout = "S.#\n..#\n#.E\n".parse().unwrap();
        assert_eq!(layout.start, Some(Cell::new(0, 0)));
        assert_eq!(layout.end, Some(Cell::new(2, 2)));
        assert_eq!(layout.grid.rows(), 3);
        assert_eq!(layout.grid.cols(), 3);
        assert!(layout.grid.is_blocked(&Cell::new(0, 2)));
        assert!(layout.grid.is_open(&Cell::new(2, 2)));
        assert!(!layout.grid.is_open(&Cell::new(3, 0)));
    }

    #[test]
    fn test_parse_layout_errors() {
        assert_eq!(
            "S.x".parse::<Layout>(),
            Err(GridError::UnknownMarker { row: 0, col: 2, marker: 'x' })
        );
        assert_eq!("S.S".parse::<Layout>(), Err(GridError::DuplicateEndpoint('S')));
        assert_eq!("...\n..".parse::<Layout>(), Err(GridError::RaggedRows { row: 1, expected: 3, found: 2 }));
        assert_eq!("\n\n".parse::<Layout>(), Err(GridError::EmptyLayout));
    }

    #[test]
    fn test_render_overlays_path() {
        let layout: Layout = "S..\n.#.\n..E".parse().unwrap();
        let path = [
            Cell::new(0, 0),
            Cell::new(0, 1),
            Cell::new(0, 2),
            Cell::new(1, 2),
            Cell::new(2, 2),
        ];
        let drawn = layout.grid.render(&path, layout.start, layout.end);
        assert_eq!(drawn, "S**\n.#*\n..E\n");
        assert_eq!(layout.grid.to_string(), "...\n.#.\n...\n");
    }
}
