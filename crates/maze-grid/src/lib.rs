pub mod cell;
pub mod classify;
pub mod doctor;
pub mod generate;
mod render;

use thiserror::Error;

pub use cell::Cell;
pub use classify::{BoundaryMatrix, CellEdges, ClassifyStats, EdgeSample, Reconcile};
pub use generate::Carve;

/// (row, col), row 0 is the top of the maze.
pub type Pos = (usize, usize);

/// Outer edge of the maze an opening is searched on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Top,
    Bottom,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Top => f.write_str("top"),
            Side::Bottom => f.write_str("bottom"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("invalid grid dimension {width}x{height}")]
    InvalidDimension { width: usize, height: usize },
    #[error("no maze loaded")]
    NotPopulated,
    #[error("no opening on the {side} row")]
    NoOpening { side: Side },
    #[error("boundary matrix is {got_w}x{got_h} ({cells} cells), grid is {want_w}x{want_h}")]
    ShapeMismatch {
        got_w: usize,
        got_h: usize,
        cells: usize,
        want_w: usize,
        want_h: usize,
    },
}

/// A `width` x `height` maze, stored row-major.
///
/// Waypoint ids ("sq1", "sq2", ...) are handed out at construction and never
/// change, so a solution stays meaningful to the arm layer even if the walls
/// are repopulated later.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    populated: bool,
    solution: Option<Vec<String>>,
}

impl Grid {
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::InvalidDimension { width, height });
        }
        let cells = (1..=width * height)
            .map(|n| Cell::new(format!("sq{}", n)))
            .collect();
        Ok(Self { width, height, cells, populated: false, solution: None })
    }

    pub fn width(&self) -> usize { self.width }

    pub fn height(&self) -> usize { self.height }

    pub fn is_populated(&self) -> bool { self.populated }

    /// Flags the walls as describing a real maze. Callers that set walls by
    /// hand use this; generation and classification set it themselves.
    pub fn mark_populated(&mut self) {
        self.populated = true;
    }

    pub fn solution(&self) -> Option<&[String]> {
        self.solution.as_deref()
    }

    pub fn set_solution(&mut self, solution: Option<Vec<String>>) {
        self.solution = solution;
    }

    pub fn in_bounds(&self, row: isize, col: isize) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.height && (col as usize) < self.width
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        if row < self.height && col < self.width {
            self.cells.get(self.idx(row, col))
        } else {
            None
        }
    }

    pub fn cell_mut(&mut self, row: usize, col: usize) -> Option<&mut Cell> {
        if row < self.height && col < self.width {
            let i = self.idx(row, col);
            self.cells.get_mut(i)
        } else {
            None
        }
    }

    /// Callers keep `row < height`.
    pub(crate) fn row(&self, row: usize) -> &[Cell] {
        let start = row * self.width;
        &self.cells[start..start + self.width]
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn waypoint_of(&self, (row, col): Pos) -> Option<&str> {
        self.cell(row, col).map(|c| c.waypoint_id())
    }

    /// Position of a waypoint id, if it belongs to this grid.
    pub fn position_of(&self, waypoint_id: &str) -> Option<Pos> {
        self.cells
            .iter()
            .position(|c| c.waypoint_id() == waypoint_id)
            .map(|i| (i / self.width, i % self.width))
    }

    /// Column of the first cell on row 0 that is open to the outside above.
    pub fn find_entrance(&self) -> Result<Pos, GridError> {
        if !self.populated {
            return Err(GridError::NotPopulated);
        }
        self.row(0)
            .iter()
            .position(|c| !c.wall_up)
            .map(|col| (0, col))
            .ok_or(GridError::NoOpening { side: Side::Top })
    }

    /// Column of the first cell on the last row that is open below.
    pub fn find_exit(&self) -> Result<Pos, GridError> {
        if !self.populated {
            return Err(GridError::NotPopulated);
        }
        let last = self.height - 1;
        self.row(last)
            .iter()
            .position(|c| !c.wall_down)
            .map(|col| (last, col))
            .ok_or(GridError::NoOpening { side: Side::Bottom })
    }

    /// Diagnostic box drawing of the walls. Same as `to_string()`.
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Puts every wall back and forgets any loaded maze. Waypoint ids stay.
    pub fn reset(&mut self) {
        for c in &mut self.cells {
            c.close_all();
        }
        self.populated = false;
        self.solution = None;
    }

    fn idx(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }
}
