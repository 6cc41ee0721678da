use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{Grid, GridError};

/// Evidence for one cell edge: either raw binarized pixels sampled along
/// the edge (0 = black) or a wall flag someone already decided on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EdgeSample {
    Wall(bool),
    Pixels(Vec<u8>),
}

impl EdgeSample {
    /// Majority vote over the pixels: a wall unless open pixels strictly
    /// outnumber black ones. An empty sample counts as a wall.
    pub fn is_wall(&self) -> bool {
        match self {
            EdgeSample::Wall(w) => *w,
            EdgeSample::Pixels(px) => {
                let black = px.iter().filter(|p| **p == 0).count();
                black >= px.len() - black
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellEdges {
    pub top: EdgeSample,
    pub bottom: EdgeSample,
    pub left: EdgeSample,
    pub right: EdgeSample,
}

/// Per-cell edge evidence for a whole maze, row-major.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundaryMatrix {
    pub width: usize,
    pub height: usize,
    pub cells: Vec<CellEdges>,
}

/// What to do when two neighbors disagree about the wall between them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Reconcile {
    /// Keep each cell's own reading.
    #[default]
    Independent,
    /// Wall if either side saw one.
    EitherSide,
    /// Wall only if both sides saw one.
    BothSides,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassifyStats {
    pub walls: usize,
    /// Interior edges where the two cells disagreed before reconciliation.
    pub disagreements: usize,
}

impl Grid {
    /// Sets every wall from edge evidence, then applies `policy` to interior
    /// edges. Outer edges are never touched by reconciliation.
    pub fn populate_from_boundary_matrix(
        &mut self,
        matrix: &BoundaryMatrix,
        policy: Reconcile,
    ) -> Result<ClassifyStats, GridError> {
        if matrix.width != self.width
            || matrix.height != self.height
            || matrix.cells.len() != self.width * self.height
        {
            return Err(GridError::ShapeMismatch {
                got_w: matrix.width,
                got_h: matrix.height,
                cells: matrix.cells.len(),
                want_w: self.width,
                want_h: self.height,
            });
        }

        for (cell, edges) in self.cells.iter_mut().zip(&matrix.cells) {
            cell.set_walls(
                edges.top.is_wall(),
                edges.bottom.is_wall(),
                edges.left.is_wall(),
                edges.right.is_wall(),
            );
        }

        let disagreements = self.reconcile(policy);
        if disagreements > 0 {
            warn!("classify: {} interior edges disagree (policy={:?})", disagreements, policy);
        }

        self.populated = true;
        self.solution = None;

        let walls = self.cells.iter().map(|c| c.wall_count()).sum();
        debug!("classify: {}x{} walls={}", self.width, self.height, walls);
        Ok(ClassifyStats { walls, disagreements })
    }

    fn reconcile(&mut self, policy: Reconcile) -> usize {
        let merge = |a: bool, b: bool| match policy {
            Reconcile::Independent => None,
            Reconcile::EitherSide => Some(a || b),
            Reconcile::BothSides => Some(a && b),
        };

        let mut disagreements = 0;
        for r in 0..self.height {
            for c in 0..self.width {
                let here = self.idx(r, c);
                if c + 1 < self.width {
                    let right = self.idx(r, c + 1);
                    let (a, b) = (self.cells[here].wall_right, self.cells[right].wall_left);
                    if a != b {
                        disagreements += 1;
                        if let Some(w) = merge(a, b) {
                            self.cells[here].wall_right = w;
                            self.cells[right].wall_left = w;
                        }
                    }
                }
                if r + 1 < self.height {
                    let below = self.idx(r + 1, c);
                    let (a, b) = (self.cells[here].wall_down, self.cells[below].wall_up);
                    if a != b {
                        disagreements += 1;
                        if let Some(w) = merge(a, b) {
                            self.cells[here].wall_down = w;
                            self.cells[below].wall_up = w;
                        }
                    }
                }
            }
        }
        disagreements
    }
}
