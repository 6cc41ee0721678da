pub mod edges;
pub mod frame;

use anyhow::{Context, Result};
use maze_grid::BoundaryMatrix;
use std::path::Path;

pub use edges::sample_edges;
pub use frame::BinaryFrame;

/// Where the boundary evidence for a maze comes from.
#[derive(Debug, Clone)]
pub enum MazeSource {
    /// Binarized, square, grid-aligned PNG (black = wall).
    Png(String),
    /// JSON `BoundaryMatrix`, e.g. dumped from an earlier scan.
    EdgeFile(String),
}

impl MazeSource {
    pub fn from_path(path: &str) -> Self {
        let is_json = Path::new(path)
            .extension()
            .map(|e| e.eq_ignore_ascii_case("json"))
            .unwrap_or(false);
        if is_json { Self::EdgeFile(path.to_string()) } else { Self::Png(path.to_string()) }
    }

    pub fn load(&self, width: usize, height: usize) -> Result<BoundaryMatrix> {
        match self {
            MazeSource::Png(p) => {
                let frame = BinaryFrame::load_png(p)?;
                sample_edges(&frame, width, height)
            }
            MazeSource::EdgeFile(p) => load_edge_file(p),
        }
    }
}

pub fn load_edge_file(path: &str) -> Result<BoundaryMatrix> {
    let s = std::fs::read_to_string(path).with_context(|| format!("read edge file {}", path))?;
    serde_json::from_str(&s).with_context(|| format!("parse edge file {}", path))
}
