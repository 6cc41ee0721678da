use anyhow::Result;
use maze_grid::{BoundaryMatrix, CellEdges, EdgeSample};
use tracing::{debug, warn};

use crate::BinaryFrame;

/// Cuts the frame into `width` x `height` equal tiles and samples each
/// tile's outermost row/column on all four sides. Leftover pixels past the
/// last full tile are ignored.
pub fn sample_edges(frame: &BinaryFrame, width: usize, height: usize) -> Result<BoundaryMatrix> {
    anyhow::ensure!(width > 0 && height > 0, "grid must be at least 1x1");
    let cw = frame.width as usize / width;
    let ch = frame.height as usize / height;
    anyhow::ensure!(
        cw > 0 && ch > 0,
        "frame {}x{} too small for a {}x{} grid", frame.width, frame.height, width, height
    );
    if frame.width != frame.height {
        warn!("edges: frame is not square ({}x{}), cells will be stretched", frame.width, frame.height);
    }

    let mut cells = Vec::with_capacity(width * height);
    for r in 0..height {
        for c in 0..width {
            let (x0, y0) = ((c * cw) as u32, (r * ch) as u32);
            let (x1, y1) = (x0 + cw as u32 - 1, y0 + ch as u32 - 1);
            let row = |y: u32| (x0..=x1).map(|x| frame.at(x, y)).collect::<Vec<u8>>();
            let col = |x: u32| (y0..=y1).map(|y| frame.at(x, y)).collect::<Vec<u8>>();
            cells.push(CellEdges {
                top: EdgeSample::Pixels(row(y0)),
                bottom: EdgeSample::Pixels(row(y1)),
                left: EdgeSample::Pixels(col(x0)),
                right: EdgeSample::Pixels(col(x1)),
            });
        }
    }

    debug!("edges: sampled {}x{} cells of {}x{} px", width, height, cw, ch);
    Ok(BoundaryMatrix { width, height, cells })
}
