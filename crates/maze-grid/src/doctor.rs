use anyhow::Result;

/// Largest grid the arm has saved positions for. The solver recurses once
/// per path step, so this also bounds its stack depth.
pub const MAX_SIDE: usize = 16;

pub fn check_dimensions(width: usize, height: usize) -> Result<()> {
    anyhow::ensure!(width >= 1 && height >= 1, "grid.width and grid.height must be >= 1");
    anyhow::ensure!(width <= MAX_SIDE && height <= MAX_SIDE, "grid larger than {}x{}", MAX_SIDE, MAX_SIDE);
    Ok(())
}
