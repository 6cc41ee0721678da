mod dfs;

use maze_grid::{Grid, GridError, Pos, Side};
use tracing::{info, warn};

/// Outcome of one solve attempt. None of these are errors for the caller;
/// an arm operator re-prompts or picks another maze on anything but `Solved`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveReport {
    Solved(Vec<String>),
    NotPopulated,
    NoOpening(Side),
    NoSolutionFound,
}

impl SolveReport {
    pub fn is_solved(&self) -> bool {
        matches!(self, SolveReport::Solved(_))
    }

    pub fn path(&self) -> &[String] {
        match self {
            SolveReport::Solved(p) => p,
            _ => &[],
        }
    }
}

impl std::fmt::Display for SolveReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SolveReport::Solved(p) => write!(f, "solution found: {}", p.join(" -> ")),
            SolveReport::NotPopulated => f.write_str("no maze to solve"),
            SolveReport::NoOpening(side) => write!(f, "no solution found: no opening on the {} row", side),
            SolveReport::NoSolutionFound => f.write_str("no solution found"),
        }
    }
}

/// One path of waypoint ids from `from` to `to`, or `None` if the walls
/// don't connect them. Not necessarily the shortest.
pub fn find_path(grid: &Grid, from: Pos, to: Pos) -> Option<Vec<String>> {
    let mut path = Vec::new();
    if dfs::search(grid, from.0 as isize, from.1 as isize, to, &mut path) {
        Some(path)
    } else {
        None
    }
}

/// Solves the grid from its top entrance to its bottom exit and stores the
/// result in `grid.solution()`.
///
/// An unpopulated grid is left alone. Every other outcome overwrites the
/// stored solution, with `None` when there is no route.
pub fn solve_map(grid: &mut Grid) -> SolveReport {
    if !grid.is_populated() {
        warn!("solve: no maze to solve");
        return SolveReport::NotPopulated;
    }

    let ends = grid.find_entrance().and_then(|e| grid.find_exit().map(|x| (e, x)));
    let report = match ends {
        Ok((entrance, exit)) => {
            info!("solve: entrance={:?} exit={:?}", entrance, exit);
            match find_path(grid, entrance, exit) {
                Some(path) => SolveReport::Solved(path),
                None => SolveReport::NoSolutionFound,
            }
        }
        Err(GridError::NoOpening { side }) => SolveReport::NoOpening(side),
        Err(GridError::NotPopulated) => return SolveReport::NotPopulated,
        Err(e) => {
            warn!("solve: {}", e);
            SolveReport::NoSolutionFound
        }
    };

    match &report {
        SolveReport::Solved(path) => {
            info!("solve: {}", report);
            grid.set_solution(Some(path.clone()));
        }
        _ => {
            warn!("solve: {}", report);
            grid.set_solution(None);
        }
    }
    report
}
