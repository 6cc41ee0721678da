use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::{Grid, Pos};

/// Summary of one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carve {
    pub entry: Pos,
    pub exit: Pos,
    /// Cells entered by the walk, entry included.
    pub visited: usize,
    pub reached_exit: bool,
}

impl Grid {
    /// Same as [`Grid::generate_random_maze`] with a `StdRng` seeded from `seed`.
    pub fn generate_seeded(&mut self, seed: u64) -> Carve {
        let mut rng = StdRng::seed_from_u64(seed);
        self.generate_random_maze(&mut rng)
    }

    /// Carves a maze with a randomized depth-first walk from a random entry
    /// on row 0. The walk stops the moment it steps into the exit cell, so
    /// cells it never reached keep all four walls.
    ///
    /// Any previous maze and solution are discarded first.
    pub fn generate_random_maze<R: Rng>(&mut self, rng: &mut R) -> Carve {
        self.reset();
        let (w, h) = (self.width(), self.height());
        let entry = (0, rng.gen_range(0..w));
        let exit = (h - 1, rng.gen_range(0..w));

        if let Some(c) = self.cell_mut(entry.0, entry.1) { c.wall_up = false; }
        if let Some(c) = self.cell_mut(exit.0, exit.1) { c.wall_down = false; }

        let mut visited = vec![false; w * h];
        visited[entry.0 * w + entry.1] = true;
        let mut stack = vec![entry];
        let mut count = 1usize;
        let mut reached_exit = entry == exit;

        while !reached_exit {
            let Some(&here) = stack.last() else { break; };
            let open: Vec<Pos> = self
                .neighbors(here)
                .into_iter()
                .filter(|&(r, c)| !visited[r * w + c])
                .collect();

            match open.choose(rng) {
                Some(&next) => {
                    self.carve_between(here, next);
                    visited[next.0 * w + next.1] = true;
                    stack.push(next);
                    count += 1;
                    reached_exit = next == exit;
                }
                None => { stack.pop(); }
            }
        }

        self.mark_populated();
        debug!("generate: entry={:?} exit={:?} visited={} reached_exit={}", entry, exit, count, reached_exit);
        Carve { entry, exit, visited: count, reached_exit }
    }

    /// In-grid neighbors in up, down, left, right order.
    pub(crate) fn neighbors(&self, (r, c): Pos) -> Vec<Pos> {
        let mut out = Vec::with_capacity(4);
        if r > 0 { out.push((r - 1, c)); }
        if r + 1 < self.height() { out.push((r + 1, c)); }
        if c > 0 { out.push((r, c - 1)); }
        if c + 1 < self.width() { out.push((r, c + 1)); }
        out
    }

    /// Opens the shared edge on both sides. Non-adjacent pairs are ignored.
    pub(crate) fn carve_between(&mut self, a: Pos, b: Pos) {
        let (ia, ib) = (self.idx(a.0, a.1), self.idx(b.0, b.1));
        if b.0 + 1 == a.0 && b.1 == a.1 {
            self.cells[ia].wall_up = false;
            self.cells[ib].wall_down = false;
        } else if b.0 == a.0 + 1 && b.1 == a.1 {
            self.cells[ia].wall_down = false;
            self.cells[ib].wall_up = false;
        } else if b.0 == a.0 && b.1 + 1 == a.1 {
            self.cells[ia].wall_left = false;
            self.cells[ib].wall_right = false;
        } else if b.0 == a.0 && b.1 == a.1 + 1 {
            self.cells[ia].wall_right = false;
            self.cells[ib].wall_left = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    fn reachable(g: &Grid, from: Pos) -> Vec<bool> {
        let w = g.width();
        let mut seen = vec![false; w * g.height()];
        let mut q = VecDeque::from([from]);
        seen[from.0 * w + from.1] = true;
        while let Some((r, c)) = q.pop_front() {
            let cell = g.cell(r, c).unwrap();
            let mut next = Vec::new();
            if !cell.wall_up && r > 0 { next.push((r - 1, c)); }
            if !cell.wall_down && r + 1 < g.height() { next.push((r + 1, c)); }
            if !cell.wall_left && c > 0 { next.push((r, c - 1)); }
            if !cell.wall_right && c + 1 < w { next.push((r, c + 1)); }
            for (nr, nc) in next {
                if !seen[nr * w + nc] {
                    seen[nr * w + nc] = true;
                    q.push_back((nr, nc));
                }
            }
        }
        seen
    }

    #[test]
    fn same_seed_same_walls() {
        let mut a = Grid::new(4, 4).unwrap();
        let mut b = Grid::new(4, 4).unwrap();
        let ca = a.generate_seeded(42);
        let cb = b.generate_seeded(42);
        assert_eq!(ca, cb);
        assert_eq!(a, b);
    }

    #[test]
    fn shared_walls_agree() {
        for seed in 0..20 {
            let mut g = Grid::new(5, 4).unwrap();
            g.generate_seeded(seed);
            for r in 0..g.height() {
                for c in 0..g.width() {
                    let here = g.cell(r, c).unwrap();
                    if let Some(right) = g.cell(r, c + 1) {
                        assert_eq!(here.wall_right, right.wall_left, "seed {} at ({},{})", seed, r, c);
                    }
                    if let Some(below) = g.cell(r + 1, c) {
                        assert_eq!(here.wall_down, below.wall_up, "seed {} at ({},{})", seed, r, c);
                    }
                }
            }
        }
    }

    #[test]
    fn untouched_cells_keep_four_walls() {
        for seed in 0..20 {
            let mut g = Grid::new(6, 6).unwrap();
            let carve = g.generate_seeded(seed);
            assert!(carve.reached_exit);
            let seen = reachable(&g, carve.entry);
            assert_eq!(seen.iter().filter(|s| **s).count(), carve.visited);
            for (i, cell) in g.cells().iter().enumerate() {
                if !seen[i] {
                    assert_eq!(cell.wall_count(), 4, "seed {} cell {}", seed, cell.waypoint_id());
                }
            }
            assert!(seen[carve.exit.0 * g.width() + carve.exit.1]);
        }
    }

    #[test]
    fn openings_match_carve() {
        let mut g = Grid::new(4, 4).unwrap();
        let carve = g.generate_seeded(7);
        assert!(g.is_populated());
        assert_eq!(g.find_entrance(), Ok(carve.entry));
        assert_eq!(g.find_exit(), Ok(carve.exit));
    }

    #[test]
    fn single_cell_maze() {
        let mut g = Grid::new(1, 1).unwrap();
        let carve = g.generate_seeded(3);
        assert_eq!(carve.entry, carve.exit);
        assert_eq!(carve.visited, 1);
        let c = g.cell(0, 0).unwrap();
        assert!(!c.wall_up && !c.wall_down && c.wall_left && c.wall_right);
    }

    #[test]
    fn regenerate_clears_old_solution() {
        let mut g = Grid::new(3, 3).unwrap();
        g.generate_seeded(1);
        g.set_solution(Some(vec!["sq1".into()]));
        g.generate_seeded(2);
        assert_eq!(g.solution(), None);
    }

    #[test]
    fn carve_ignores_non_adjacent() {
        let mut g = Grid::new(3, 3).unwrap();
        g.carve_between((0, 0), (1, 1));
        assert!(g.cells().iter().all(|c| c.wall_count() == 4));
        g.carve_between((1, 1), (0, 1));
        assert!(!g.cell(1, 1).unwrap().wall_up);
        assert!(!g.cell(0, 1).unwrap().wall_down);
    }
}
