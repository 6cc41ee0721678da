use maze_grid::{Grid, Pos};

/// Depth-first search from (row, col) toward `exit`.
///
/// `path` is both the answer being built and the visited set: a cell whose
/// id is already on it is a dead end. Neighbors are tried up, down, left,
/// right and the first branch that reaches the exit wins. On failure `path`
/// is left exactly as it was passed in.
pub(crate) fn search(grid: &Grid, row: isize, col: isize, exit: Pos, path: &mut Vec<String>) -> bool {
    if !grid.in_bounds(row, col) {
        return false;
    }
    let (r, c) = (row as usize, col as usize);
    let Some(cell) = grid.cell(r, c) else { return false; };
    let id = cell.waypoint_id();
    if path.iter().any(|p| p == id) {
        return false;
    }

    path.push(id.to_string());
    if (r, c) == exit {
        return true;
    }

    let moves = [
        (!cell.wall_up, -1, 0),
        (!cell.wall_down, 1, 0),
        (!cell.wall_left, 0, -1),
        (!cell.wall_right, 0, 1),
    ];
    for (open, dr, dc) in moves {
        if open && search(grid, row + dr, col + dc, exit, path) {
            return true;
        }
    }

    path.pop();
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_grid(w: usize, h: usize) -> Grid {
        let mut g = Grid::new(w, h).unwrap();
        for r in 0..h {
            for c in 0..w {
                g.cell_mut(r, c).unwrap().set_walls(false, false, false, false);
            }
        }
        g.mark_populated();
        g
    }

    /// 3x3 grid, fully walled except the listed cells' (up, down, left, right).
    fn carved(open: &[(usize, usize, [bool; 4])]) -> Grid {
        let mut g = Grid::new(3, 3).unwrap();
        for &(r, c, [up, down, left, right]) in open {
            g.cell_mut(r, c).unwrap().set_walls(!up, !down, !left, !right);
        }
        g.mark_populated();
        g
    }

    fn route(g: &Grid, from: Pos, exit: Pos) -> Vec<String> {
        let mut path = Vec::new();
        assert!(search(g, from.0 as isize, from.1 as isize, exit, &mut path));
        path
    }

    #[test]
    fn out_of_bounds_fails_without_mutation() {
        let g = open_grid(2, 2);
        let mut path = vec!["sq9".to_string()];
        assert!(!search(&g, -1, 0, (1, 1), &mut path));
        assert!(!search(&g, 0, 2, (1, 1), &mut path));
        assert_eq!(path, ["sq9"]);
    }

    #[test]
    fn revisit_is_a_dead_end() {
        let g = open_grid(2, 2);
        let mut path = vec!["sq1".to_string()];
        assert!(!search(&g, 0, 0, (1, 1), &mut path));
        assert_eq!(path, ["sq1"]);
    }

    #[test]
    fn start_on_exit() {
        let g = open_grid(3, 1);
        let mut path = Vec::new();
        assert!(search(&g, 0, 1, (0, 1), &mut path));
        assert_eq!(path, ["sq2"]);
    }

    #[test]
    fn priority_order_prefers_down_before_right() {
        // fully open 2x2: from sq1 "up" leaves the grid, "down" reaches sq3
        let g = open_grid(2, 2);
        let mut path = Vec::new();
        assert!(search(&g, 0, 0, (1, 1), &mut path));
        assert_eq!(path, ["sq1", "sq3", "sq4"]);
    }

    #[test]
    fn backtracks_out_of_dead_end() {
        // sq1 -> down into sq4 (dead end), then right along row 0 to sq3 -> sq6
        let mut g = Grid::new(3, 2).unwrap();
        g.cell_mut(0, 0).unwrap().set_walls(false, false, true, false);
        g.cell_mut(1, 0).unwrap().set_walls(false, true, true, true);
        g.cell_mut(0, 1).unwrap().set_walls(true, true, false, false);
        g.cell_mut(0, 2).unwrap().set_walls(true, false, false, true);
        g.cell_mut(1, 2).unwrap().set_walls(false, false, true, true);
        g.mark_populated();
        let mut path = Vec::new();
        assert!(search(&g, 0, 0, (1, 2), &mut path));
        assert_eq!(path, ["sq1", "sq2", "sq3", "sq6"]);
    }

    #[test]
    fn up_is_tried_before_down() {
        // two loops from sq5 to sq6: over the top row or under the bottom row
        let g = carved(&[
            (1, 1, [true, true, false, false]),
            (0, 1, [false, true, false, true]),
            (0, 2, [false, true, true, false]),
            (1, 2, [true, true, false, false]),
            (2, 1, [true, false, false, true]),
            (2, 2, [true, false, true, false]),
        ]);
        assert_eq!(route(&g, (1, 1), (1, 2)), ["sq5", "sq2", "sq3", "sq6"]);
    }

    #[test]
    fn left_is_tried_before_right() {
        // sq5 reaches sq8 around either side
        let g = carved(&[
            (1, 1, [false, false, true, true]),
            (1, 0, [false, true, false, true]),
            (2, 0, [true, false, false, true]),
            (2, 1, [false, false, true, true]),
            (1, 2, [false, true, true, false]),
            (2, 2, [true, false, true, false]),
        ]);
        assert_eq!(route(&g, (1, 1), (2, 1)), ["sq5", "sq4", "sq7", "sq8"]);
    }

    #[test]
    fn up_is_tried_before_left() {
        // left is the short way to sq7, up is the long way round
        let g = carved(&[
            (1, 1, [true, false, true, false]),
            (0, 1, [false, true, true, false]),
            (0, 0, [false, true, false, true]),
            (1, 0, [true, true, false, true]),
            (2, 0, [true, false, false, false]),
        ]);
        assert_eq!(route(&g, (1, 1), (2, 0)), ["sq5", "sq2", "sq1", "sq4", "sq7"]);
    }

    #[test]
    fn down_is_tried_before_left() {
        let g = carved(&[
            (1, 1, [false, true, true, false]),
            (2, 1, [true, false, true, false]),
            (2, 0, [false, false, false, true]),
            (1, 0, [false, true, false, true]),
        ]);
        assert_eq!(route(&g, (1, 1), (2, 0)), ["sq5", "sq8", "sq7"]);
    }
}
