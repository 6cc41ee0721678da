/// One maze square. A `true` wall blocks movement across that edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub wall_up: bool,
    pub wall_down: bool,
    pub wall_left: bool,
    pub wall_right: bool,
    waypoint_id: String,
}

impl Cell {
    pub(crate) fn new(waypoint_id: String) -> Self {
        Self {
            wall_up: true,
            wall_down: true,
            wall_left: true,
            wall_right: true,
            waypoint_id,
        }
    }

    /// Key of the saved arm position that sits over this square.
    pub fn waypoint_id(&self) -> &str {
        &self.waypoint_id
    }

    pub fn set_walls(&mut self, up: bool, down: bool, left: bool, right: bool) {
        self.wall_up = up;
        self.wall_down = down;
        self.wall_left = left;
        self.wall_right = right;
    }

    pub fn wall_count(&self) -> usize {
        [self.wall_up, self.wall_down, self.wall_left, self.wall_right]
            .iter()
            .filter(|w| **w)
            .count()
    }

    pub(crate) fn close_all(&mut self) {
        self.set_walls(true, true, true, true);
    }
}
