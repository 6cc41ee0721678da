use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MazeOrigin {
    Generated,
    Scanned,
}

/// What the arm layer gets: saved-position names to visit in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutePlan {
    pub ts_unix_ms: i64,
    pub grid_width: usize,
    pub grid_height: usize,
    pub origin: MazeOrigin,
    // generated mazes only
    pub seed: Option<u64>,
    pub waypoints: Vec<String>,
}

impl RoutePlan {
    pub fn new(grid_width: usize, grid_height: usize, origin: MazeOrigin, seed: Option<u64>, waypoints: Vec<String>) -> Self {
        Self {
            ts_unix_ms: (time::OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000) as i64,
            grid_width,
            grid_height,
            origin,
            seed,
            waypoints,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }
}
