pub mod sink;
pub mod traverse;

use serde::Deserialize;

pub use sink::{DryRunArm, WaypointSink};
pub use traverse::{traverse, TraverseStatus};

#[derive(Debug, Clone, Deserialize)]
pub struct ArmConfig {
    /// Home the arm before the first waypoint.
    #[serde(default = "default_home_first")]
    pub home_first: bool,

    /// Pause between consecutive waypoints, lets the servos settle.
    #[serde(default = "default_pause_ms")]
    pub pause_ms: u64,
}

fn default_home_first() -> bool { true }

fn default_pause_ms() -> u64 { 1000 }

impl Default for ArmConfig {
    fn default() -> Self {
        Self { home_first: default_home_first(), pause_ms: default_pause_ms() }
    }
}
