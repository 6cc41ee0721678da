use anyhow::Result;
use tracing::info;

/// Anything that can put the arm over a saved position by name.
///
/// The servo driver and the saved-position store live behind this; the
/// maze side only knows waypoint ids.
pub trait WaypointSink: Send {
    fn home(&mut self) -> Result<()>;
    fn move_to(&mut self, waypoint: &str) -> Result<()>;
}

/// Logs moves instead of driving servos. Used when no arm is attached.
#[derive(Debug, Default, Clone)]
pub struct DryRunArm {
    pub homed: bool,
    pub visited: Vec<String>,
}

impl WaypointSink for DryRunArm {
    fn home(&mut self) -> Result<()> {
        info!("arm(dry-run): home");
        self.homed = true;
        Ok(())
    }

    fn move_to(&mut self, waypoint: &str) -> Result<()> {
        info!("arm(dry-run): move to {}", waypoint);
        self.visited.push(waypoint.to_string());
        Ok(())
    }
}
