use anyhow::{Context, Result};
use maze_proto::route::RoutePlan;
use std::time::{Duration, Instant};
use tracing::info;

use crate::{ArmConfig, WaypointSink};

#[derive(Debug, Clone)]
pub struct TraverseStatus {
    pub visited: usize,
    pub elapsed: Duration,
}

/// Walks the arm through the plan in order, pausing between moves. Stops at
/// the first move that fails.
pub async fn traverse<S: WaypointSink + ?Sized>(plan: &RoutePlan, arm: &mut S, cfg: &ArmConfig) -> Result<TraverseStatus> {
    anyhow::ensure!(!plan.is_empty(), "route plan has no waypoints");
    let started = Instant::now();

    if cfg.home_first {
        info!("arm: homing");
        arm.home().context("home arm")?;
    }

    let pause = Duration::from_millis(cfg.pause_ms);
    let n = plan.waypoints.len();
    for (i, wp) in plan.waypoints.iter().enumerate() {
        info!("arm: moving to {} ({}/{})", wp, i + 1, n);
        arm.move_to(wp).with_context(|| format!("move to {}", wp))?;
        if i + 1 < n {
            tokio::time::sleep(pause).await;
        }
    }

    Ok(TraverseStatus { visited: n, elapsed: started.elapsed() })
}
