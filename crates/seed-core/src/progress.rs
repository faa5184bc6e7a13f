//! Throughput and completion-time estimation.

use crate::plan::BatchPlan;
use std::time::Duration;

/// Elapsed time below which speed and ETA are reported as undefined
/// instead of being computed from a near-zero divisor.
const MIN_ELAPSED_SECS: f64 = 1e-3;

/// Statistics derived from one progress tick.
///
/// Produced fresh on every tick and never mutated. `speed` and
/// `eta_seconds` are `None` while the run is too young to estimate.
/// `eta_seconds` is truncated toward zero and may go negative near
/// completion when the observed speed fluctuates.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressSnapshot {
    /// 1-based number of the batch being loaded.
    pub batch_number: u64,
    /// Total batches in the run.
    pub batches_count: u64,
    /// Progress through the current batch, 0.0-1.0.
    pub batch_progress: f64,
    /// Progress through the whole run, 0.0-1.0.
    pub total_progress: f64,
    /// Records per second, truncated to an integer.
    pub speed: Option<u64>,
    /// Forecast seconds until completion.
    pub eta_seconds: Option<i64>,
}

/// Estimate run statistics from the plan and the current batch's
/// progress fraction, using the plan's own start time.
pub fn estimate(plan: &BatchPlan, batch_progress: f64) -> ProgressSnapshot {
    estimate_at(plan, batch_progress, plan.started_at.elapsed())
}

/// Estimate run statistics at an explicit elapsed time.
///
/// Total inserted counts every prior batch as fully loaded plus the
/// fraction of the current batch; speed is total inserted over elapsed
/// time, and the ETA is the forecast total duration minus what has
/// already elapsed.
pub fn estimate_at(plan: &BatchPlan, batch_progress: f64, elapsed: Duration) -> ProgressSnapshot {
    let batch_inserted = plan.batch_size as f64 * batch_progress;
    let total_inserted = (plan.batch_index * plan.batch_size) as f64 + batch_inserted;
    let total_progress = if plan.total_records == 0 {
        0.0
    } else {
        total_inserted / plan.total_records as f64
    };

    let elapsed_secs = elapsed.as_secs_f64();
    let (speed, eta_seconds) = if elapsed_secs < MIN_ELAPSED_SECS || total_inserted <= 0.0 {
        (None, None)
    } else {
        let speed = total_inserted / elapsed_secs;
        let forecast_total_secs = plan.total_records as f64 / speed;
        (
            Some(speed as u64),
            Some((forecast_total_secs - elapsed_secs).trunc() as i64),
        )
    };

    ProgressSnapshot {
        batch_number: plan.batch_index + 1,
        batches_count: plan.batches_count,
        batch_progress,
        total_progress,
        speed,
        eta_seconds,
    }
}
