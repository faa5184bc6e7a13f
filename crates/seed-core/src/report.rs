//! Progress output to the log sink.

use crate::progress::ProgressSnapshot;
use tracing::info;

/// Writes progress snapshots as multi-line status blocks.
///
/// Reporting is a side effect only: it cannot fail and never feeds back
/// into the pipeline. It is also safe to call from whatever context a
/// loader ticks on.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProgressReporter;

impl ProgressReporter {
    pub fn new() -> Self {
        Self
    }

    /// Emit one snapshot for the table currently being written.
    pub fn write_progress(&self, table: &str, stats: &ProgressSnapshot) {
        info!(
            "Writing {table}\n\
             Batch number: {}/{}\n\
             Batch progress: {:.2}%\n\
             Total progress: {:.2}%\n\
             Speed: {} items/s\n\
             End in: {}",
            stats.batch_number,
            stats.batches_count,
            stats.batch_progress * 100.0,
            stats.total_progress * 100.0,
            format_speed(stats.speed),
            format_eta(stats.eta_seconds),
        );
    }
}

fn format_speed(speed: Option<u64>) -> String {
    match speed {
        Some(speed) => speed.to_string(),
        None => "n/a".to_string(),
    }
}

/// Render a signed second count as `[-]HH:MM:SS`.
fn format_eta(eta_seconds: Option<i64>) -> String {
    let Some(seconds) = eta_seconds else {
        return "n/a".to_string();
    };

    let sign = if seconds < 0 { "-" } else { "" };
    let seconds = seconds.unsigned_abs();
    format!(
        "{sign}{:02}:{:02}:{:02}",
        seconds / 3600,
        (seconds % 3600) / 60,
        seconds % 60
    )
}
