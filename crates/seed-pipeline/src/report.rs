//! Run report types.

use crate::config::{InsertStrategy, RunConfig};
use crate::metrics::RunMetrics;

/// Terminal (and transient) states of one seeding run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// Run has not started.
    Pending,
    /// Run is in progress.
    Running,
    /// All batches loaded.
    Completed,
    /// Aborted by the operator; not a failure.
    Cancelled,
    /// A loader or generator error ended the run.
    Failed,
}

/// Result of one seeding run.
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Strategy the run used.
    pub strategy: InsertStrategy,
    /// Configured total record count.
    pub total_records: u64,
    /// Configured batch size.
    pub batch_size: u64,
    /// Derived batch count.
    pub batches_count: u64,
    /// Whether relation linking was enabled.
    pub with_relation: bool,
    /// Terminal status.
    pub status: RunStatus,
    /// Totals and timing.
    pub metrics: RunMetrics,
    /// Error messages (if any).
    pub errors: Vec<String>,
}

impl RunReport {
    /// Create a pending report from the run's configuration.
    pub fn new(config: &RunConfig) -> Self {
        Self {
            strategy: config.strategy,
            total_records: config.total_records,
            batch_size: config.batch_size,
            batches_count: config.batches_count(),
            with_relation: config.with_relation,
            status: RunStatus::Pending,
            metrics: RunMetrics::default(),
            errors: Vec::new(),
        }
    }

    /// Check if the run completed.
    pub fn completed(&self) -> bool {
        matches!(self.status, RunStatus::Completed)
    }

    /// Generate a summary string.
    pub fn summary(&self) -> String {
        let status_str = match self.status {
            RunStatus::Pending => "PENDING",
            RunStatus::Running => "RUNNING",
            RunStatus::Completed => "COMPLETED",
            RunStatus::Cancelled => "CANCELLED",
            RunStatus::Failed => "FAILED",
        };

        let mut summary = format!(
            "Seed Run Report: {status_str}\n\
             ================\n\
             Strategy: {}\n\
             Relation linking: {}\n\
             Records: {}\n\
             Batch size: {} ({} batches)\n\n",
            self.strategy.name(),
            if self.with_relation { "on" } else { "off" },
            self.total_records,
            self.batch_size,
            self.batches_count,
        );

        summary.push_str(&format!(
            "Results:\n\
             - Items inserted: {}\n\
             - Batches completed: {}\n\
             - Duration: {:?}\n\
             - Speed: {} items/s\n",
            self.metrics.items_inserted,
            self.metrics.batch_count,
            self.metrics.total_duration,
            self.metrics.whole_second_speed(),
        ));

        if !self.errors.is_empty() {
            summary.push_str("\nErrors:\n");
            for error in &self.errors {
                summary.push_str(&format!("- {error}\n"));
            }
        }

        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn test_config() -> RunConfig {
        RunConfig::new("host=localhost user=postgres")
            .with_total_records(1_000)
            .with_batch_size(100)
    }

    #[test]
    fn test_new_report_is_pending() {
        let report = RunReport::new(&test_config());

        assert_eq!(report.status, RunStatus::Pending);
        assert_eq!(report.batches_count, 10);
        assert!(!report.completed());
    }

    #[test]
    fn test_report_summary() {
        let mut report = RunReport::new(&test_config());
        report.status = RunStatus::Completed;
        report.metrics.items_inserted = 1_000;
        report.metrics.batch_count = 10;
        report.metrics.total_duration = Duration::from_secs(5);

        let summary = report.summary();
        assert!(summary.contains("COMPLETED"));
        assert!(summary.contains("copy"));
        assert!(summary.contains("Items inserted: 1000"));
        assert!(summary.contains("Speed: 200 items/s"));
    }

    #[test]
    fn test_report_summary_with_errors() {
        let mut report = RunReport::new(&test_config());
        report.status = RunStatus::Failed;
        report.errors.push("connection refused".to_string());

        let summary = report.summary();
        assert!(summary.contains("FAILED"));
        assert!(summary.contains("- connection refused"));
    }
}
