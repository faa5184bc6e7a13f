//! Elapsed-time measurement and run metrics.

use std::future::Future;
use std::time::{Duration, Instant};

/// Run a future and return its output together with wall-clock duration.
pub async fn measure<F: Future>(fut: F) -> (F::Output, Duration) {
    let start = Instant::now();
    let output = fut.await;
    (output, start.elapsed())
}

/// Totals for one seeding run.
#[derive(Debug, Clone, Default)]
pub struct RunMetrics {
    /// Students loaded (the run's item count; grade rows ride along).
    pub items_inserted: u64,
    /// Batches completed.
    pub batch_count: u64,
    /// Total wall-clock duration.
    pub total_duration: Duration,
}

impl RunMetrics {
    /// Items per second over the full run.
    pub fn rows_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.items_inserted as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }

    /// Items per second with elapsed time truncated to whole seconds,
    /// matching the final-summary log format. Sub-second runs fall back
    /// to the fractional rate instead of dividing by zero.
    pub fn whole_second_speed(&self) -> u64 {
        let secs = self.total_duration.as_secs();
        if secs == 0 {
            self.rows_per_second() as u64
        } else {
            self.items_inserted / secs
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_per_second() {
        let metrics = RunMetrics {
            items_inserted: 1_000,
            batch_count: 10,
            total_duration: Duration::from_secs(10),
        };

        assert_eq!(metrics.rows_per_second(), 100.0);
        assert_eq!(metrics.whole_second_speed(), 100);
    }

    #[test]
    fn test_zero_duration_is_guarded() {
        let metrics = RunMetrics {
            items_inserted: 1_000,
            batch_count: 1,
            total_duration: Duration::ZERO,
        };

        assert_eq!(metrics.rows_per_second(), 0.0);
        assert_eq!(metrics.whole_second_speed(), 0);
    }

    #[test]
    fn test_whole_second_speed_truncates_elapsed() {
        // 19.6s truncates to 19 whole seconds: 1 000 000 / 19 = 52 631.
        let metrics = RunMetrics {
            items_inserted: 1_000_000,
            batch_count: 10,
            total_duration: Duration::from_millis(19_600),
        };

        assert_eq!(metrics.whole_second_speed(), 52_631);
    }

    #[test]
    fn test_sub_second_run_reports_fractional_rate() {
        let metrics = RunMetrics {
            items_inserted: 500,
            batch_count: 1,
            total_duration: Duration::from_millis(250),
        };

        assert_eq!(metrics.whole_second_speed(), 2_000);
    }

    #[tokio::test]
    async fn test_measure_returns_output_and_duration() {
        let (output, elapsed) = measure(async { 42 }).await;

        assert_eq!(output, 42);
        assert!(elapsed < Duration::from_secs(1));
    }
}
