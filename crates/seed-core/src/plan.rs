//! Batch sizing and run position.

use std::time::Instant;

/// Sizing and current position of one batched run.
///
/// `batches_count` is `total_records / batch_size`, floored; any remainder
/// records are dropped, so a run whose total is not an exact multiple of
/// the batch size finishes below 100% total progress. `batch_index` is the
/// only field mutated between batches, and `started_at` is set once when
/// the plan is created.
#[derive(Debug, Clone)]
pub struct BatchPlan {
    /// Total number of records the run was asked to load.
    pub total_records: u64,
    /// Records per batch.
    pub batch_size: u64,
    /// Derived batch count (floor division).
    pub batches_count: u64,
    /// 0-based index of the batch currently being loaded.
    pub batch_index: u64,
    /// Wall-clock start of the run.
    pub started_at: Instant,
}

impl BatchPlan {
    /// Create a plan positioned at batch 0, started now.
    pub fn new(total_records: u64, batch_size: u64) -> Self {
        Self {
            total_records,
            batch_size,
            batches_count: total_records.checked_div(batch_size).unwrap_or(0),
            batch_index: 0,
            started_at: Instant::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batches_count_floor_division() {
        let plan = BatchPlan::new(1_000_000, 100_000);
        assert_eq!(plan.batches_count, 10);

        // Remainder records are dropped.
        let plan = BatchPlan::new(1_050_000, 100_000);
        assert_eq!(plan.batches_count, 10);

        let plan = BatchPlan::new(99, 100);
        assert_eq!(plan.batches_count, 0);
    }

    #[test]
    fn test_zero_batch_size_yields_no_batches() {
        let plan = BatchPlan::new(1000, 0);
        assert_eq!(plan.batches_count, 0);
    }

    #[test]
    fn test_starts_at_batch_zero() {
        let plan = BatchPlan::new(1000, 100);
        assert_eq!(plan.batch_index, 0);
    }
}
