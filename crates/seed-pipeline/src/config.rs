//! Run configuration.

use clap::ValueEnum;

/// Default number of students to load.
pub const DEFAULT_TOTAL_RECORDS: u64 = 1_000_000;

/// Default records per batch.
pub const DEFAULT_BATCH_SIZE: u64 = 100_000;

/// Which bulk-load mechanism a run uses. Chosen once per run, never per
/// batch.
///
/// Which one is faster depends on the store and on whether relation
/// linking is enabled: measured rates for the two strategies invert
/// between the linked and unlinked modes, so treat any observed number
/// as specific to that environment, not a guarantee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InsertStrategy {
    /// Native binary COPY transfer, progress every few thousand rows.
    Copy,
    /// Batched multi-row INSERT statements, progress once per batch.
    Insert,
}

impl InsertStrategy {
    pub fn name(&self) -> &'static str {
        match self {
            InsertStrategy::Copy => "copy",
            InsertStrategy::Insert => "insert",
        }
    }
}

/// Configuration for one seeding run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// PostgreSQL connection string.
    pub connection_string: String,
    /// Total number of students to load.
    pub total_records: u64,
    /// Records per batch.
    pub batch_size: u64,
    /// Back-fill `student.grade_id` from the generated grade before the
    /// student load.
    pub with_relation: bool,
    /// Bulk-load mechanism for the whole run.
    pub strategy: InsertStrategy,
}

impl RunConfig {
    /// Create a configuration with the default sizing and strategy.
    pub fn new(connection_string: impl Into<String>) -> Self {
        Self {
            connection_string: connection_string.into(),
            total_records: DEFAULT_TOTAL_RECORDS,
            batch_size: DEFAULT_BATCH_SIZE,
            with_relation: true,
            strategy: InsertStrategy::Copy,
        }
    }

    /// Set the total number of students to load.
    pub fn with_total_records(mut self, total_records: u64) -> Self {
        self.total_records = total_records;
        self
    }

    /// Set the batch size.
    pub fn with_batch_size(mut self, batch_size: u64) -> Self {
        self.batch_size = batch_size;
        self
    }

    /// Enable or disable relation linking.
    pub fn with_relation(mut self, with_relation: bool) -> Self {
        self.with_relation = with_relation;
        self
    }

    /// Set the insert strategy.
    pub fn with_strategy(mut self, strategy: InsertStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Derived batch count (floor division; remainder records dropped).
    pub fn batches_count(&self) -> u64 {
        self.total_records.checked_div(self.batch_size).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = RunConfig::new("host=localhost user=postgres");

        assert_eq!(config.total_records, 1_000_000);
        assert_eq!(config.batch_size, 100_000);
        assert_eq!(config.batches_count(), 10);
        assert!(config.with_relation);
        assert_eq!(config.strategy, InsertStrategy::Copy);
    }

    #[test]
    fn test_config_builder() {
        let config = RunConfig::new("host=localhost user=postgres")
            .with_total_records(5_000)
            .with_batch_size(1_000)
            .with_relation(false)
            .with_strategy(InsertStrategy::Insert);

        assert_eq!(config.total_records, 5_000);
        assert_eq!(config.batches_count(), 5);
        assert!(!config.with_relation);
        assert_eq!(config.strategy, InsertStrategy::Insert);
    }
}
