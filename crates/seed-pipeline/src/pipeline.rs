//! Seed run orchestration.

use crate::config::{InsertStrategy, RunConfig};
use crate::error::PipelineError;
use crate::metrics::measure;
use crate::report::{RunReport, RunStatus};
use seed_core::{BatchPlan, Grade, Student};
use seed_generator::generate_batch;
use seed_postgresql::{BatchInsertLoader, BulkLoad, CopyLoader};
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

/// Drives one full seeding run over strictly sequential batches.
///
/// Per batch: check the cancellation token, generate the data, load
/// grades, back-fill the student→grade relation when enabled, load
/// students. Nothing is shared across iterations except the plan's batch
/// index and immutable start time; each batch's connection lives inside
/// the loader call.
pub struct Pipeline {
    config: RunConfig,
}

impl Pipeline {
    /// Create a new pipeline for the given configuration.
    pub fn new(config: RunConfig) -> Self {
        Self { config }
    }

    /// Run to a terminal state with the configured strategy.
    ///
    /// The strategy is resolved here, once; the batch loop below is
    /// generic over the loader and never branches on it.
    pub async fn run(&self, cancel: &CancellationToken) -> RunReport {
        match self.config.strategy {
            InsertStrategy::Copy => {
                let loader = CopyLoader::new(&self.config.connection_string);
                self.run_with(&loader, cancel).await
            }
            InsertStrategy::Insert => {
                let loader = BatchInsertLoader::new(&self.config.connection_string);
                self.run_with(&loader, cancel).await
            }
        }
    }

    /// Run to a terminal state with an explicit loader.
    ///
    /// Cancellation ends the run as `Cancelled` with a warning; any other
    /// loader or generator error ends it as `Failed` with the error
    /// recorded on the report. Neither escapes as an `Err`.
    pub async fn run_with<L: BulkLoad>(
        &self,
        loader: &L,
        cancel: &CancellationToken,
    ) -> RunReport {
        let mut report = RunReport::new(&self.config);
        report.status = RunStatus::Running;

        info!(
            "Starting seed run: {} records in {} batches of {} ({} strategy, relation linking {})",
            self.config.total_records,
            self.config.batches_count(),
            self.config.batch_size,
            self.config.strategy.name(),
            if self.config.with_relation { "on" } else { "off" },
        );

        let (result, elapsed) = measure(self.insert_all(loader, cancel)).await;
        report.metrics.total_duration = elapsed;

        match result {
            Ok((items, batches)) => {
                report.metrics.items_inserted = items;
                report.metrics.batch_count = batches;
                report.status = RunStatus::Completed;
                info!(
                    "Finished seeding in {:?} - {} [items/s]",
                    elapsed,
                    report.metrics.whole_second_speed()
                );
            }
            Err(e) if e.is_cancellation() => {
                report.status = RunStatus::Cancelled;
                warn!("Seed run was cancelled!");
            }
            Err(e) => {
                report.status = RunStatus::Failed;
                error!("Seed run failed: {e}");
                report.errors.push(e.to_string());
            }
        }

        report
    }

    async fn insert_all<L: BulkLoad>(
        &self,
        loader: &L,
        cancel: &CancellationToken,
    ) -> Result<(u64, u64), PipelineError> {
        let mut plan = BatchPlan::new(self.config.total_records, self.config.batch_size);
        let mut items = 0u64;
        let mut batches = 0u64;

        for batch_index in 0..plan.batches_count {
            if cancel.is_cancelled() {
                return Err(PipelineError::Cancelled);
            }

            plan.batch_index = batch_index;
            let mut students = generate_batch(batch_index, self.config.batch_size, cancel)?;
            let grades: Vec<Grade> = students.iter().map(|s| s.grade.clone()).collect();

            loader.load(&grades, &plan, cancel).await?;

            if self.config.with_relation {
                link_grades(&mut students);
            }
            loader.load(&students, &plan, cancel).await?;

            items += students.len() as u64;
            batches += 1;
        }

        Ok((items, batches))
    }
}

/// Back-fill each student's foreign key from its owned grade.
fn link_grades(students: &mut [Student]) {
    for student in students {
        student.grade_id = student.grade.id;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use seed_postgresql::{LoadError, Loadable};
    use std::sync::Mutex;

    #[derive(Debug, Clone, PartialEq)]
    struct LoadCall {
        table: &'static str,
        rows: usize,
        batch_number: u64,
    }

    /// In-memory loader that records every call and can inject
    /// cancellation or a store failure at a chosen batch.
    #[derive(Default)]
    struct RecordingLoader {
        calls: Mutex<Vec<LoadCall>>,
        cancel_after_batch: Option<u64>,
        fail_on_batch: Option<u64>,
    }

    impl RecordingLoader {
        fn calls(&self) -> Vec<LoadCall> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl BulkLoad for RecordingLoader {
        async fn load<T: Loadable>(
            &self,
            rows: &[T],
            plan: &BatchPlan,
            cancel: &CancellationToken,
        ) -> Result<(), LoadError> {
            if T::table() == "grade" && self.fail_on_batch == Some(plan.batch_index) {
                return Err(LoadError::Connection("injected failure".to_string()));
            }

            self.calls.lock().unwrap().push(LoadCall {
                table: T::table(),
                rows: rows.len(),
                batch_number: plan.batch_index + 1,
            });

            // Fires after this batch's student load completes, so the
            // pipeline only observes it at the next batch boundary.
            if T::table() == "student" && self.cancel_after_batch == Some(plan.batch_index) {
                cancel.cancel();
            }

            Ok(())
        }
    }

    fn test_config() -> RunConfig {
        RunConfig::new("host=localhost user=postgres")
            .with_total_records(1_000)
            .with_batch_size(100)
    }

    #[tokio::test]
    async fn test_run_loads_grades_then_students_per_batch() {
        let loader = RecordingLoader::default();
        let cancel = CancellationToken::new();

        let report = Pipeline::new(test_config()).run_with(&loader, &cancel).await;

        assert_eq!(report.status, RunStatus::Completed);
        assert_eq!(report.metrics.items_inserted, 1_000);
        assert_eq!(report.metrics.batch_count, 10);

        let calls = loader.calls();
        assert_eq!(calls.len(), 20);
        for (i, call) in calls.iter().enumerate() {
            let expected_table = if i % 2 == 0 { "grade" } else { "student" };
            assert_eq!(call.table, expected_table);
            assert_eq!(call.rows, 100);
            assert_eq!(call.batch_number, (i / 2) as u64 + 1);
        }
    }

    #[tokio::test]
    async fn test_cancellation_before_batch_three() {
        let loader = RecordingLoader {
            cancel_after_batch: Some(2),
            ..Default::default()
        };
        let cancel = CancellationToken::new();

        let report = Pipeline::new(test_config()).run_with(&loader, &cancel).await;

        // Batches 0, 1, 2 are fully written; the run ends Cancelled, not
        // Failed, and nothing surfaces as an error.
        assert_eq!(report.status, RunStatus::Cancelled);
        assert!(report.errors.is_empty());
        assert_eq!(loader.calls().len(), 6);
    }

    #[tokio::test]
    async fn test_store_failure_on_batch_five() {
        let loader = RecordingLoader {
            fail_on_batch: Some(5),
            ..Default::default()
        };
        let cancel = CancellationToken::new();

        let report = Pipeline::new(test_config()).run_with(&loader, &cancel).await;

        assert_eq!(report.status, RunStatus::Failed);
        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].contains("injected failure"));
        // Batches 0-4 committed before the failure.
        assert_eq!(loader.calls().len(), 10);
    }

    #[tokio::test]
    async fn test_pre_cancelled_token_loads_nothing() {
        let loader = RecordingLoader::default();
        let cancel = CancellationToken::new();
        cancel.cancel();

        let report = Pipeline::new(test_config()).run_with(&loader, &cancel).await;

        assert_eq!(report.status, RunStatus::Cancelled);
        assert!(loader.calls().is_empty());
    }

    #[test]
    fn test_link_grades_backfills_foreign_key() {
        let cancel = CancellationToken::new();
        let mut students = generate_batch(4, 10, &cancel).unwrap();
        assert!(students.iter().all(|s| s.grade_id == 0));

        link_grades(&mut students);

        for student in &students {
            assert_eq!(student.grade_id, student.grade.id);
            assert_eq!(student.grade_id, student.id);
        }
    }
}
