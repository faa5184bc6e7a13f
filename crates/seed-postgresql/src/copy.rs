//! Binary COPY bulk loader.

use crate::client::connect;
use crate::entity::Loadable;
use crate::error::LoadError;
use crate::loader::BulkLoad;
use async_trait::async_trait;
use futures::pin_mut;
use seed_core::{estimate, BatchPlan, ProgressReporter};
use tokio_postgres::binary_copy::BinaryCopyInWriter;
use tokio_postgres::types::ToSql;
use tokio_util::sync::CancellationToken;

/// Rows between progress ticks.
pub const NOTIFY_EVERY: u64 = 2_000;

/// Streams a whole batch through PostgreSQL's binary `COPY FROM STDIN`
/// protocol on a dedicated connection.
///
/// The batch is one uninterrupted transfer with no statement timeout:
/// large batches must not be cut off by a fixed deadline. Progress is
/// reported every [`NOTIFY_EVERY`] rows as the fraction of the nominal
/// batch size written so far.
pub struct CopyLoader {
    connection_string: String,
    reporter: ProgressReporter,
}

impl CopyLoader {
    pub fn new(connection_string: impl Into<String>) -> Self {
        Self {
            connection_string: connection_string.into(),
            reporter: ProgressReporter::new(),
        }
    }

    fn notify<T: Loadable>(&self, plan: &BatchPlan, written: u64) {
        let progress = written as f64 / plan.batch_size.max(1) as f64;
        let stats = estimate(plan, progress);
        self.reporter.write_progress(T::table(), &stats);
    }
}

#[async_trait]
impl BulkLoad for CopyLoader {
    async fn load<T: Loadable>(
        &self,
        rows: &[T],
        plan: &BatchPlan,
        cancel: &CancellationToken,
    ) -> Result<(), LoadError> {
        let client = connect(&self.connection_string).await?;
        client.batch_execute("SET statement_timeout = 0").await?;

        let columns = T::columns()
            .iter()
            .map(|c| format!("\"{c}\""))
            .collect::<Vec<_>>()
            .join(", ");
        let sql = format!(
            "COPY \"{}\" ({columns}) FROM STDIN (FORMAT BINARY)",
            T::table()
        );

        let sink = client.copy_in(&sql).await?;
        let types = T::column_types();
        let writer = BinaryCopyInWriter::new(sink, &types);
        pin_mut!(writer);

        let mut written = 0u64;
        for row in rows {
            // Dropping the writer mid-stream aborts the COPY on the
            // server, so an observed cancellation ends the transfer too.
            if cancel.is_cancelled() {
                return Err(LoadError::Cancelled);
            }

            let values = row.values();
            let params: Vec<&(dyn ToSql + Sync)> = values
                .iter()
                .map(|v| v.as_ref() as &(dyn ToSql + Sync))
                .collect();
            writer.as_mut().write(&params).await?;

            written += 1;
            if written % NOTIFY_EVERY == 0 {
                self.notify::<T>(plan, written);
            }
        }

        writer.finish().await?;

        if written % NOTIFY_EVERY != 0 {
            self.notify::<T>(plan, written);
        }

        Ok(())
    }
}
