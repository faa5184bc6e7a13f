//! Batched multi-row INSERT bulk loader.

use crate::client::connect;
use crate::entity::Loadable;
use crate::error::LoadError;
use crate::loader::BulkLoad;
use async_trait::async_trait;
use seed_core::{estimate, BatchPlan, ProgressReporter};
use tokio_postgres::types::ToSql;
use tokio_postgres::Transaction;
use tokio_util::sync::CancellationToken;

/// PostgreSQL caps a single statement at 65 535 bind parameters.
const PARAMETER_LIMIT: usize = 65_535;

/// Loads a batch as multi-row parameterized `INSERT` statements inside
/// one transaction on a dedicated connection.
///
/// The batch is split into sub-statements sized to the parameter limit;
/// `statement_timeout` is disabled for the session so the store never
/// cuts a long batch off. Progress is reported once, when the batch
/// commits.
pub struct BatchInsertLoader {
    connection_string: String,
    reporter: ProgressReporter,
}

impl BatchInsertLoader {
    pub fn new(connection_string: impl Into<String>) -> Self {
        Self {
            connection_string: connection_string.into(),
            reporter: ProgressReporter::new(),
        }
    }
}

#[async_trait]
impl BulkLoad for BatchInsertLoader {
    async fn load<T: Loadable>(
        &self,
        rows: &[T],
        plan: &BatchPlan,
        cancel: &CancellationToken,
    ) -> Result<(), LoadError> {
        if rows.is_empty() {
            return Ok(());
        }

        let mut client = connect(&self.connection_string).await?;
        client.batch_execute("SET statement_timeout = 0").await?;

        let rows_per_statement = rows_per_statement(T::columns().len());
        let transaction = client.transaction().await?;

        for chunk in rows.chunks(rows_per_statement) {
            // Dropping the transaction uncommitted rolls the batch back.
            if cancel.is_cancelled() {
                return Err(LoadError::Cancelled);
            }
            insert_chunk(&transaction, chunk).await?;
        }

        transaction.commit().await?;

        let progress = rows.len() as f64 / plan.batch_size.max(1) as f64;
        let stats = estimate(plan, progress);
        self.reporter.write_progress(T::table(), &stats);

        Ok(())
    }
}

/// Rows that fit in one statement without exceeding the parameter limit.
fn rows_per_statement(column_count: usize) -> usize {
    (PARAMETER_LIMIT / column_count.max(1)).max(1)
}

async fn insert_chunk<T: Loadable>(
    transaction: &Transaction<'_>,
    rows: &[T],
) -> Result<(), LoadError> {
    let columns = T::columns();
    let column_list = columns
        .iter()
        .map(|c| format!("\"{c}\""))
        .collect::<Vec<_>>()
        .join(", ");

    let mut placeholders: Vec<String> = Vec::with_capacity(rows.len());
    let mut param_idx = 1;
    for _ in 0..rows.len() {
        let row_placeholders: Vec<String> = (0..columns.len())
            .map(|_| {
                let p = format!("${param_idx}");
                param_idx += 1;
                p
            })
            .collect();
        placeholders.push(format!("({})", row_placeholders.join(", ")));
    }

    let sql = format!(
        "INSERT INTO \"{}\" ({column_list}) VALUES {}",
        T::table(),
        placeholders.join(", ")
    );

    let mut params: Vec<Box<dyn ToSql + Sync + Send>> =
        Vec::with_capacity(rows.len() * columns.len());
    for row in rows {
        params.extend(row.values());
    }

    let param_refs: Vec<&(dyn ToSql + Sync)> = params
        .iter()
        .map(|p| p.as_ref() as &(dyn ToSql + Sync))
        .collect();

    transaction.execute(&sql, &param_refs).await?;

    Ok(())
}
