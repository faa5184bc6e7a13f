//! Command-line interface for batch-seed
//!
//! # Usage Examples
//!
//! ```bash
//! # Seed one million students (and their grades) with binary COPY
//! batch-seed run \
//!   --connection-string "host=localhost user=postgres password=postgres dbname=batch" \
//!   --strategy copy
//!
//! # Smaller run over batched INSERTs, without relation linking
//! batch-seed run \
//!   --connection-string "host=localhost user=postgres password=postgres dbname=batch" \
//!   --total-records 100000 --batch-size 10000 \
//!   --strategy insert --no-relation
//!
//! # Recreate the destination tables and stop
//! batch-seed schema \
//!   --connection-string "host=localhost user=postgres password=postgres dbname=batch" \
//!   --drop-existing
//! ```
//!
//! A running seed is cancelled cooperatively with Ctrl+C: the current
//! transfer is aborted, the run ends in the Cancelled state, and already
//! committed batches stay in the database.

mod logging;

use anyhow::Context;
use clap::{Parser, Subcommand};
use logging::mask_connection_password;
use seed_pipeline::{InsertStrategy, Pipeline, RunConfig, RunStatus};
use tokio_util::sync::CancellationToken;

#[derive(Parser)]
#[command(name = "batch-seed")]
#[command(about = "Seeds PostgreSQL with a large synthetic student/grade dataset in batches")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one full seeding pass to a terminal state
    Run {
        /// PostgreSQL connection string
        #[arg(long, env = "POSTGRES_CONNECTION_STRING")]
        connection_string: String,

        /// Total number of students to load
        #[arg(long, default_value = "1000000")]
        total_records: u64,

        /// Records per batch (batch count is total-records / batch-size, floored)
        #[arg(long, default_value = "100000")]
        batch_size: u64,

        /// Bulk-load strategy
        #[arg(long, value_enum, default_value = "copy")]
        strategy: InsertStrategy,

        /// Leave student.grade_id at its default instead of back-filling
        /// it from the generated grade
        #[arg(long)]
        no_relation: bool,

        /// Skip table creation (tables must already exist)
        #[arg(long)]
        data_only: bool,
    },

    /// Create the destination tables
    Schema {
        /// PostgreSQL connection string
        #[arg(long, env = "POSTGRES_CONNECTION_STRING")]
        connection_string: String,

        /// Drop existing tables first
        #[arg(long)]
        drop_existing: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = run().await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

async fn run() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            connection_string,
            total_records,
            batch_size,
            strategy,
            no_relation,
            data_only,
        } => {
            if !data_only {
                seed_postgresql::schema::ensure_tables(&connection_string)
                    .await
                    .context("Failed to create destination tables")?;
            }

            tracing::info!(
                "Seeding {} ({})",
                mask_connection_password(&connection_string),
                strategy.name()
            );

            let config = RunConfig::new(&connection_string)
                .with_total_records(total_records)
                .with_batch_size(batch_size)
                .with_relation(!no_relation)
                .with_strategy(strategy);

            let cancel = shutdown_token();
            let report = Pipeline::new(config).run(&cancel).await;

            tracing::info!("{}", report.summary());

            if report.status == RunStatus::Failed {
                anyhow::bail!("seed run failed: {}", report.errors.join("; "));
            }
        }

        Commands::Schema {
            connection_string,
            drop_existing,
        } => {
            if drop_existing {
                seed_postgresql::schema::recreate_tables(&connection_string)
                    .await
                    .context("Failed to recreate destination tables")?;
            } else {
                seed_postgresql::schema::ensure_tables(&connection_string)
                    .await
                    .context("Failed to create destination tables")?;
            }
        }
    }

    Ok(())
}

/// Cancellation token wired to Ctrl+C.
fn shutdown_token() -> CancellationToken {
    let token = CancellationToken::new();
    let handler = token.clone();

    tokio::spawn(async move {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install CTRL+C signal handler");

        tracing::info!("Received interrupt signal (Ctrl+C)");
        handler.cancel();
    });

    token
}
