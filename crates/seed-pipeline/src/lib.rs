//! Batch orchestration for batch-seed.
//!
//! The [`Pipeline`] drives one full seeding run: it resolves the insert
//! strategy once, then for every batch generates the data, loads grades,
//! optionally back-fills the student→grade relation, and loads students.
//! Progress is reported from inside the loaders; this crate owns the
//! [`RunConfig`], the terminal [`RunStatus`], and the final statistics.

pub mod config;
pub mod error;
pub mod metrics;
pub mod pipeline;
pub mod report;

pub use config::{InsertStrategy, RunConfig, DEFAULT_BATCH_SIZE, DEFAULT_TOTAL_RECORDS};
pub use error::PipelineError;
pub use metrics::{measure, RunMetrics};
pub use pipeline::Pipeline;
pub use report::{RunReport, RunStatus};
