//! Core types for the batch-seed pipeline.
//!
//! This crate provides the foundational types shared by the seeding
//! pipeline:
//!
//! - [`Grade`] / [`Student`] - the two generated record types
//! - [`BatchPlan`] - sizing and position of the batched run
//! - [`ProgressSnapshot`] / [`estimate`] - throughput and completion-time
//!   estimation from a batch-relative progress fraction
//! - [`ProgressReporter`] - formatted progress output to the log sink
//!
//! # Architecture
//!
//! seed-core sits at the foundation of the workspace:
//!
//! ```text
//! seed-core (this crate)
//!    │
//!    ├─── seed-generator   (produces Grade/Student batches)
//!    ├─── seed-postgresql  (loads them, reporting progress per plan)
//!    └─── seed-pipeline    (drives batches and owns the plan)
//! ```

pub mod entities;
pub mod plan;
pub mod progress;
pub mod report;

pub use entities::{Grade, Student};
pub use plan::BatchPlan;
pub use progress::{estimate, estimate_at, ProgressSnapshot};
pub use report::ProgressReporter;
