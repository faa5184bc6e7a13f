//! PostgreSQL bulk-load strategies for batch-seed.
//!
//! Two interchangeable implementations of the [`BulkLoad`] capability:
//!
//! - [`CopyLoader`] - streams a batch through PostgreSQL's binary
//!   `COPY FROM STDIN` protocol, ticking progress every few thousand rows
//! - [`BatchInsertLoader`] - multi-row parameterized `INSERT` statements
//!   in one transaction, ticking progress once per batch
//!
//! Both derive the destination table and column list from an entity's
//! [`Loadable`] implementation, an explicit compile-time mapping in place
//! of any runtime reflection.

pub mod client;
pub mod copy;
pub mod entity;
pub mod error;
pub mod insert;
pub mod loader;
pub mod schema;

pub use client::connect;
pub use copy::CopyLoader;
pub use entity::Loadable;
pub use error::LoadError;
pub use insert::BatchInsertLoader;
pub use loader::BulkLoad;
