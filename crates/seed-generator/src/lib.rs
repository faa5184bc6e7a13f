//! Deterministic batch generation of students and grades.
//!
//! Record `i` (1-based across the whole run) always carries the same
//! field values, so two runs over the same plan produce comparable data;
//! only the timestamp columns move with the wall clock.

pub mod generator;

pub use generator::{generate_batch, GeneratorError};
