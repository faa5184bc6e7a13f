//! Generated record types.
//!
//! A [`Student`] always owns the [`Grade`] it was generated with; the
//! `grade_id` column is only back-filled from that grade when relation
//! linking is enabled for the run.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// Parent record, one per generated student.
#[derive(Debug, Clone, PartialEq)]
pub struct Grade {
    pub id: i64,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
    pub name: String,
    pub section: String,
}

/// Child record. `grade` is the owned parent and is not a column of the
/// student table; `grade_id` stays 0 unless relation linking back-fills it.
#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    pub id: i64,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
    pub student_name: String,
    pub date_of_birth: DateTime<Utc>,
    pub city_of_birth: String,
    pub height: Decimal,
    pub weight: f32,
    pub firstname: String,
    pub surname: String,
    pub grade_id: i64,
    pub grade: Grade,
}
