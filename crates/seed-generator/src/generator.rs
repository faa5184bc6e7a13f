//! Batch generator for student and grade records.

use chrono::{DateTime, Months, Utc};
use rust_decimal::Decimal;
use seed_core::{Grade, Student};
use tokio_util::sync::CancellationToken;

/// Error type for generator operations.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// Generation was aborted by the run's cancellation token.
    #[error("generation cancelled")]
    Cancelled,
}

/// Generate one batch of students, each owning its grade.
///
/// The global index of record `local` in batch `batch_index` is
/// `batch_index * batch_size + local`, counting `local` from 1. Every
/// text field is synthesized as `{FieldName}_{index}` and the numeric
/// fields carry the index itself, so the content of any record is a pure
/// function of its position in the run.
///
/// The cancellation token is checked before the batch and before every
/// record; an observed cancellation aborts with
/// [`GeneratorError::Cancelled`] rather than returning a partial batch.
pub fn generate_batch(
    batch_index: u64,
    batch_size: u64,
    cancel: &CancellationToken,
) -> Result<Vec<Student>, GeneratorError> {
    if cancel.is_cancelled() {
        return Err(GeneratorError::Cancelled);
    }

    let mut students = Vec::with_capacity(batch_size as usize);
    for local in 1..=batch_size {
        if cancel.is_cancelled() {
            return Err(GeneratorError::Cancelled);
        }
        students.push(student(batch_index * batch_size + local));
    }

    Ok(students)
}

fn student(index: u64) -> Student {
    let now = Utc::now();

    Student {
        id: index as i64,
        created_at: now,
        modified_at: now,
        student_name: format!("StudentName_{index}"),
        date_of_birth: date_of_birth(now),
        city_of_birth: format!("CityOfBirth_{index}"),
        height: Decimal::from(index),
        weight: index as f32,
        firstname: format!("Firstname_{index}"),
        surname: format!("Surname_{index}"),
        grade_id: 0,
        grade: grade(index, now),
    }
}

fn grade(index: u64, now: DateTime<Utc>) -> Grade {
    Grade {
        id: index as i64,
        created_at: now,
        modified_at: now,
        name: format!("Name_{index}"),
        section: format!("Section_{index}"),
    }
}

fn date_of_birth(now: DateTime<Utc>) -> DateTime<Utc> {
    // Twenty years back; the leap-day fallback never fires for a
    // wall-clock `now` but keeps the arithmetic total.
    now.checked_sub_months(Months::new(240)).unwrap_or(now)
}
