//! Entity-to-table mapping.

use seed_core::{Grade, Student};
use tokio_postgres::types::{ToSql, Type};

/// Compile-time mapping from a record type to its destination table.
///
/// The table name, column list, wire types, and DDL fragments are all
/// declared here per entity, so no runtime reflection is needed to build
/// COPY or INSERT statements. `values` must yield one parameter per entry
/// of [`columns`](Loadable::columns), in the same order; optional columns
/// are written as explicit NULLs through `Option`'s `ToSql` impl.
pub trait Loadable: Send + Sync {
    /// Destination table name.
    fn table() -> &'static str;

    /// Column names, in insertion order.
    fn columns() -> &'static [&'static str];

    /// PostgreSQL wire types for the binary COPY path, aligned with
    /// [`columns`](Loadable::columns).
    fn column_types() -> Vec<Type>;

    /// Column DDL fragments, aligned with [`columns`](Loadable::columns).
    fn column_ddl() -> &'static [&'static str];

    /// The record's column values as owned parameters.
    fn values(&self) -> Vec<Box<dyn ToSql + Sync + Send>>;
}

impl Loadable for Grade {
    fn table() -> &'static str {
        "grade"
    }

    fn columns() -> &'static [&'static str] {
        &["id", "created_at", "modified_at", "name", "section"]
    }

    fn column_types() -> Vec<Type> {
        vec![
            Type::INT8,
            Type::TIMESTAMPTZ,
            Type::TIMESTAMPTZ,
            Type::TEXT,
            Type::TEXT,
        ]
    }

    fn column_ddl() -> &'static [&'static str] {
        &[
            "BIGINT NOT NULL",
            "TIMESTAMPTZ NOT NULL",
            "TIMESTAMPTZ NOT NULL",
            "TEXT NOT NULL",
            "TEXT NOT NULL",
        ]
    }

    fn values(&self) -> Vec<Box<dyn ToSql + Sync + Send>> {
        vec![
            Box::new(self.id),
            Box::new(self.created_at),
            Box::new(self.modified_at),
            Box::new(self.name.clone()),
            Box::new(self.section.clone()),
        ]
    }
}

impl Loadable for Student {
    fn table() -> &'static str {
        "student"
    }

    fn columns() -> &'static [&'static str] {
        &[
            "id",
            "created_at",
            "modified_at",
            "student_name",
            "date_of_birth",
            "city_of_birth",
            "height",
            "weight",
            "firstname",
            "surname",
            "grade_id",
        ]
    }

    fn column_types() -> Vec<Type> {
        vec![
            Type::INT8,
            Type::TIMESTAMPTZ,
            Type::TIMESTAMPTZ,
            Type::TEXT,
            Type::TIMESTAMPTZ,
            Type::TEXT,
            Type::NUMERIC,
            Type::FLOAT4,
            Type::TEXT,
            Type::TEXT,
            Type::INT8,
        ]
    }

    fn column_ddl() -> &'static [&'static str] {
        &[
            "BIGINT NOT NULL",
            "TIMESTAMPTZ NOT NULL",
            "TIMESTAMPTZ NOT NULL",
            "TEXT NOT NULL",
            "TIMESTAMPTZ NOT NULL",
            "TEXT NOT NULL",
            "NUMERIC(18, 2) NOT NULL",
            "REAL NOT NULL",
            "TEXT NOT NULL",
            "TEXT NOT NULL",
            "BIGINT NOT NULL",
        ]
    }

    // The owned grade is a separate row in its own table, not a column.
    fn values(&self) -> Vec<Box<dyn ToSql + Sync + Send>> {
        vec![
            Box::new(self.id),
            Box::new(self.created_at),
            Box::new(self.modified_at),
            Box::new(self.student_name.clone()),
            Box::new(self.date_of_birth),
            Box::new(self.city_of_birth.clone()),
            Box::new(self.height),
            Box::new(self.weight),
            Box::new(self.firstname.clone()),
            Box::new(self.surname.clone()),
            Box::new(self.grade_id),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_mapping_is_aligned() {
        assert_eq!(Grade::table(), "grade");
        assert_eq!(Grade::columns().len(), Grade::column_types().len());
        assert_eq!(Grade::columns().len(), Grade::column_ddl().len());
    }

    #[test]
    fn test_student_mapping_is_aligned() {
        assert_eq!(Student::table(), "student");
        assert_eq!(Student::columns().len(), Student::column_types().len());
        assert_eq!(Student::columns().len(), Student::column_ddl().len());
        assert!(Student::columns().contains(&"grade_id"));
    }

    #[test]
    fn test_values_match_column_count() {
        let students = seed_generator::generate_batch(
            0,
            1,
            &tokio_util::sync::CancellationToken::new(),
        )
        .unwrap();

        let student = &students[0];
        assert_eq!(student.values().len(), Student::columns().len());
        assert_eq!(student.grade.values().len(), Grade::columns().len());
    }
}
