//! DDL helpers for the destination tables.
//!
//! The tables carry no foreign-key constraint between `student.grade_id`
//! and `grade.id`: with relation linking disabled the pipeline still
//! writes students whose `grade_id` is 0, and referential integrity is
//! not its job.

use crate::client::connect;
use crate::entity::Loadable;
use crate::error::LoadError;
use seed_core::{Grade, Student};
use tracing::info;

/// Generate a `CREATE TABLE IF NOT EXISTS` statement for an entity.
pub fn create_table_sql<T: Loadable>() -> String {
    let columns = T::columns()
        .iter()
        .zip(T::column_ddl())
        .map(|(name, ddl)| format!("\"{name}\" {ddl}"))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "CREATE TABLE IF NOT EXISTS \"{}\" ({columns}, PRIMARY KEY (\"id\"))",
        T::table()
    )
}

/// Generate a `DROP TABLE IF EXISTS` statement for an entity.
pub fn drop_table_sql<T: Loadable>() -> String {
    format!("DROP TABLE IF EXISTS \"{}\"", T::table())
}

/// Create both destination tables if they do not exist.
pub async fn ensure_tables(connection_string: &str) -> Result<(), LoadError> {
    let client = connect(connection_string).await?;

    for sql in [create_table_sql::<Grade>(), create_table_sql::<Student>()] {
        client.batch_execute(&sql).await?;
    }

    info!("Destination tables ready");
    Ok(())
}

/// Drop and recreate both destination tables.
pub async fn recreate_tables(connection_string: &str) -> Result<(), LoadError> {
    let client = connect(connection_string).await?;

    info!("Dropping destination tables");
    for sql in [drop_table_sql::<Student>(), drop_table_sql::<Grade>()] {
        client.batch_execute(&sql).await?;
    }

    for sql in [create_table_sql::<Grade>(), create_table_sql::<Student>()] {
        client.batch_execute(&sql).await?;
    }

    info!("Destination tables recreated");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_table_grade() {
        let sql = create_table_sql::<Grade>();

        assert!(sql.contains("CREATE TABLE IF NOT EXISTS \"grade\""));
        assert!(sql.contains("\"id\" BIGINT NOT NULL"));
        assert!(sql.contains("\"name\" TEXT NOT NULL"));
        assert!(sql.contains("PRIMARY KEY (\"id\")"));
    }

    #[test]
    fn test_create_table_student() {
        let sql = create_table_sql::<Student>();

        assert!(sql.contains("CREATE TABLE IF NOT EXISTS \"student\""));
        assert!(sql.contains("\"height\" NUMERIC(18, 2) NOT NULL"));
        assert!(sql.contains("\"weight\" REAL NOT NULL"));
        assert!(sql.contains("\"grade_id\" BIGINT NOT NULL"));
        // Integrity is not enforced by the pipeline.
        assert!(!sql.contains("REFERENCES"));
    }

    #[test]
    fn test_drop_table() {
        assert_eq!(drop_table_sql::<Grade>(), "DROP TABLE IF EXISTS \"grade\"");
    }
}
