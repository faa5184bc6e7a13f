//! Connection handling.

use crate::error::LoadError;
use tokio_postgres::{Client, NoTls};

/// Open a dedicated connection and drive it on a background task.
///
/// Each bulk-load call opens its own connection; dropping the returned
/// client at the end of the batch closes it and ends the task.
pub async fn connect(connection_string: &str) -> Result<Client, LoadError> {
    let (client, connection) = tokio_postgres::connect(connection_string, NoTls).await?;

    tokio::spawn(async move {
        if let Err(e) = connection.await {
            tracing::error!("PostgreSQL connection error: {}", e);
        }
    });

    Ok(client)
}
