//! Per-invocation MySQL access.
//!
//! Each invocation opens its own connection, runs the one fixed query, and
//! drops the connection when the pass is done. There is deliberately no
//! pool: the connection lifecycle is open → query → iterate → close, same
//! as the page the service replaces.

use std::time::Duration;

use sqlx::mysql::MySqlConnectOptions;
use sqlx::{ConnectOptions, Connection, MySqlConnection};

use crate::config::DatabaseConfig;
use crate::error::DirectoryError;
use crate::record::CompanyRecord;

/// The one query this service runs.
pub const COMPANY_QUERY: &str = "SELECT * FROM company";

/// Open a connection from config, bounded by the connect timeout.
pub async fn connect(config: &DatabaseConfig) -> Result<MySqlConnection, DirectoryError> {
    let options = MySqlConnectOptions::new()
        .host(&config.host)
        .port(config.port)
        .username(&config.user)
        .password(&config.password)
        .database(&config.database);

    match tokio::time::timeout(
        Duration::from_secs(config.connect_timeout_secs),
        options.connect(),
    )
    .await
    {
        Ok(Ok(conn)) => Ok(conn),
        Ok(Err(e)) => Err(DirectoryError::Connect(e)),
        Err(_) => Err(DirectoryError::ConnectTimeout {
            secs: config.connect_timeout_secs,
        }),
    }
}

/// Verify the database is reachable, then close the probe connection.
///
/// Used by `compdir serve` at startup: connection failure is fatal before
/// any request is served.
pub async fn probe(config: &DatabaseConfig) -> Result<(), DirectoryError> {
    let conn = connect(config).await?;
    conn.close().await.map_err(DirectoryError::Connect)?;
    Ok(())
}

/// Fetch all `company` rows on an open connection, in result order.
pub async fn fetch_companies(
    conn: &mut MySqlConnection,
) -> Result<Vec<CompanyRecord>, DirectoryError> {
    sqlx::query_as::<_, CompanyRecord>(COMPANY_QUERY)
        .fetch_all(conn)
        .await
        .map_err(map_query_error)
}

/// Full pass: connect, fetch under the query timeout, close, return records.
pub async fn load_companies(
    config: &DatabaseConfig,
) -> Result<Vec<CompanyRecord>, DirectoryError> {
    let mut conn = connect(config).await?;

    let records = match tokio::time::timeout(
        Duration::from_secs(config.query_timeout_secs),
        fetch_companies(&mut conn),
    )
    .await
    {
        Ok(result) => result?,
        Err(_) => {
            return Err(DirectoryError::QueryTimeout {
                secs: config.query_timeout_secs,
            })
        }
    };

    conn.close().await.map_err(DirectoryError::Query)?;
    Ok(records)
}

/// Map a fetch error to an explicit error kind.
///
/// A `ColumnNotFound` means the `company` table does not have the shape the
/// record expects; surface the column by name instead of a generic failure.
fn map_query_error(e: sqlx::Error) -> DirectoryError {
    match e {
        sqlx::Error::ColumnNotFound(name) => DirectoryError::MissingColumn { name },
        other => DirectoryError::Query(other),
    }
}
