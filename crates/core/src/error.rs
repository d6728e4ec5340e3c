/// All errors the directory service can surface.
#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    /// Config file unreadable or unparsable. Fatal at startup.
    #[error("could not read config '{path}': {reason}")]
    Config { path: String, reason: String },

    /// Could not open a connection to the database. Fatal: nothing is
    /// rendered, no query is attempted.
    #[error("connection failed: {0}")]
    Connect(sqlx::Error),

    /// Opening the connection exceeded the configured timeout.
    #[error("connecting to the database timed out after {secs}s")]
    ConnectTimeout { secs: u64 },

    /// The query itself failed after a successful connect.
    #[error("query failed: {0}")]
    Query(sqlx::Error),

    /// The fetch exceeded the configured query timeout.
    #[error("query timed out after {secs}s")]
    QueryTimeout { secs: u64 },

    /// The result set is missing a column the record expects.
    #[error("result set is missing expected column '{name}'")]
    MissingColumn { name: String },
}

impl DirectoryError {
    /// True for the failures that mean the database could not be reached
    /// at all (as opposed to a failure while running the query).
    pub fn is_unavailable(&self) -> bool {
        matches!(
            self,
            DirectoryError::Connect(_) | DirectoryError::ConnectTimeout { .. }
        )
    }
}
