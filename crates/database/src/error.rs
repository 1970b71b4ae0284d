use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("Failed to connect to the database: {0}")]
    ConnectionError(#[source] sqlx::Error),

    #[error("Database query failed: {0}")]
    QueryError(#[from] sqlx::Error),

    #[error("A row with key '{0}' already exists.")]
    DuplicateKey(String),

    #[error("The requested data was not found in the database.")]
    NotFound,
}

impl DbError {
    /// Classifies a write failure, turning a primary-key violation on `key`
    /// into `DuplicateKey`.
    pub(crate) fn from_write(err: sqlx::Error, key: &str) -> Self {
        match &err {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                DbError::DuplicateKey(key.to_string())
            }
            _ => DbError::QueryError(err),
        }
    }
}
