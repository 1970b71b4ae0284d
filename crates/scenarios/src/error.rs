use database::DbError;
use thiserror::Error;

/// The message attached to every format-check failure.
pub const VALIDATION_FAILED: &str = "validation failed";

#[derive(Error, Debug)]
pub enum ScenarioError {
    /// The code is not exactly two uppercase ASCII letters.
    #[error("Invalid country code '{code}': {message}")]
    InvalidCode { code: String, message: String },

    #[error("Country with code '{code}' was not found")]
    NotFound { code: String },

    #[error("Country with code '{code}' already exists")]
    DuplicateCode { code: String },

    /// Anything the storage layer could not do. Never caused by the caller's input.
    #[error("Storage failure: {0}")]
    Storage(#[source] DbError),
}

impl ScenarioError {
    pub fn invalid_code(code: &str) -> Self {
        ScenarioError::InvalidCode {
            code: code.to_string(),
            message: VALIDATION_FAILED.to_string(),
        }
    }

    /// The country code this error is about, if any.
    pub fn code(&self) -> Option<&str> {
        match self {
            ScenarioError::InvalidCode { code, .. }
            | ScenarioError::NotFound { code }
            | ScenarioError::DuplicateCode { code } => Some(code),
            ScenarioError::Storage(_) => None,
        }
    }

    /// Maps a storage error raised while working on `code`.
    ///
    /// The storage layer has the final say on uniqueness and existence, so its
    /// key conflicts and zero-row writes become domain errors rather than
    /// storage failures.
    pub(crate) fn from_storage(err: DbError, code: &str) -> Self {
        match err {
            DbError::DuplicateKey(key) => ScenarioError::DuplicateCode { code: key },
            DbError::NotFound => ScenarioError::NotFound {
                code: code.to_string(),
            },
            other => ScenarioError::Storage(other),
        }
    }
}
