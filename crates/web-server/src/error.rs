use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use scenarios::ScenarioError;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Scenario(#[from] ScenarioError),
    #[error("Invalid request payload: {0}")]
    Payload(#[from] JsonRejection),
}

/// The JSON body of every failed request.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    /// The offending country code, when the failure is about one.
    pub error_code: Option<String>,
    pub error_message: String,
}

/// Converts our custom `AppError` into an HTTP response.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_code, error_message) = match self {
            AppError::Scenario(ScenarioError::Storage(db_err)) => {
                tracing::error!(error = ?db_err, "Database error.");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    None,
                    "An internal database error occurred".to_string(),
                )
            }
            AppError::Scenario(err) => {
                let status = match err {
                    ScenarioError::InvalidCode { .. } => StatusCode::BAD_REQUEST,
                    ScenarioError::NotFound { .. } => StatusCode::NOT_FOUND,
                    ScenarioError::DuplicateCode { .. } => StatusCode::CONFLICT,
                    ScenarioError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
                };
                tracing::debug!(status = %status, error = %err, "Request rejected.");
                (status, err.code().map(str::to_string), err.to_string())
            }
            AppError::Payload(rejection) => {
                tracing::debug!(error = %rejection, "Malformed request payload.");
                (rejection.status(), None, rejection.body_text())
            }
        };

        let body = Json(ErrorBody {
            error_code,
            error_message,
        });
        (status, body).into_response()
    }
}
