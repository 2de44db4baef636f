//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use incident_board_domain::error::IncidentError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
pub(crate) struct ErrorBody {
    pub(crate) error: String,
}

/// Maps handler failures to an HTTP response with appropriate status code.
#[derive(Debug)]
pub enum ApiError {
    /// The request body is not a JSON object.
    InvalidBody(serde_json::Error),
    /// An application service failed.
    Incident(IncidentError),
}

impl From<IncidentError> for ApiError {
    fn from(err: IncidentError) -> Self {
        Self::Incident(err)
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidBody(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::InvalidBody(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            Self::Incident(IncidentError::Storage(err)) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
