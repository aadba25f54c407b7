use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use climate_core::StoreError;
use serde_json::json;
use thiserror::Error;

/// Errors a route handler can surface to the client.
///
/// Store errors float up with `?` and are translated to status codes here,
/// at the HTTP boundary, rather than inside the data access layer.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("no observations recorded for the requested range")]
    NoData,

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::InvalidDate(_) => StatusCode::BAD_REQUEST,
            ApiError::NoData | ApiError::Store(StoreError::EmptyDataset) => StatusCode::NOT_FOUND,
            ApiError::Store(StoreError::MalformedDate(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Store(StoreError::Unavailable { .. } | StoreError::Database(_)) => {
                StatusCode::SERVICE_UNAVAILABLE
            }
        };

        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
