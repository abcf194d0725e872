//! HTTP error response mapping.

use std::any::Any;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use polystat_domain::error::PolystatError;

const ROUTE_NOT_FOUND: &str = "Route not found.";
const INTERNAL_SERVER_ERROR: &str = "Internal server error.";

/// JSON error body returned by every failing request.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps request failures to an HTTP response with appropriate status code.
#[derive(Debug)]
pub enum ApiError {
    /// Failure reported by the application layer.
    Domain(PolystatError),
    /// No route (and no static file) matches the request.
    RouteNotFound,
    /// Anything the handlers did not anticipate.
    Internal(Box<dyn std::error::Error + Send + Sync>),
}

impl ApiError {
    /// Wrap an unanticipated error.
    pub fn internal(err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::Internal(err.into())
    }
}

impl From<PolystatError> for ApiError {
    fn from(err: PolystatError) -> Self {
        Self::Domain(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::Domain(PolystatError::Validation(err)) => {
                (StatusCode::BAD_REQUEST, err.to_string())
            }
            Self::Domain(PolystatError::NotFound(err)) => (StatusCode::NOT_FOUND, err.to_string()),
            Self::Domain(PolystatError::Storage(err)) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    INTERNAL_SERVER_ERROR.to_string(),
                )
            }
            Self::RouteNotFound => (StatusCode::NOT_FOUND, ROUTE_NOT_FOUND.to_string()),
            Self::Internal(err) => {
                tracing::error!(error = %err, "unhandled error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    INTERNAL_SERVER_ERROR.to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

/// Fallback handler for requests no route claims.
pub async fn route_not_found() -> ApiError {
    ApiError::RouteNotFound
}

/// Turn a handler panic into a logged `500` instead of a dropped connection.
#[allow(clippy::needless_pass_by_value)]
pub fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    tracing::error!(panic = detail, "unhandled error");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorBody {
            error: INTERNAL_SERVER_ERROR.to_string(),
        }),
    )
        .into_response()
}
