//! Request body extraction for dashboard writes.

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use axum::http::HeaderMap;
use axum::http::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ApiError;

/// JSON body extractor that tolerates what browser forms send.
///
/// - A request that is not declared as JSON, or has an empty body, yields
///   `T::default()` so field validation reports what is missing.
/// - A top-level JSON array also yields `T::default()`.
/// - Malformed JSON, or a top-level primitive, is an unanticipated error
///   and becomes a `500`.
#[derive(Debug, Clone, Default)]
pub struct JsonBody<T>(pub T);

fn is_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
        return false;
    };
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    essence == "application/json"
        || essence
            .strip_prefix("application/")
            .is_some_and(|subtype| subtype.ends_with("+json"))
}

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !is_json_content_type(req.headers()) {
            return Ok(Self(T::default()));
        }

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(ApiError::internal)?;
        if bytes.is_empty() {
            return Ok(Self(T::default()));
        }

        match serde_json::from_slice::<Value>(&bytes).map_err(ApiError::internal)? {
            object @ Value::Object(_) => serde_json::from_value(object)
                .map(Self)
                .map_err(ApiError::internal),
            Value::Array(_) => Ok(Self(T::default())),
            _ => Err(ApiError::internal("request body must be a JSON object")),
        }
    }
}
