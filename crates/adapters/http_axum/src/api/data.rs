//! JSON REST handlers for polygon data.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use polystat_app::ports::PolygonRepository;
use polystat_domain::id::PolygonKey;
use polystat_domain::record::{PolygonRecord, PolygonSnapshot};
use polystat_domain::submission::PolygonSubmission;

use crate::error::ApiError;
use crate::extract::JsonBody;
use crate::state::AppState;

/// Confirmation body returned on a successful write.
#[derive(Serialize)]
pub struct MessageBody {
    pub message: &'static str,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<PolygonSnapshot>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<Vec<PolygonRecord>>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created,
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created => (
                StatusCode::CREATED,
                Json(MessageBody {
                    message: "Data added successfully.",
                }),
            )
                .into_response(),
        }
    }
}

/// `GET /api/data`
pub async fn list<R>(State(state): State<AppState<R>>) -> Result<ListResponse, ApiError>
where
    R: PolygonRepository + Send + Sync + 'static,
{
    let snapshot = state.polygon_service.list().await?;
    Ok(ListResponse::Ok(Json(snapshot)))
}

/// `GET /api/data/:polygon_id`
///
/// The path segment is used as the key verbatim; a polygon written with a
/// numeric id is found under that number's printed form.
pub async fn get<R>(
    State(state): State<AppState<R>>,
    Path(polygon_id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    R: PolygonRepository + Send + Sync + 'static,
{
    let records = state
        .polygon_service
        .get(&PolygonKey::new(polygon_id))
        .await?;
    Ok(GetResponse::Ok(Json(records)))
}

/// `POST /api/data`
pub async fn create<R>(
    State(state): State<AppState<R>>,
    JsonBody(submission): JsonBody<PolygonSubmission>,
) -> Result<CreateResponse, ApiError>
where
    R: PolygonRepository + Send + Sync + 'static,
{
    state.polygon_service.submit(submission).await?;
    Ok(CreateResponse::Created)
}
