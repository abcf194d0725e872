//! JSON REST API handlers.

#[allow(clippy::missing_errors_doc)]
pub mod data;

use axum::Router;
use axum::routing::get;

use polystat_app::ports::PolygonRepository;

use crate::error::route_not_found;
use crate::state::AppState;

/// Build the `/api` sub-router.
///
/// A known path hit with an unsupported method answers like an unknown path.
pub fn routes<R>() -> Router<AppState<R>>
where
    R: PolygonRepository + Send + Sync + 'static,
{
    Router::new()
        .route(
            "/data",
            get(data::list::<R>)
                .post(data::create::<R>)
                .fallback(route_not_found),
        )
        .route(
            "/data/{polygon_id}",
            get(data::get::<R>).fallback(route_not_found),
        )
}
