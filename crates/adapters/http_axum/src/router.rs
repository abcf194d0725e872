//! Axum router assembly.

use axum::Router;
use axum::middleware;
use tower::Layer;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use polystat_app::ports::PolygonRepository;

use crate::error::handle_panic;
use crate::normalize::normalize_route;
use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Nests API routes under `/api` and merges the static page routes at `/`.
/// Paths are rewritten by [`normalize_route`] before they reach routing, so
/// the routed app sits behind a fallback service.
///
/// Layers, from the outside in:
/// - [`CorsLayer::permissive`] so any origin may call the API
/// - [`TraceLayer`] logging each HTTP request/response at `DEBUG`
/// - [`CatchPanicLayer`] turning a handler panic into a JSON `500`
pub fn build<R>(state: AppState<R>) -> Router
where
    R: PolygonRepository + Send + Sync + 'static,
{
    let routed = Router::new()
        .nest("/api", crate::api::routes::<R>())
        .merge(crate::assets::routes(&state.public_dir))
        .with_state(state);

    Router::new()
        .fallback_service(middleware::map_request(normalize_route).layer(routed))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
