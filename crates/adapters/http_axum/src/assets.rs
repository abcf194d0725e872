//! Static dashboard pages served from the public asset directory.

use std::path::Path;

use axum::Router;
use axum::handler::HandlerWithoutStateExt;
use axum::routing::get_service;
use tower_http::services::{ServeDir, ServeFile};

use crate::error::route_not_found;

/// Landing page served at `/`.
pub const INDEX_PAGE: &str = "index.html";
/// Customer-facing page served at `/customer`.
pub const CUSTOMER_PAGE: &str = "customer.html";

/// Build the page routes plus a fallback that serves any other file under
/// `public_dir` verbatim. Misses, and non-`GET` requests for files, answer
/// with the JSON "route not found" body.
pub fn routes<S>(public_dir: &Path) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    let files = ServeDir::new(public_dir)
        .call_fallback_on_method_not_allowed(true)
        .not_found_service(route_not_found.into_service());

    Router::new()
        .route(
            "/",
            get_service(ServeFile::new(public_dir.join(INDEX_PAGE))).fallback(route_not_found),
        )
        .route(
            "/customer",
            get_service(ServeFile::new(public_dir.join(CUSTOMER_PAGE)))
                .fallback(route_not_found),
        )
        .fallback_service(files)
}
