//! Shared application state for axum handlers.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use polystat_app::ports::PolygonRepository;
use polystat_app::services::polygon_service::PolygonService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository type to avoid dynamic dispatch.
/// `Clone` is implemented manually so the repository itself does not need to
/// be `Clone` — only the `Arc` wrappers are cloned.
pub struct AppState<R> {
    /// Polygon write/read service.
    pub polygon_service: Arc<PolygonService<R>>,
    /// Directory the static dashboard pages are served from.
    pub public_dir: Arc<Path>,
}

impl<R> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            polygon_service: Arc::clone(&self.polygon_service),
            public_dir: Arc::clone(&self.public_dir),
        }
    }
}

impl<R> AppState<R>
where
    R: PolygonRepository + Send + Sync + 'static,
{
    /// Create a new application state from a service instance.
    pub fn new(polygon_service: PolygonService<R>, public_dir: impl Into<PathBuf>) -> Self {
        Self {
            polygon_service: Arc::new(polygon_service),
            public_dir: Arc::from(public_dir.into()),
        }
    }
}
