//! # polystat-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve a small **JSON API** for the dashboard
//!   (`POST /api/data`, `GET /api/data`, `GET /api/data/{polygon_id}`)
//! - Serve the two **static dashboard pages** (`/` and `/customer`) and any
//!   other file found under the public asset directory
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results and failures into JSON responses with an
//!   `error` message and the matching status code
//! - Allow cross-origin requests from any origin
//! - Match routes ignoring letter case and a trailing slash
//!
//! ## Dependency rule
//! Depends on `polystat-app` (for port traits and services) and `polystat-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod assets;
pub mod error;
pub mod extract;
pub mod normalize;
pub mod router;
pub mod state;
