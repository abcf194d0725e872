//! # polystat-adapter-storage-memory
//!
//! Volatile, process-local storage adapter.
//!
//! ## Responsibilities
//! - Implement the repository port trait defined in `polystat-app::ports::storage`
//! - Keep polygon entries in key insertion order for the "read all" endpoint
//! - Hold nothing across restarts: every instance starts empty
//!
//! ## Dependency rule
//! Depends on `polystat-app` (for port traits) and `polystat-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

pub mod error;
pub mod polygon_repo;

pub use polygon_repo::InMemoryPolygonRepository;
