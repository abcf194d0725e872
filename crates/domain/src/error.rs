//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`PolystatError`] via `#[from]`. The `Display` strings of the client-facing
//! variants are the exact messages returned in HTTP error bodies.

/// Top-level error shared by the application and adapter layers.
#[derive(Debug, thiserror::Error)]
pub enum PolystatError {
    /// Malformed or incomplete client input.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Lookup miss for a polygon key.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// Failure inside a storage adapter.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Reasons a write submission is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// `polygonId` or `currentDate` is falsy, or a counter is null/absent.
    #[error("All fields are required.")]
    MissingFields,

    /// `polygonId` is present but neither a string nor a number.
    #[error("Invalid polygon ID. Must be a string or number.")]
    InvalidPolygonId,
}

/// No records are stored under the requested polygon key.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Polygon data not found.")]
pub struct NotFoundError {
    /// The key that was looked up.
    pub key: String,
}
