//! Polygon identifiers and the canonical keys they are stored under.

use std::fmt;

use serde::Serialize;
use serde_json::{Number, Value};

use crate::coerce::number_text;
use crate::error::ValidationError;

/// Identifier supplied by a client on write: either a string or a number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PolygonId {
    Text(String),
    Number(Number),
}

impl PolygonId {
    /// Accept a JSON value as an identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidPolygonId`] for anything other than a
    /// JSON string or number.
    pub fn from_json(value: &Value) -> Result<Self, ValidationError> {
        match value {
            Value::String(s) => Ok(Self::Text(s.clone())),
            Value::Number(n) => Ok(Self::Number(n.clone())),
            _ => Err(ValidationError::InvalidPolygonId),
        }
    }

    /// Canonical store key. Numeric ids map to their printed form, so `7`
    /// and `"7"` address the same entry.
    #[must_use]
    pub fn key(&self) -> PolygonKey {
        match self {
            Self::Text(s) => PolygonKey(s.clone()),
            Self::Number(n) => PolygonKey(number_text(n)),
        }
    }
}

impl fmt::Display for PolygonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Number(n) => f.write_str(&number_text(n)),
        }
    }
}

/// String key under which a polygon's records are stored and looked up.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PolygonKey(String);

impl PolygonKey {
    /// Wrap a raw key, e.g. a URL path segment.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Borrow the key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PolygonKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PolygonKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}
