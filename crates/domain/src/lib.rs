//! # polystat-domain
//!
//! Pure domain model for the polystat dashboard backend.
//!
//! ## Responsibilities
//! - Foundational types: polygon identifiers, canonical store keys, error conventions
//! - Define **Polygon records** (operating/cancelled counters for the `rtl` and
//!   `cfn` categories plus their free-text route lists)
//! - Define the **submission** shape accepted on write and the validation that
//!   turns it into a record
//! - Reproduce the lenient coercions dashboard clients rely on (`parseInt`-style
//!   counters, falsy text fields defaulting to `"N/A"`)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod coerce;
pub mod error;
pub mod id;

pub mod record;
pub mod submission;
