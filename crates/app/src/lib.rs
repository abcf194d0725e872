//! # polystat-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `PolygonRepository` — replace, look up and enumerate polygon records
//! - Define **driving/inbound ports** as use-case structs:
//!   - `PolygonService` — submit a write, read one polygon, read all
//! - Orchestrate domain objects without knowing *how* storage or IO works
//!
//! ## Dependency rule
//! Depends on `polystat-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
