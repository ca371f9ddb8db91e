//! X12 HTTP shim (spec.md §6).
//!
//! A single `POST /x12` endpoint over the same Engine API the CLI uses:
//! parse, validate, and render either models or raw segments as JSON.
//! There is no persisted state — the Schema Registry is immutable and
//! process-wide (spec.md §6, "Persisted state: none").

pub mod error;
pub mod routes;

use axum::Router;
use tower_http::trace::TraceLayer;

/// Builds the complete Axum router.
pub fn build_router() -> Router {
    routes::api_routes().layer(TraceLayer::new_for_http())
}
