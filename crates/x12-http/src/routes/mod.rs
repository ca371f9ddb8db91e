//! Route handlers for the X12 HTTP shim.

pub mod x12;

use axum::routing::post;
use axum::Router;

pub fn api_routes() -> Router {
    Router::new().route("/x12", post(x12::post_x12))
}
