//! HTTP API layer with Axum routes.
//!
//! This crate is a thin pass-through boundary: it deserializes requests,
//! hands them to the engine in `debtpath-core`, and returns the result
//! verbatim. No monetary value is recalculated or altered here.

pub mod routes;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Creates the main application router.
pub fn create_router() -> Router {
    Router::new()
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
