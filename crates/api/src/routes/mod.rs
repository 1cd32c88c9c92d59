//! API route definitions.

use axum::Router;

pub mod health;
pub mod repayment;

/// Creates the API router with all routes.
pub fn api_routes() -> Router {
    Router::new()
        .merge(health::routes())
        .merge(repayment::routes())
}
