//! Route definitions for the mowing check server

use axum::{routing::post, Router};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Mowing check (public). Only POST carries a payload.
        .route(
            "/check-mowing",
            post(handlers::check_mowing)
                .options(handlers::preflight)
                .fallback(handlers::method_not_allowed),
        )
}
