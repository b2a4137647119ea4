//! HTTP Request Handlers
//!
//! This module contains all HTTP request handlers organized by domain.

pub mod extract;
pub mod health;
pub mod registrations;

use axum::{middleware, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{constants::API_BASE_PATH, middleware::logging_middleware, state::AppState};

/// Create all API routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .nest("/registrations", registrations::routes())
}

/// Build the full application router with its HTTP layers
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest(API_BASE_PATH, routes())
        .layer(middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
