//! Registration and scoring handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    routing::{get, put},
    Router,
};

use crate::state::AppState;

/// Registration routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list_registrations).post(handler::create_registration))
        .route("/leaderboard", get(handler::get_leaderboard))
        .route("/{registration_id}", get(handler::get_registration))
        .route(
            "/{registration_id}/event/{event_name}/marks",
            put(handler::update_marks),
        )
}
