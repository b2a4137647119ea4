//! Registration handler implementations

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    handlers::extract::AppJson,
    models::Registration,
    services::RegistrationService,
    state::AppState,
};

use super::{
    request::{CreateRegistrationRequest, UpdateMarksRequest},
    response::{CreateRegistrationResponse, LeaderboardEntry, UpdateMarksResponse},
};

/// Register a college for one or more events
pub async fn create_registration(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateRegistrationRequest>,
) -> AppResult<(StatusCode, Json<CreateRegistrationResponse>)> {
    let created = RegistrationService::create(state.store(), payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// List all registrations, newest first
pub async fn list_registrations(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Registration>>> {
    let registrations = RegistrationService::list(state.store()).await?;
    Ok(Json(registrations))
}

/// Get a single registration by its public id
pub async fn get_registration(
    State(state): State<AppState>,
    Path(registration_id): Path<String>,
) -> AppResult<Json<Registration>> {
    let registration = RegistrationService::get(state.store(), &registration_id).await?;
    Ok(Json(registration))
}

/// Record the marks of one event
pub async fn update_marks(
    State(state): State<AppState>,
    Path((registration_id, event_name)): Path<(String, String)>,
    AppJson(payload): AppJson<UpdateMarksRequest>,
) -> AppResult<Json<UpdateMarksResponse>> {
    let updated =
        RegistrationService::update_marks(state.store(), &registration_id, &event_name, payload)
            .await?;
    Ok(Json(updated))
}

/// Leaderboard across every (college, event) pair
pub async fn get_leaderboard(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<LeaderboardEntry>>> {
    let leaderboard = RegistrationService::leaderboard(state.store()).await?;
    Ok(Json(leaderboard))
}
