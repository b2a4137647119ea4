//! Registration response DTOs

use serde::Serialize;

use crate::models::Event;

/// Create registration response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRegistrationResponse {
    pub success: bool,
    pub message: String,
    pub registration_id: String,
}

/// Update marks response, echoing the event with its new marks
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMarksResponse {
    pub success: bool,
    pub message: String,
    pub event: Event,
}

/// One (college, event) row of the leaderboard
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub college_name: String,
    pub event_name: String,
    pub total: f64,
}
