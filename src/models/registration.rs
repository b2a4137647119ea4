//! Registration model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{types::Json, FromRow};
use uuid::Uuid;

use crate::constants::ROUND_COUNT;

/// A college/team submission covering one or more events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub id: Uuid,
    pub registration_id: String,
    pub college_name: String,
    pub college_address: String,
    pub faculty_incharge: String,
    pub contact_number: String,
    pub events: Vec<Event>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Registration {
    /// First event whose name matches exactly (case-sensitive)
    pub fn event_mut(&mut self, event_name: &str) -> Option<&mut Event> {
        self.events.iter_mut().find(|e| e.event_name == event_name)
    }
}

/// Registration as handed to the store before identity and timestamps are assigned
#[derive(Debug, Clone)]
pub struct NewRegistration {
    pub registration_id: String,
    pub college_name: String,
    pub college_address: String,
    pub faculty_incharge: String,
    pub contact_number: String,
    pub events: Vec<Event>,
}

/// Database row; events live in a JSONB column
#[derive(Debug, FromRow)]
pub struct RegistrationRow {
    pub id: Uuid,
    pub registration_id: String,
    pub college_name: String,
    pub college_address: String,
    pub faculty_incharge: String,
    pub contact_number: String,
    pub events: Json<Vec<Event>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<RegistrationRow> for Registration {
    fn from(row: RegistrationRow) -> Self {
        Self {
            id: row.id,
            registration_id: row.registration_id,
            college_name: row.college_name,
            college_address: row.college_address,
            faculty_incharge: row.faculty_incharge,
            contact_number: row.contact_number,
            events: row.events.0,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// A competition activity inside a registration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub event_name: String,
    pub members_count: u32,
    #[serde(default)]
    pub member_names: Vec<String>,
    #[serde(default)]
    pub marks: Marks,
    #[serde(default)]
    pub status: EventStatus,
}

impl Event {
    /// Unscored event with all-zero marks
    pub fn new(event_name: String, members_count: u32, member_names: Vec<String>) -> Self {
        Self {
            event_name,
            members_count,
            member_names,
            marks: Marks::default(),
            status: EventStatus::Unscored,
        }
    }

    /// Replace the marks wholesale; the event is scored from then on
    pub fn record_marks(&mut self, marks: Marks) {
        self.marks = marks;
        self.status = EventStatus::Scored;
    }
}

/// Event scoring status; only ever moves from unscored to scored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    #[default]
    Unscored,
    Scored,
}

impl std::fmt::Display for EventStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unscored => write!(f, "unscored"),
            Self::Scored => write!(f, "scored"),
        }
    }
}

/// Five-round score record of one event
///
/// `total` is derived when the marks are recorded and is not re-validated
/// afterwards; rounds changed through any other path leave it stale.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Marks {
    #[serde(default)]
    pub round1: f64,
    #[serde(default)]
    pub round2: f64,
    #[serde(default)]
    pub round3: f64,
    #[serde(default)]
    pub round4: f64,
    #[serde(default)]
    pub round5: f64,
    #[serde(default)]
    pub total: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scored_at: Option<DateTime<Utc>>,
}

impl Marks {
    /// Build a full marks record; absent rounds count as zero.
    ///
    /// Returns `None` when a round or the total is not finite: JSON has no
    /// encoding for those and the record could not be read back.
    pub fn from_rounds(
        rounds: [Option<f64>; ROUND_COUNT],
        scored_at: DateTime<Utc>,
    ) -> Option<Self> {
        let [round1, round2, round3, round4, round5] = rounds.map(|r| r.unwrap_or(0.0));
        let total = round1 + round2 + round3 + round4 + round5;

        if !total.is_finite() {
            return None;
        }

        Some(Self {
            round1,
            round2,
            round3,
            round4,
            round5,
            total,
            scored_at: Some(scored_at),
        })
    }

    pub fn rounds(&self) -> [f64; ROUND_COUNT] {
        [self.round1, self.round2, self.round3, self.round4, self.round5]
    }
}
