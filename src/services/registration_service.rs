//! Registration service
//!
//! Create, list, score and rank registrations. Validation and the derived
//! `total` of each event's marks live here; the store only persists.

use chrono::Utc;
use futures::TryStreamExt;
use validator::Validate;

use crate::{
    constants::{messages, REGISTRATION_ID_WIDTH},
    db::{RegistrationOrder, RegistrationStore},
    error::{AppError, AppResult},
    handlers::registrations::{
        request::{CreateRegistrationRequest, EventRequest, UpdateMarksRequest},
        response::{CreateRegistrationResponse, LeaderboardEntry, UpdateMarksResponse},
    },
    models::{Event, Marks, NewRegistration, Registration},
};

/// Render a sequence number as a public registration id ("01", "02", ..., "100")
pub fn format_registration_id(sequence: u64) -> String {
    format!("{:0width$}", sequence, width = REGISTRATION_ID_WIDTH)
}

/// Registration service for business logic
pub struct RegistrationService;

impl RegistrationService {
    /// Register a college for its events and assign the next public id
    pub async fn create(
        store: &dyn RegistrationStore,
        payload: CreateRegistrationRequest,
    ) -> AppResult<CreateRegistrationResponse> {
        payload.validate()?;

        let events = payload
            .events
            .into_iter()
            .map(Self::to_event)
            .collect::<AppResult<Vec<_>>>()?;

        // Only advance the counter once the input is known to be valid
        let registration_id = format_registration_id(store.next_sequence().await?);

        let registration = store
            .insert(NewRegistration {
                registration_id,
                college_name: payload.college_name,
                college_address: payload.college_address,
                faculty_incharge: payload.faculty_incharge,
                contact_number: payload.contact_number,
                events,
            })
            .await?;

        tracing::info!(
            registration_id = %registration.registration_id,
            college = %registration.college_name,
            events = registration.events.len(),
            "Registration created"
        );

        Ok(CreateRegistrationResponse {
            success: true,
            message: messages::REGISTRATION_CREATED.to_string(),
            registration_id: registration.registration_id,
        })
    }

    /// All registrations, newest first
    pub async fn list(store: &dyn RegistrationStore) -> AppResult<Vec<Registration>> {
        store
            .find_all(RegistrationOrder::CreatedDesc)
            .await?
            .try_collect()
            .await
    }

    /// Get a registration by its public id
    pub async fn get(
        store: &dyn RegistrationStore,
        registration_id: &str,
    ) -> AppResult<Registration> {
        store
            .find_by_registration_id(registration_id)
            .await?
            .ok_or_else(|| AppError::RegistrationNotFound(registration_id.to_string()))
    }

    /// Overwrite the marks of the first event named `event_name`.
    ///
    /// All five rounds are replaced; rounds absent from the request become 0.
    pub async fn update_marks(
        store: &dyn RegistrationStore,
        registration_id: &str,
        event_name: &str,
        payload: UpdateMarksRequest,
    ) -> AppResult<UpdateMarksResponse> {
        let marks = Marks::from_rounds(payload.rounds(), Utc::now()).ok_or_else(|| {
            AppError::Validation("round values must add up to a finite total".to_string())
        })?;
        let total = marks.total;

        let mut registration = Self::get(store, registration_id).await?;

        registration
            .event_mut(event_name)
            .ok_or_else(|| AppError::EventNotFound {
                registration_id: registration_id.to_string(),
                event_name: event_name.to_string(),
            })?
            .record_marks(marks);

        let saved = store.save(&registration).await?;
        let event = saved
            .events
            .into_iter()
            .find(|e| e.event_name == event_name)
            .ok_or_else(|| AppError::EventNotFound {
                registration_id: registration_id.to_string(),
                event_name: event_name.to_string(),
            })?;

        tracing::info!(
            registration_id = %registration_id,
            event = %event_name,
            total,
            "Marks updated"
        );

        Ok(UpdateMarksResponse {
            success: true,
            message: messages::MARKS_UPDATED.to_string(),
            event,
        })
    }

    /// Flatten every (college, event) pair and rank by total, highest first.
    ///
    /// Equal totals keep registration order, then event order.
    pub async fn leaderboard(store: &dyn RegistrationStore) -> AppResult<Vec<LeaderboardEntry>> {
        let registrations: Vec<Registration> = store
            .find_all(RegistrationOrder::CreatedAsc)
            .await?
            .try_collect()
            .await?;

        let mut entries: Vec<LeaderboardEntry> = registrations
            .into_iter()
            .flat_map(|registration| {
                let college_name = registration.college_name;
                registration
                    .events
                    .into_iter()
                    .map(move |event| LeaderboardEntry {
                        college_name: college_name.clone(),
                        event_name: event.event_name,
                        total: event.marks.total,
                    })
            })
            .collect();

        // sort_by is stable
        entries.sort_by(|a, b| b.total.total_cmp(&a.total));

        Ok(entries)
    }

    fn to_event(request: EventRequest) -> AppResult<Event> {
        let members_count = request
            .members_count
            .and_then(|n| u32::try_from(n).ok())
            .ok_or_else(|| {
                AppError::Validation(format!(
                    "membersCount of '{}' must be a non-negative integer",
                    request.event_name
                ))
            })?;

        Ok(Event::new(
            request.event_name,
            members_count,
            request.member_names,
        ))
    }
}
