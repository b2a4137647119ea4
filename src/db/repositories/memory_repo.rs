//! In-process registration repository
//!
//! Keeps records in insertion order behind a single lock. Used for local
//! development (`STORE_BACKEND=memory`) and throughout the test suite.

use async_trait::async_trait;
use chrono::Utc;
use futures::stream::{self, BoxStream, StreamExt};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
    db::store::{RegistrationOrder, RegistrationStore},
    error::{AppError, AppResult},
    models::{NewRegistration, Registration},
};

#[derive(Default)]
struct Inner {
    /// Insertion order == creation order
    records: Vec<Registration>,
    sequence: u64,
}

/// Registration store held entirely in memory
#[derive(Default)]
pub struct MemoryRegistrationStore {
    inner: RwLock<Inner>,
}

impl MemoryRegistrationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored registrations
    pub async fn len(&self) -> usize {
        self.inner.read().await.records.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl RegistrationStore for MemoryRegistrationStore {
    async fn next_sequence(&self) -> AppResult<u64> {
        let mut inner = self.inner.write().await;
        inner.sequence += 1;
        Ok(inner.sequence)
    }

    async fn insert(&self, registration: NewRegistration) -> AppResult<Registration> {
        let mut inner = self.inner.write().await;

        if inner
            .records
            .iter()
            .any(|r| r.registration_id == registration.registration_id)
        {
            return Err(AppError::DuplicateKey(format!(
                "registrationId {}",
                registration.registration_id
            )));
        }

        let now = Utc::now();
        let record = Registration {
            id: Uuid::new_v4(),
            registration_id: registration.registration_id,
            college_name: registration.college_name,
            college_address: registration.college_address,
            faculty_incharge: registration.faculty_incharge,
            contact_number: registration.contact_number,
            events: registration.events,
            created_at: now,
            updated_at: now,
        };
        inner.records.push(record.clone());

        Ok(record)
    }

    async fn find_by_registration_id(
        &self,
        registration_id: &str,
    ) -> AppResult<Option<Registration>> {
        let inner = self.inner.read().await;
        Ok(inner
            .records
            .iter()
            .find(|r| r.registration_id == registration_id)
            .cloned())
    }

    async fn find_all(
        &self,
        order: RegistrationOrder,
    ) -> AppResult<BoxStream<'_, AppResult<Registration>>> {
        // Snapshot so the lock is not held while the caller iterates
        let mut snapshot = self.inner.read().await.records.clone();
        if order == RegistrationOrder::CreatedDesc {
            snapshot.reverse();
        }

        Ok(stream::iter(snapshot.into_iter().map(Ok)).boxed())
    }

    async fn save(&self, registration: &Registration) -> AppResult<Registration> {
        let mut inner = self.inner.write().await;

        let stored = inner
            .records
            .iter_mut()
            .find(|r| r.registration_id == registration.registration_id)
            .ok_or_else(|| AppError::RegistrationNotFound(registration.registration_id.clone()))?;

        stored.events = registration.events.clone();
        stored.updated_at = Utc::now();

        Ok(stored.clone())
    }
}
