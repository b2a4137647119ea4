//! Registration store contract

use async_trait::async_trait;
use futures::stream::BoxStream;

use crate::{
    error::AppResult,
    models::{NewRegistration, Registration},
};

/// Ordering for full-collection scans
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegistrationOrder {
    /// Newest first
    #[default]
    CreatedDesc,
    /// Oldest first (insertion order)
    CreatedAsc,
}

/// Durable keyed storage of registration records
///
/// Every call is a single-document operation; nothing here spans more than
/// one registration atomically.
#[async_trait]
pub trait RegistrationStore: Send + Sync {
    /// Advance the registration counter and return the new value.
    ///
    /// Atomic with respect to concurrent callers: no two calls observe the
    /// same value.
    async fn next_sequence(&self) -> AppResult<u64>;

    /// Persist a new registration, assigning its internal id and timestamps.
    ///
    /// Fails with `DuplicateKey` when the public registration id is taken.
    async fn insert(&self, registration: NewRegistration) -> AppResult<Registration>;

    /// Look up a registration by its public id
    async fn find_by_registration_id(&self, registration_id: &str)
        -> AppResult<Option<Registration>>;

    /// Lazily scan every registration in the requested order
    async fn find_all(
        &self,
        order: RegistrationOrder,
    ) -> AppResult<BoxStream<'_, AppResult<Registration>>>;

    /// Persist the events of an existing registration and bump `updated_at`.
    ///
    /// Fails with `RegistrationNotFound` if the record no longer exists.
    async fn save(&self, registration: &Registration) -> AppResult<Registration>;
}
