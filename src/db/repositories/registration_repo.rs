//! PostgreSQL registration repository

use async_trait::async_trait;
use futures::{stream::BoxStream, StreamExt};
use sqlx::{types::Json, PgPool};
use uuid::Uuid;

use crate::{
    constants::REGISTRATION_SEQUENCE,
    db::store::{RegistrationOrder, RegistrationStore},
    error::{AppError, AppResult},
    models::{NewRegistration, Registration, RegistrationRow},
};

const SELECT_CREATED_DESC: &str = r#"SELECT * FROM registrations ORDER BY created_at DESC"#;
const SELECT_CREATED_ASC: &str = r#"SELECT * FROM registrations ORDER BY created_at ASC"#;

/// Registration store backed by the `registrations` table
#[derive(Clone)]
pub struct PgRegistrationStore {
    pool: PgPool,
}

impl PgRegistrationStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RegistrationStore for PgRegistrationStore {
    async fn next_sequence(&self) -> AppResult<u64> {
        // Row lock on the counter serializes concurrent increments
        let value = sqlx::query_scalar::<_, i64>(
            r#"
            UPDATE sequence_counters
            SET value = value + 1
            WHERE name = $1
            RETURNING value
            "#,
        )
        .bind(REGISTRATION_SEQUENCE)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| {
            AppError::StoreUnavailable(format!("sequence '{}' is missing", REGISTRATION_SEQUENCE))
        })?;

        u64::try_from(value)
            .map_err(|_| AppError::StoreUnavailable(format!("negative sequence value {}", value)))
    }

    async fn insert(&self, registration: NewRegistration) -> AppResult<Registration> {
        let row = sqlx::query_as::<_, RegistrationRow>(
            r#"
            INSERT INTO registrations (
                id, registration_id, college_name, college_address,
                faculty_incharge, contact_number, events
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&registration.registration_id)
        .bind(&registration.college_name)
        .bind(&registration.college_address)
        .bind(&registration.faculty_incharge)
        .bind(&registration.contact_number)
        .bind(Json(&registration.events))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match AppError::from(e) {
            AppError::DuplicateKey(_) => {
                AppError::DuplicateKey(format!("registrationId {}", registration.registration_id))
            }
            other => other,
        })?;

        Ok(row.into())
    }

    async fn find_by_registration_id(
        &self,
        registration_id: &str,
    ) -> AppResult<Option<Registration>> {
        let row = sqlx::query_as::<_, RegistrationRow>(
            r#"SELECT * FROM registrations WHERE registration_id = $1"#,
        )
        .bind(registration_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Registration::from))
    }

    async fn find_all(
        &self,
        order: RegistrationOrder,
    ) -> AppResult<BoxStream<'_, AppResult<Registration>>> {
        let sql = match order {
            RegistrationOrder::CreatedDesc => SELECT_CREATED_DESC,
            RegistrationOrder::CreatedAsc => SELECT_CREATED_ASC,
        };

        let stream = sqlx::query_as::<_, RegistrationRow>(sql)
            .fetch(&self.pool)
            .map(|row| row.map(Registration::from).map_err(AppError::from))
            .boxed();

        Ok(stream)
    }

    async fn save(&self, registration: &Registration) -> AppResult<Registration> {
        let row = sqlx::query_as::<_, RegistrationRow>(
            r#"
            UPDATE registrations
            SET events = $2, updated_at = NOW()
            WHERE registration_id = $1
            RETURNING *
            "#,
        )
        .bind(&registration.registration_id)
        .bind(Json(&registration.events))
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::RegistrationNotFound(registration.registration_id.clone()))?;

        Ok(row.into())
    }
}
