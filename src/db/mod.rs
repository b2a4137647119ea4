//! Database module
//!
//! This module handles database connections, migrations, and the
//! registration store implementations.

pub mod connection;
pub mod repositories;
pub mod store;

use sqlx::PgPool;

pub use connection::*;
pub use store::{RegistrationOrder, RegistrationStore};

/// Run database migrations
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
