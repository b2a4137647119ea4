//! RegBoard - College Event Registration & Scoring
//!
//! This library provides the core of a small backend that registers
//! colleges into competition events, records per-round marks and ranks
//! every (college, event) pair on a leaderboard.
//!
//! # Architecture
//!
//! The application follows a layered architecture:
//! - **Handlers**: HTTP request handlers (thin layer)
//! - **Services**: Business logic, validation and derived scores
//! - **Store**: `RegistrationStore` trait with PostgreSQL and in-memory backends
//! - **Models**: Domain models

pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod state;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use handlers::create_router;
pub use state::AppState;
