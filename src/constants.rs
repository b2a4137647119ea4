//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 5000;

// =============================================================================
// STORE DEFAULTS
// =============================================================================

/// Default maximum database connections in the pool
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 10;

/// Store backend identifiers
pub mod store_backends {
    pub const POSTGRES: &str = "postgres";
    pub const MEMORY: &str = "memory";

    /// All supported store backends
    pub const ALL: &[&str] = &[POSTGRES, MEMORY];
}

/// Name of the counter row that hands out registration ids
pub const REGISTRATION_SEQUENCE: &str = "registration";

// =============================================================================
// REGISTRATION IDS & SCORING
// =============================================================================

/// Minimum rendered width of a public registration id ("01", "02", ...)
pub const REGISTRATION_ID_WIDTH: usize = 2;

/// Number of scored rounds per event
pub const ROUND_COUNT: usize = 5;

// =============================================================================
// API
// =============================================================================

/// API base path
pub const API_BASE_PATH: &str = "/api/v1";

/// Response messages
pub mod messages {
    pub const REGISTRATION_CREATED: &str = "Registration successful for all events!";
    pub const MARKS_UPDATED: &str = "Marks updated successfully!";
}
