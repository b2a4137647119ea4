//! Business logic services

pub mod registration_service;

pub use registration_service::{format_registration_id, RegistrationService};
