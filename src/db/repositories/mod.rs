//! Registration store implementations
//!
//! Repositories handle all direct storage interactions.

pub mod memory_repo;
pub mod registration_repo;

pub use memory_repo::MemoryRegistrationStore;
pub use registration_repo::PgRegistrationStore;
