//! Repository abstractions for data access.
//!
//! Repositories provide a clean interface for database operations,
//! hiding the `SeaORM` implementation details from the rest of the
//! application. Guarded mutations (NGO delete, event delete, registration
//! create) run their check and act inside one transaction, with the schema
//! constraints as the authoritative backstop.

pub mod event;
pub mod ngo;
pub mod registration;

pub use event::{EventDetail, EventError, EventRepository, EventSearchFilter, EventSummary};
pub use ngo::{NgoError, NgoRepository};
pub use registration::{RegistrationError, RegistrationRepository, RegistrationWithEvent};
