//! Event lifecycle, validation, and derived statistics.

pub mod error;
pub mod schedule;
pub mod stats;
pub mod types;
pub mod validation;

#[cfg(test)]
mod props;

pub use error::EventValidationError;
pub use schedule::{EventWindow, HomePartition, classify, partition_home};
pub use stats::{RegistrationTally, progress_percent, revenue_estimate};
pub use types::{CreateEventInput, EventStatus, NewEvent, UpdateEventInput};
pub use validation::{validate_create, validate_date_range, validate_update};
