//! Registration validation errors.

use thiserror::Error;

/// Bounds on the ticket count per registration.
pub const TICKETS_MIN: i32 = 1;
/// Upper bound on tickets per registration.
pub const TICKETS_MAX: i32 = 10;

/// Reasons a registration payload is rejected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistrationValidationError {
    /// A required field was not supplied.
    #[error("{0} is required")]
    MissingField(&'static str),

    /// `email` is not a plausible email address.
    #[error("email is not a valid email address")]
    InvalidEmail,

    /// `phone` is not 7-15 digits with an optional leading `+`.
    #[error("phone must be 7-15 digits with an optional leading +")]
    InvalidPhone,

    /// `tickets` is outside the allowed range.
    #[error("tickets must be between {TICKETS_MIN} and {TICKETS_MAX}")]
    TicketsOutOfRange,
}
