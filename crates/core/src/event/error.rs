//! Event validation errors.

use thiserror::Error;

/// Reasons an event payload is rejected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EventValidationError {
    /// A required field was not supplied.
    #[error("{0} is required")]
    MissingField(&'static str),

    /// A string field exceeds its column limit.
    #[error("{field} must be at most {max} characters")]
    FieldTooLong {
        /// Offending field.
        field: &'static str,
        /// Maximum length.
        max: usize,
    },

    /// A monetary field was negative.
    #[error("{0} cannot be negative")]
    NegativeAmount(&'static str),

    /// The end of the event precedes its start.
    #[error("end_date cannot be earlier than start_date")]
    EndBeforeStart,

    /// An update payload supplied no recognized fields.
    #[error("no fields provided for update")]
    EmptyUpdate,
}
