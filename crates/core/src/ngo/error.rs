//! NGO validation errors.

use thiserror::Error;

/// Reasons an NGO payload is rejected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NgoValidationError {
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

    /// `contact_email` is not a plausible email address.
    #[error("contact_email is not a valid email address")]
    InvalidEmail,
}
