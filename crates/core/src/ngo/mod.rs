//! Organization (NGO) validation.

pub mod error;
pub mod types;

pub use error::NgoValidationError;
pub use types::{NewNgo, NgoInput};
