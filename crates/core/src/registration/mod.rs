//! Registration validation and the payment-status taxonomy.

pub mod error;
pub mod types;

pub use error::RegistrationValidationError;
pub use types::{NewRegistration, PaymentStatus, RegisterInput};
