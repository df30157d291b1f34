//! Registration data types and validation.

use serde::{Deserialize, Serialize};

use givehub_shared::validation::{is_valid_email, is_valid_phone};

use super::error::{RegistrationValidationError, TICKETS_MAX, TICKETS_MIN};

/// Payment state of a registration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    /// No payment expected.
    #[default]
    Free,
    /// Payment initiated but not confirmed.
    Pending,
    /// Payment confirmed.
    Paid,
}

impl PaymentStatus {
    /// String form used on the wire and in the database.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Free => "free",
            Self::Pending => "pending",
            Self::Paid => "paid",
        }
    }
}

/// Public registration payload for an event.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegisterInput {
    /// Registrant's full name.
    pub full_name: Option<String>,
    /// Registrant's email; one registration per email per event.
    pub email: Option<String>,
    /// Contact phone number.
    pub phone: Option<String>,
    /// Ticket count, defaults to 1.
    pub tickets: Option<i32>,
    /// Payment state, defaults to `free`.
    pub payment_status: Option<PaymentStatus>,
}

/// A validated registration ready to be persisted. `registered_at` is
/// assigned by the server at insert time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewRegistration {
    /// Registrant's full name.
    pub full_name: String,
    /// Registrant's email.
    pub email: String,
    /// Contact phone number.
    pub phone: String,
    /// Ticket count.
    pub tickets: i32,
    /// Payment state.
    pub payment_status: PaymentStatus,
}

impl RegisterInput {
    /// Validates the payload and fills in defaults.
    ///
    /// # Errors
    ///
    /// Returns `RegistrationValidationError` when `full_name`, `email`, or
    /// `phone` is missing or malformed, or `tickets` is out of range.
    pub fn validate(self) -> Result<NewRegistration, RegistrationValidationError> {
        let full_name = self
            .full_name
            .filter(|v| !v.trim().is_empty())
            .ok_or(RegistrationValidationError::MissingField("full_name"))?;
        let email = self
            .email
            .filter(|v| !v.trim().is_empty())
            .ok_or(RegistrationValidationError::MissingField("email"))?;
        let phone = self
            .phone
            .filter(|v| !v.trim().is_empty())
            .ok_or(RegistrationValidationError::MissingField("phone"))?;

        if !is_valid_email(&email) {
            return Err(RegistrationValidationError::InvalidEmail);
        }
        if !is_valid_phone(&phone) {
            return Err(RegistrationValidationError::InvalidPhone);
        }

        let tickets = self.tickets.unwrap_or(TICKETS_MIN);
        if !(TICKETS_MIN..=TICKETS_MAX).contains(&tickets) {
            return Err(RegistrationValidationError::TicketsOutOfRange);
        }

        Ok(NewRegistration {
            full_name,
            email,
            phone,
            tickets,
            payment_status: self.payment_status.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn input() -> RegisterInput {
        RegisterInput {
            full_name: Some("Jamie Chen".to_string()),
            email: Some("jamie@example.com".to_string()),
            phone: Some("+61412345678".to_string()),
            tickets: None,
            payment_status: None,
        }
    }

    #[test]
    fn test_defaults_applied() {
        let reg = input().validate().expect("valid input");
        assert_eq!(reg.tickets, 1);
        assert_eq!(reg.payment_status, PaymentStatus::Free);
    }

    #[rstest]
    #[case("full_name")]
    #[case("email")]
    #[case("phone")]
    fn test_required_fields(#[case] field: &'static str) {
        let mut payload = input();
        match field {
            "full_name" => payload.full_name = None,
            "email" => payload.email = None,
            _ => payload.phone = None,
        }
        assert_eq!(
            payload.validate(),
            Err(RegistrationValidationError::MissingField(field))
        );
    }

    #[test]
    fn test_malformed_email_and_phone() {
        let mut bad_email = input();
        bad_email.email = Some("jamie-at-example".to_string());
        assert_eq!(
            bad_email.validate(),
            Err(RegistrationValidationError::InvalidEmail)
        );

        let mut bad_phone = input();
        bad_phone.phone = Some("12345".to_string());
        assert_eq!(
            bad_phone.validate(),
            Err(RegistrationValidationError::InvalidPhone)
        );
    }

    #[rstest]
    #[case(Some(1), Ok(1))]
    #[case(Some(10), Ok(10))]
    #[case(None, Ok(1))]
    #[case(Some(0), Err(RegistrationValidationError::TicketsOutOfRange))]
    #[case(Some(11), Err(RegistrationValidationError::TicketsOutOfRange))]
    #[case(Some(-3), Err(RegistrationValidationError::TicketsOutOfRange))]
    fn test_ticket_bounds(
        #[case] tickets: Option<i32>,
        #[case] expected: Result<i32, RegistrationValidationError>,
    ) {
        let mut payload = input();
        payload.tickets = tickets;
        assert_eq!(payload.validate().map(|r| r.tickets), expected);
    }

    #[test]
    fn test_explicit_payment_status_kept() {
        let mut payload = input();
        payload.payment_status = Some(PaymentStatus::Paid);
        assert_eq!(
            payload.validate().map(|r| r.payment_status),
            Ok(PaymentStatus::Paid)
        );
    }
}
