//! NGO data types and validation.

use serde::{Deserialize, Serialize};

use givehub_shared::validation::is_valid_email;

use super::error::NgoValidationError;

/// Maximum length of `ngo_name`.
pub const NGO_NAME_MAX: usize = 120;
/// Maximum length of `hq_location`.
pub const HQ_LOCATION_MAX: usize = 255;

/// Payload for creating or fully replacing an NGO. All three fields are
/// required on both paths.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NgoInput {
    /// Organization name.
    pub ngo_name: Option<String>,
    /// Headquarters location.
    pub hq_location: Option<String>,
    /// Contact email address.
    pub contact_email: Option<String>,
}

/// A validated NGO ready to be persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewNgo {
    /// Organization name.
    pub ngo_name: String,
    /// Headquarters location.
    pub hq_location: String,
    /// Contact email address.
    pub contact_email: String,
}

impl NgoInput {
    /// Validates the payload.
    ///
    /// # Errors
    ///
    /// Returns `NgoValidationError` when a field is missing, over-long, or
    /// the email is malformed.
    pub fn validate(self) -> Result<NewNgo, NgoValidationError> {
        let ngo_name = required("ngo_name", self.ngo_name)?;
        let hq_location = required("hq_location", self.hq_location)?;
        let contact_email = required("contact_email", self.contact_email)?;

        if ngo_name.chars().count() > NGO_NAME_MAX {
            return Err(NgoValidationError::FieldTooLong {
                field: "ngo_name",
                max: NGO_NAME_MAX,
            });
        }
        if hq_location.chars().count() > HQ_LOCATION_MAX {
            return Err(NgoValidationError::FieldTooLong {
                field: "hq_location",
                max: HQ_LOCATION_MAX,
            });
        }
        if !is_valid_email(&contact_email) {
            return Err(NgoValidationError::InvalidEmail);
        }

        Ok(NewNgo {
            ngo_name,
            hq_location,
            contact_email,
        })
    }
}

fn required(field: &'static str, value: Option<String>) -> Result<String, NgoValidationError> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or(NgoValidationError::MissingField(field))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> NgoInput {
        NgoInput {
            ngo_name: Some("Helping Hands".to_string()),
            hq_location: Some("Sydney, NSW".to_string()),
            contact_email: Some("contact@helpinghands.org".to_string()),
        }
    }

    #[test]
    fn test_valid_input_passes() {
        let ngo = input().validate().expect("valid input");
        assert_eq!(ngo.ngo_name, "Helping Hands");
        assert_eq!(ngo.contact_email, "contact@helpinghands.org");
    }

    #[test]
    fn test_all_fields_are_required() {
        let mut missing_name = input();
        missing_name.ngo_name = None;
        assert_eq!(
            missing_name.validate(),
            Err(NgoValidationError::MissingField("ngo_name"))
        );

        let mut blank_location = input();
        blank_location.hq_location = Some("  ".to_string());
        assert_eq!(
            blank_location.validate(),
            Err(NgoValidationError::MissingField("hq_location"))
        );

        let mut missing_email = input();
        missing_email.contact_email = None;
        assert_eq!(
            missing_email.validate(),
            Err(NgoValidationError::MissingField("contact_email"))
        );
    }

    #[test]
    fn test_name_length_limit() {
        let mut long_name = input();
        long_name.ngo_name = Some("n".repeat(NGO_NAME_MAX + 1));
        assert_eq!(
            long_name.validate(),
            Err(NgoValidationError::FieldTooLong {
                field: "ngo_name",
                max: NGO_NAME_MAX
            })
        );
    }

    #[test]
    fn test_malformed_email_is_rejected() {
        let mut bad_email = input();
        bad_email.contact_email = Some("not-an-email".to_string());
        assert_eq!(bad_email.validate(), Err(NgoValidationError::InvalidEmail));
    }
}
