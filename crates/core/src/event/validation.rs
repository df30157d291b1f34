//! Event payload validation and the date-range rule.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use super::error::EventValidationError;
use super::types::{CreateEventInput, EventStatus, NewEvent, UpdateEventInput};

/// Maximum length of `name`.
pub const NAME_MAX: usize = 160;
/// Maximum length of `purpose`.
pub const PURPOSE_MAX: usize = 255;
/// Maximum length of `location`.
pub const LOCATION_MAX: usize = 160;
/// Maximum length of `category`.
pub const CATEGORY_MAX: usize = 80;
/// Maximum length of `currency`.
pub const CURRENCY_MAX: usize = 3;

/// Currency used when the payload names none.
pub const DEFAULT_CURRENCY: &str = "AUD";

/// Validates a create payload and fills in defaults.
///
/// # Errors
///
/// Returns `EventValidationError` when a required field is missing, a string
/// exceeds its limit, an amount is negative, or the date range is inverted.
pub fn validate_create(input: CreateEventInput) -> Result<NewEvent, EventValidationError> {
    let Some(ngo_id) = input.ngo_id else {
        return Err(EventValidationError::MissingField("ngo_id"));
    };
    let name = input
        .name
        .filter(|n| !n.trim().is_empty())
        .ok_or(EventValidationError::MissingField("name"))?;
    let Some(start_date) = input.start_date else {
        return Err(EventValidationError::MissingField("start_date"));
    };

    check_len("name", &name, NAME_MAX)?;
    check_opt_len("purpose", input.purpose.as_deref(), PURPOSE_MAX)?;
    check_opt_len("location", input.location.as_deref(), LOCATION_MAX)?;
    check_opt_len("category", input.category.as_deref(), CATEGORY_MAX)?;

    let currency = input
        .currency
        .unwrap_or_else(|| DEFAULT_CURRENCY.to_string());
    check_len("currency", &currency, CURRENCY_MAX)?;

    let ticket_price = input.ticket_price.unwrap_or(Decimal::ZERO);
    let goal_amount = input.goal_amount.unwrap_or(Decimal::ZERO);
    let progress_amount = input.progress_amount.unwrap_or(Decimal::ZERO);
    check_non_negative("ticket_price", ticket_price)?;
    check_non_negative("goal_amount", goal_amount)?;
    check_non_negative("progress_amount", progress_amount)?;

    validate_date_range(start_date, input.end_date)?;

    Ok(NewEvent {
        ngo_id,
        name,
        purpose: input.purpose,
        full_description: input.full_description,
        location: input.location,
        start_date,
        end_date: input.end_date,
        ticket_price,
        currency,
        goal_amount,
        progress_amount,
        image_url: input.image_url,
        category: input.category,
        status: input.status.unwrap_or(EventStatus::Draft),
        latitude: input.latitude,
        longitude: input.longitude,
    })
}

/// Validates the field-level rules of a partial update.
///
/// The date range of the merged record cannot be checked here; callers merge
/// against the stored row and then apply [`validate_date_range`].
///
/// # Errors
///
/// Returns `EventValidationError::EmptyUpdate` when no field is supplied, and
/// the same field-level errors as [`validate_create`] otherwise.
pub fn validate_update(input: &UpdateEventInput) -> Result<(), EventValidationError> {
    if !input.has_changes() {
        return Err(EventValidationError::EmptyUpdate);
    }

    if let Some(name) = input.name.as_deref() {
        if name.trim().is_empty() {
            return Err(EventValidationError::MissingField("name"));
        }
        check_len("name", name, NAME_MAX)?;
    }
    check_opt_len("purpose", input.purpose.as_deref(), PURPOSE_MAX)?;
    check_opt_len("location", input.location.as_deref(), LOCATION_MAX)?;
    check_opt_len("category", input.category.as_deref(), CATEGORY_MAX)?;
    check_opt_len("currency", input.currency.as_deref(), CURRENCY_MAX)?;

    if let Some(price) = input.ticket_price {
        check_non_negative("ticket_price", price)?;
    }
    if let Some(goal) = input.goal_amount {
        check_non_negative("goal_amount", goal)?;
    }
    if let Some(progress) = input.progress_amount {
        check_non_negative("progress_amount", progress)?;
    }

    Ok(())
}

/// The date-range rule: when both dates exist, the end may not precede the
/// start.
///
/// # Errors
///
/// Returns `EventValidationError::EndBeforeStart` when the range is inverted.
pub fn validate_date_range(
    start_date: DateTime<Utc>,
    end_date: Option<DateTime<Utc>>,
) -> Result<(), EventValidationError> {
    match end_date {
        Some(end) if end < start_date => Err(EventValidationError::EndBeforeStart),
        _ => Ok(()),
    }
}

fn check_len(field: &'static str, value: &str, max: usize) -> Result<(), EventValidationError> {
    if value.chars().count() > max {
        return Err(EventValidationError::FieldTooLong { field, max });
    }
    Ok(())
}

fn check_opt_len(
    field: &'static str,
    value: Option<&str>,
    max: usize,
) -> Result<(), EventValidationError> {
    value.map_or(Ok(()), |v| check_len(field, v, max))
}

fn check_non_negative(field: &'static str, value: Decimal) -> Result<(), EventValidationError> {
    if value < Decimal::ZERO {
        return Err(EventValidationError::NegativeAmount(field));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    fn ts(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
    }

    fn minimal_input() -> CreateEventInput {
        CreateEventInput {
            ngo_id: Some(Uuid::new_v4()),
            name: Some("Winter Gala".to_string()),
            start_date: Some(ts(2026, 9, 1)),
            ..CreateEventInput::default()
        }
    }

    #[test]
    fn test_create_fills_defaults() {
        let event = validate_create(minimal_input()).expect("minimal input should validate");

        assert_eq!(event.ticket_price, Decimal::ZERO);
        assert_eq!(event.currency, "AUD");
        assert_eq!(event.goal_amount, Decimal::ZERO);
        assert_eq!(event.progress_amount, Decimal::ZERO);
        assert_eq!(event.status, EventStatus::Draft);
        assert!(event.end_date.is_none());
    }

    #[test]
    fn test_create_requires_ngo_name_and_start() {
        let mut input = minimal_input();
        input.ngo_id = None;
        assert_eq!(
            validate_create(input),
            Err(EventValidationError::MissingField("ngo_id"))
        );

        let mut input = minimal_input();
        input.name = None;
        assert_eq!(
            validate_create(input),
            Err(EventValidationError::MissingField("name"))
        );

        let mut input = minimal_input();
        input.name = Some("   ".to_string());
        assert_eq!(
            validate_create(input),
            Err(EventValidationError::MissingField("name"))
        );

        let mut input = minimal_input();
        input.start_date = None;
        assert_eq!(
            validate_create(input),
            Err(EventValidationError::MissingField("start_date"))
        );
    }

    #[test]
    fn test_create_rejects_inverted_date_range() {
        let mut input = minimal_input();
        input.start_date = Some(ts(2026, 9, 10));
        input.end_date = Some(ts(2026, 9, 1));

        assert_eq!(
            validate_create(input),
            Err(EventValidationError::EndBeforeStart)
        );
    }

    #[test]
    fn test_create_accepts_end_equal_to_start() {
        let mut input = minimal_input();
        input.end_date = input.start_date;

        assert!(validate_create(input).is_ok());
    }

    #[test]
    fn test_create_rejects_negative_amounts() {
        for field in ["ticket_price", "goal_amount", "progress_amount"] {
            let mut input = minimal_input();
            match field {
                "ticket_price" => input.ticket_price = Some(dec!(-1)),
                "goal_amount" => input.goal_amount = Some(dec!(-0.01)),
                _ => input.progress_amount = Some(dec!(-100)),
            }
            assert_eq!(
                validate_create(input),
                Err(EventValidationError::NegativeAmount(field))
            );
        }
    }

    #[test]
    fn test_create_rejects_overlong_fields() {
        let mut input = minimal_input();
        input.name = Some("x".repeat(NAME_MAX + 1));
        assert_eq!(
            validate_create(input),
            Err(EventValidationError::FieldTooLong {
                field: "name",
                max: NAME_MAX
            })
        );

        let mut input = minimal_input();
        input.currency = Some("AUDX".to_string());
        assert_eq!(
            validate_create(input),
            Err(EventValidationError::FieldTooLong {
                field: "currency",
                max: CURRENCY_MAX
            })
        );
    }

    #[test]
    fn test_update_rejects_empty_payload() {
        assert_eq!(
            validate_update(&UpdateEventInput::default()),
            Err(EventValidationError::EmptyUpdate)
        );
    }

    #[test]
    fn test_update_checks_supplied_fields_only() {
        let update = UpdateEventInput {
            goal_amount: Some(dec!(5000)),
            ..UpdateEventInput::default()
        };
        assert!(validate_update(&update).is_ok());

        let update = UpdateEventInput {
            goal_amount: Some(dec!(-5000)),
            ..UpdateEventInput::default()
        };
        assert_eq!(
            validate_update(&update),
            Err(EventValidationError::NegativeAmount("goal_amount"))
        );
    }

    #[test]
    fn test_date_range_rule() {
        assert!(validate_date_range(ts(2026, 9, 1), None).is_ok());
        assert!(validate_date_range(ts(2026, 9, 1), Some(ts(2026, 9, 2))).is_ok());
        assert_eq!(
            validate_date_range(ts(2026, 9, 2), Some(ts(2026, 9, 1))),
            Err(EventValidationError::EndBeforeStart)
        );
    }
}
