//! Event data types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle state of an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    /// Being prepared by an admin, not visible to the public.
    Draft,
    /// Published and open for registrations.
    Active,
    /// Temporarily pulled from public listings; excluded from search too.
    Suspended,
    /// Finished and closed out by an admin.
    Completed,
}

impl EventStatus {
    /// String form used on the wire and in the database.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Active => "active",
            Self::Suspended => "suspended",
            Self::Completed => "completed",
        }
    }
}

/// Payload for creating an event. Everything except `ngo_id`, `name`, and
/// `start_date` may be omitted; validation fills in the defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateEventInput {
    /// Owning organization.
    pub ngo_id: Option<Uuid>,
    /// Event name.
    pub name: Option<String>,
    /// Short purpose line.
    pub purpose: Option<String>,
    /// Long-form description.
    pub full_description: Option<String>,
    /// Venue or area.
    pub location: Option<String>,
    /// When the event starts.
    pub start_date: Option<DateTime<Utc>>,
    /// When the event ends, if scheduled.
    pub end_date: Option<DateTime<Utc>>,
    /// Ticket price; zero means a free event.
    pub ticket_price: Option<Decimal>,
    /// ISO currency code.
    pub currency: Option<String>,
    /// Fundraising goal.
    pub goal_amount: Option<Decimal>,
    /// Amount raised so far.
    pub progress_amount: Option<Decimal>,
    /// Hero image URL.
    pub image_url: Option<String>,
    /// Category label.
    pub category: Option<String>,
    /// Initial status.
    pub status: Option<EventStatus>,
    /// Venue latitude.
    pub latitude: Option<Decimal>,
    /// Venue longitude.
    pub longitude: Option<Decimal>,
}

/// A fully validated, defaulted event ready to be persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewEvent {
    /// Owning organization.
    pub ngo_id: Uuid,
    /// Event name.
    pub name: String,
    /// Short purpose line.
    pub purpose: Option<String>,
    /// Long-form description.
    pub full_description: Option<String>,
    /// Venue or area.
    pub location: Option<String>,
    /// When the event starts.
    pub start_date: DateTime<Utc>,
    /// When the event ends, if scheduled.
    pub end_date: Option<DateTime<Utc>>,
    /// Ticket price.
    pub ticket_price: Decimal,
    /// ISO currency code.
    pub currency: String,
    /// Fundraising goal.
    pub goal_amount: Decimal,
    /// Amount raised so far.
    pub progress_amount: Decimal,
    /// Hero image URL.
    pub image_url: Option<String>,
    /// Category label.
    pub category: Option<String>,
    /// Lifecycle status.
    pub status: EventStatus,
    /// Venue latitude.
    pub latitude: Option<Decimal>,
    /// Venue longitude.
    pub longitude: Option<Decimal>,
}

/// Partial update payload. Only supplied fields are changed; the merged
/// record's date range is re-validated before committing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateEventInput {
    /// New owning organization.
    pub ngo_id: Option<Uuid>,
    /// New name.
    pub name: Option<String>,
    /// New purpose line.
    pub purpose: Option<String>,
    /// New description.
    pub full_description: Option<String>,
    /// New location.
    pub location: Option<String>,
    /// New start.
    pub start_date: Option<DateTime<Utc>>,
    /// New end.
    pub end_date: Option<DateTime<Utc>>,
    /// New ticket price.
    pub ticket_price: Option<Decimal>,
    /// New currency code.
    pub currency: Option<String>,
    /// New goal.
    pub goal_amount: Option<Decimal>,
    /// New progress.
    pub progress_amount: Option<Decimal>,
    /// New image URL.
    pub image_url: Option<String>,
    /// New category.
    pub category: Option<String>,
    /// New status.
    pub status: Option<EventStatus>,
    /// New latitude.
    pub latitude: Option<Decimal>,
    /// New longitude.
    pub longitude: Option<Decimal>,
}

impl UpdateEventInput {
    /// Whether the payload supplies at least one field.
    #[must_use]
    pub const fn has_changes(&self) -> bool {
        self.ngo_id.is_some()
            || self.name.is_some()
            || self.purpose.is_some()
            || self.full_description.is_some()
            || self.location.is_some()
            || self.start_date.is_some()
            || self.end_date.is_some()
            || self.ticket_price.is_some()
            || self.currency.is_some()
            || self.goal_amount.is_some()
            || self.progress_amount.is_some()
            || self.image_url.is_some()
            || self.category.is_some()
            || self.status.is_some()
            || self.latitude.is_some()
            || self.longitude.is_some()
    }
}
