//! Database enum mappings.
//!
//! The domain-side enums live in `givehub-core`; the types here mirror them
//! onto the PostgreSQL enum columns, with `From` conversions both ways.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Lifecycle state of an event, as stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "event_status")]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    /// Not visible to the public.
    #[sea_orm(string_value = "draft")]
    Draft,
    /// Published and open for registrations.
    #[sea_orm(string_value = "active")]
    Active,
    /// Pulled from public listings and search.
    #[sea_orm(string_value = "suspended")]
    Suspended,
    /// Closed out by an admin.
    #[sea_orm(string_value = "completed")]
    Completed,
}

/// Payment state of a registration, as stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "payment_status")]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    /// No payment expected.
    #[sea_orm(string_value = "free")]
    Free,
    /// Payment initiated but not confirmed.
    #[sea_orm(string_value = "pending")]
    Pending,
    /// Payment confirmed.
    #[sea_orm(string_value = "paid")]
    Paid,
}

impl From<givehub_core::event::EventStatus> for EventStatus {
    fn from(status: givehub_core::event::EventStatus) -> Self {
        match status {
            givehub_core::event::EventStatus::Draft => Self::Draft,
            givehub_core::event::EventStatus::Active => Self::Active,
            givehub_core::event::EventStatus::Suspended => Self::Suspended,
            givehub_core::event::EventStatus::Completed => Self::Completed,
        }
    }
}

impl From<EventStatus> for givehub_core::event::EventStatus {
    fn from(status: EventStatus) -> Self {
        match status {
            EventStatus::Draft => Self::Draft,
            EventStatus::Active => Self::Active,
            EventStatus::Suspended => Self::Suspended,
            EventStatus::Completed => Self::Completed,
        }
    }
}

impl From<givehub_core::registration::PaymentStatus> for PaymentStatus {
    fn from(status: givehub_core::registration::PaymentStatus) -> Self {
        match status {
            givehub_core::registration::PaymentStatus::Free => Self::Free,
            givehub_core::registration::PaymentStatus::Pending => Self::Pending,
            givehub_core::registration::PaymentStatus::Paid => Self::Paid,
        }
    }
}

impl From<PaymentStatus> for givehub_core::registration::PaymentStatus {
    fn from(status: PaymentStatus) -> Self {
        match status {
            PaymentStatus::Free => Self::Free,
            PaymentStatus::Pending => Self::Pending,
            PaymentStatus::Paid => Self::Paid,
        }
    }
}
