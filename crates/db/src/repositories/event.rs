//! Event repository for database operations.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set, SqlErr, TransactionTrait,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use givehub_core::event::{
    CreateEventInput, EventStatus, EventValidationError, HomePartition, UpdateEventInput,
    partition_home, progress_percent, validate_create, validate_date_range, validate_update,
};

use crate::entities::{events, ngos, registrations, sea_orm_active_enums};

/// Event-level repository errors, mapped to HTTP statuses at the route layer.
#[derive(Debug, Error)]
pub enum EventError {
    /// No event with the given id.
    #[error("Event not found")]
    NotFound,

    /// The event still has registrations and cannot be deleted.
    #[error("Cannot delete this event because there are {0} existing registration(s)")]
    HasRegistrations(u64),

    /// The referenced NGO does not exist.
    #[error("NGO not found")]
    NgoNotFound,

    /// The payload failed validation.
    #[error(transparent)]
    Validation(#[from] EventValidationError),

    /// Underlying database failure.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// Search filters for the public event search. Absent filters are no-ops.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventSearchFilter {
    /// Match events whose date range contains this date.
    pub date: Option<NaiveDate>,
    /// Substring match on the event location.
    pub location: Option<String>,
    /// Exact match on the owning NGO.
    pub ngo_id: Option<Uuid>,
    /// Exact match on the category label.
    pub category: Option<String>,
}

/// An event row joined with its NGO's name, as rendered in listings.
#[derive(Debug, Clone, Serialize)]
pub struct EventSummary {
    /// Event id.
    pub event_id: Uuid,
    /// Owning NGO id.
    pub ngo_id: Uuid,
    /// NGO name from the join.
    pub ngo_name: String,
    /// Event name.
    pub name: String,
    /// Short purpose line.
    pub purpose: Option<String>,
    /// Long-form description.
    pub full_description: Option<String>,
    /// Venue or area.
    pub location: Option<String>,
    /// Start of the event.
    pub start_date: DateTime<Utc>,
    /// End of the event, if scheduled.
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

impl EventSummary {
    fn from_join(event: events::Model, ngo: Option<ngos::Model>) -> Self {
        Self {
            event_id: event.event_id,
            ngo_id: event.ngo_id,
            ngo_name: ngo.map(|n| n.ngo_name).unwrap_or_default(),
            name: event.name,
            purpose: event.purpose,
            full_description: event.full_description,
            location: event.location,
            start_date: event.start_date.with_timezone(&Utc),
            end_date: event.end_date.map(|d| d.with_timezone(&Utc)),
            ticket_price: event.ticket_price,
            currency: event.currency,
            goal_amount: event.goal_amount,
            progress_amount: event.progress_amount,
            image_url: event.image_url,
            category: event.category,
            status: event.status.into(),
            latitude: event.latitude,
            longitude: event.longitude,
        }
    }
}

/// An event joined with its NGO's contact fields, plus the fundraising
/// percentage. Registration statistics are attached by the caller.
#[derive(Debug, Clone, Serialize)]
pub struct EventDetail {
    /// The event and its NGO name.
    #[serde(flatten)]
    pub event: EventSummary,
    /// NGO headquarters location.
    pub hq_location: String,
    /// NGO contact email.
    pub contact_email: String,
    /// Fundraising progress, 0..=100.
    pub progress_percent: u8,
}

/// Event repository for CRUD, search, and home partition queries.
#[derive(Debug, Clone)]
pub struct EventRepository {
    db: DatabaseConnection,
}

impl EventRepository {
    /// Creates a new event repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Home view: active events split into upcoming and past.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn home(
        &self,
        now: DateTime<Utc>,
    ) -> Result<HomePartition<EventSummary>, EventError> {
        let rows = events::Entity::find()
            .filter(events::Column::Status.eq(sea_orm_active_enums::EventStatus::Active))
            .find_also_related(ngos::Entity)
            .order_by_asc(events::Column::StartDate)
            .all(&self.db)
            .await?;

        let summaries: Vec<_> = rows
            .into_iter()
            .map(|(event, ngo)| EventSummary::from_join(event, ngo))
            .collect();

        Ok(partition_home(
            summaries,
            now,
            |e| e.status,
            |e| e.end_date,
        ))
    }

    /// Admin view: all events regardless of status, start ascending.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_admin(&self) -> Result<Vec<EventSummary>, EventError> {
        let rows = events::Entity::find()
            .find_also_related(ngos::Entity)
            .order_by_asc(events::Column::StartDate)
            .all(&self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(event, ngo)| EventSummary::from_join(event, ngo))
            .collect())
    }

    /// Distinct category labels across all events.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn categories(&self) -> Result<Vec<String>, EventError> {
        let rows: Vec<Option<String>> = events::Entity::find()
            .select_only()
            .column(events::Column::Category)
            .distinct()
            .order_by_asc(events::Column::Category)
            .into_tuple()
            .all(&self.db)
            .await?;

        Ok(rows.into_iter().flatten().collect())
    }

    /// Public search with optional filters; suspended events never match.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn search(
        &self,
        filter: &EventSearchFilter,
    ) -> Result<Vec<EventSummary>, EventError> {
        let mut condition = Condition::all()
            .add(events::Column::Status.ne(sea_orm_active_enums::EventStatus::Suspended));

        if let Some(date) = filter.date {
            // The date must fall inside [start_date, end_date]; events
            // without an end date never match a date filter.
            let day_start = date.and_time(NaiveTime::MIN).and_utc();
            let next_day = day_start + chrono::Duration::days(1);
            condition = condition
                .add(events::Column::StartDate.lt(next_day))
                .add(events::Column::EndDate.gte(day_start));
        }

        if let Some(location) = filter.location.as_deref().map(str::trim)
            && !location.is_empty()
        {
            condition = condition.add(events::Column::Location.contains(location));
        }

        if let Some(ngo_id) = filter.ngo_id {
            condition = condition.add(events::Column::NgoId.eq(ngo_id));
        }

        if let Some(category) = filter.category.as_deref().map(str::trim)
            && !category.is_empty()
        {
            condition = condition.add(events::Column::Category.eq(category));
        }

        let rows = events::Entity::find()
            .filter(condition)
            .find_also_related(ngos::Entity)
            .order_by_asc(events::Column::StartDate)
            .all(&self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(event, ngo)| EventSummary::from_join(event, ngo))
            .collect())
    }

    /// Event detail with NGO contact fields and fundraising percentage.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_detail(&self, event_id: Uuid) -> Result<Option<EventDetail>, EventError> {
        let Some((event, ngo)) = events::Entity::find_by_id(event_id)
            .find_also_related(ngos::Entity)
            .one(&self.db)
            .await?
        else {
            return Ok(None);
        };

        let percent = progress_percent(event.progress_amount, event.goal_amount);
        let (hq_location, contact_email) = ngo
            .as_ref()
            .map(|n| (n.hq_location.clone(), n.contact_email.clone()))
            .unwrap_or_default();

        Ok(Some(EventDetail {
            event: EventSummary::from_join(event, ngo),
            hq_location,
            contact_email,
            progress_percent: percent,
        }))
    }

    /// Creates an event from a validated payload.
    ///
    /// # Errors
    ///
    /// Returns `EventError::Validation` on a bad payload,
    /// `EventError::NgoNotFound` when the owning NGO does not exist, or a
    /// database error.
    pub async fn create(&self, input: CreateEventInput) -> Result<events::Model, EventError> {
        let event = validate_create(input)?;
        let now = chrono::Utc::now().into();

        let model = events::ActiveModel {
            event_id: Set(Uuid::new_v4()),
            ngo_id: Set(event.ngo_id),
            name: Set(event.name),
            purpose: Set(event.purpose),
            full_description: Set(event.full_description),
            location: Set(event.location),
            start_date: Set(event.start_date.into()),
            end_date: Set(event.end_date.map(Into::into)),
            ticket_price: Set(event.ticket_price),
            currency: Set(event.currency),
            goal_amount: Set(event.goal_amount),
            progress_amount: Set(event.progress_amount),
            image_url: Set(event.image_url),
            category: Set(event.category),
            status: Set(event.status.into()),
            latitude: Set(event.latitude),
            longitude: Set(event.longitude),
            created_at: Set(now),
            updated_at: Set(now),
        };

        match model.insert(&self.db).await {
            Ok(created) => Ok(created),
            Err(e) if matches!(e.sql_err(), Some(SqlErr::ForeignKeyConstraintViolation(_))) => {
                Err(EventError::NgoNotFound)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Applies a partial update; the merged record's date range is
    /// re-validated before committing.
    ///
    /// # Errors
    ///
    /// Returns `EventError::NotFound` for an unknown id, validation errors
    /// (including an inverted merged date range), `EventError::NgoNotFound`
    /// when re-pointing to a missing NGO, or a database error.
    pub async fn update(
        &self,
        event_id: Uuid,
        input: UpdateEventInput,
    ) -> Result<events::Model, EventError> {
        validate_update(&input)?;

        let txn = self.db.begin().await?;

        let existing = events::Entity::find_by_id(event_id)
            .one(&txn)
            .await?
            .ok_or(EventError::NotFound)?;

        let merged_start = input
            .start_date
            .unwrap_or_else(|| existing.start_date.with_timezone(&Utc));
        let merged_end = input
            .end_date
            .or_else(|| existing.end_date.map(|d| d.with_timezone(&Utc)));
        validate_date_range(merged_start, merged_end)?;

        let mut model: events::ActiveModel = existing.into();
        if let Some(ngo_id) = input.ngo_id {
            model.ngo_id = Set(ngo_id);
        }
        if let Some(name) = input.name {
            model.name = Set(name);
        }
        if let Some(purpose) = input.purpose {
            model.purpose = Set(Some(purpose));
        }
        if let Some(description) = input.full_description {
            model.full_description = Set(Some(description));
        }
        if let Some(location) = input.location {
            model.location = Set(Some(location));
        }
        if let Some(start) = input.start_date {
            model.start_date = Set(start.into());
        }
        if let Some(end) = input.end_date {
            model.end_date = Set(Some(end.into()));
        }
        if let Some(price) = input.ticket_price {
            model.ticket_price = Set(price);
        }
        if let Some(currency) = input.currency {
            model.currency = Set(currency);
        }
        if let Some(goal) = input.goal_amount {
            model.goal_amount = Set(goal);
        }
        if let Some(progress) = input.progress_amount {
            model.progress_amount = Set(progress);
        }
        if let Some(image_url) = input.image_url {
            model.image_url = Set(Some(image_url));
        }
        if let Some(category) = input.category {
            model.category = Set(Some(category));
        }
        if let Some(status) = input.status {
            model.status = Set(status.into());
        }
        if let Some(latitude) = input.latitude {
            model.latitude = Set(Some(latitude));
        }
        if let Some(longitude) = input.longitude {
            model.longitude = Set(Some(longitude));
        }
        model.updated_at = Set(chrono::Utc::now().into());

        let updated = match model.update(&txn).await {
            Ok(updated) => updated,
            Err(e) if matches!(e.sql_err(), Some(SqlErr::ForeignKeyConstraintViolation(_))) => {
                return Err(EventError::NgoNotFound);
            }
            Err(e) => return Err(e.into()),
        };

        txn.commit().await?;

        Ok(updated)
    }

    /// Deletes an event, guarded by its registration count.
    ///
    /// The count check and the delete share a transaction; the restrictive
    /// foreign key on `registrations.event_id` remains the authoritative
    /// enforcement.
    ///
    /// # Errors
    ///
    /// Returns `EventError::HasRegistrations` when registrations still
    /// reference the event, `EventError::NotFound` for an unknown id, or a
    /// database error.
    pub async fn delete(&self, event_id: Uuid) -> Result<(), EventError> {
        let txn = self.db.begin().await?;

        let registration_count = registrations::Entity::find()
            .filter(registrations::Column::EventId.eq(event_id))
            .count(&txn)
            .await?;

        if registration_count > 0 {
            return Err(EventError::HasRegistrations(registration_count));
        }

        let result = match events::Entity::delete_by_id(event_id).exec(&txn).await {
            Ok(result) => result,
            // A concurrent registration can slip past the count above.
            Err(e) if matches!(e.sql_err(), Some(SqlErr::ForeignKeyConstraintViolation(_))) => {
                return Err(EventError::HasRegistrations(registration_count.max(1)));
            }
            Err(e) => return Err(e.into()),
        };

        if result.rows_affected == 0 {
            return Err(EventError::NotFound);
        }

        txn.commit().await?;

        Ok(())
    }
}
