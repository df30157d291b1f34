//! Registration repository for database operations.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set, SqlErr, TransactionTrait,
};
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

use givehub_core::event::RegistrationTally;
use givehub_core::registration::{PaymentStatus, RegisterInput, RegistrationValidationError};

use crate::entities::{events, registrations, sea_orm_active_enums};

/// Registration-level repository errors, mapped to HTTP statuses at the
/// route layer.
#[derive(Debug, Error)]
pub enum RegistrationError {
    /// No registration with the given id.
    #[error("Registration not found")]
    NotFound,

    /// The target event does not exist.
    #[error("Event not found")]
    EventNotFound,

    /// The email is already registered for this event.
    #[error("This email has already registered for this event")]
    Duplicate,

    /// The payload failed validation.
    #[error(transparent)]
    Validation(#[from] RegistrationValidationError),

    /// Underlying database failure.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// A registration joined with its event's name, for the admin listing.
#[derive(Debug, Clone, Serialize)]
pub struct RegistrationWithEvent {
    /// Registration id.
    pub registration_id: Uuid,
    /// Event id.
    pub event_id: Uuid,
    /// Event name from the join.
    pub event_name: String,
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
    /// When the registration was created.
    pub registered_at: DateTime<Utc>,
}

/// Registration repository for the public register flow and admin listings.
#[derive(Debug, Clone)]
pub struct RegistrationRepository {
    db: DatabaseConnection,
}

impl RegistrationRepository {
    /// Creates a new registration repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registrations for one event, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_for_event(
        &self,
        event_id: Uuid,
    ) -> Result<Vec<registrations::Model>, RegistrationError> {
        let rows = registrations::Entity::find()
            .filter(registrations::Column::EventId.eq(event_id))
            .order_by_desc(registrations::Column::RegisteredAt)
            .all(&self.db)
            .await?;

        Ok(rows)
    }

    /// All registrations joined with their event's name, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_all(&self) -> Result<Vec<RegistrationWithEvent>, RegistrationError> {
        let rows = registrations::Entity::find()
            .find_also_related(events::Entity)
            .order_by_desc(registrations::Column::RegisteredAt)
            .all(&self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(registration, event)| RegistrationWithEvent {
                registration_id: registration.registration_id,
                event_id: registration.event_id,
                event_name: event.map(|e| e.name).unwrap_or_default(),
                full_name: registration.full_name,
                email: registration.email,
                phone: registration.phone,
                tickets: registration.tickets,
                payment_status: registration.payment_status.into(),
                registered_at: registration.registered_at.with_timezone(&Utc),
            })
            .collect())
    }

    /// Creates a registration, guarded against duplicate emails per event.
    ///
    /// The duplicate check and the insert share a transaction; the unique
    /// index on `(event_id, email)` remains the authoritative enforcement,
    /// so a racing duplicate surfaces as the same conflict.
    ///
    /// # Errors
    ///
    /// Returns `RegistrationError::Duplicate` when the email is already
    /// registered, `RegistrationError::EventNotFound` for an unknown event,
    /// or validation and database errors.
    pub async fn register(
        &self,
        event_id: Uuid,
        input: RegisterInput,
    ) -> Result<registrations::Model, RegistrationError> {
        let registration = input.validate()?;

        let txn = self.db.begin().await?;

        let existing = registrations::Entity::find()
            .filter(registrations::Column::EventId.eq(event_id))
            .filter(registrations::Column::Email.eq(registration.email.as_str()))
            .count(&txn)
            .await?;

        if existing > 0 {
            return Err(RegistrationError::Duplicate);
        }

        let model = registrations::ActiveModel {
            registration_id: Set(Uuid::new_v4()),
            event_id: Set(event_id),
            full_name: Set(registration.full_name),
            email: Set(registration.email),
            phone: Set(registration.phone),
            tickets: Set(registration.tickets),
            payment_status: Set(registration.payment_status.into()),
            registered_at: Set(chrono::Utc::now().into()),
        };

        let created = match model.insert(&txn).await {
            Ok(created) => created,
            Err(e) => {
                return Err(match e.sql_err() {
                    Some(SqlErr::UniqueConstraintViolation(_)) => RegistrationError::Duplicate,
                    Some(SqlErr::ForeignKeyConstraintViolation(_)) => {
                        RegistrationError::EventNotFound
                    }
                    _ => e.into(),
                });
            }
        };

        txn.commit().await?;

        Ok(created)
    }

    /// Deletes a registration by id.
    ///
    /// # Errors
    ///
    /// Returns `RegistrationError::NotFound` for an unknown id, or a
    /// database error.
    pub async fn delete(&self, registration_id: Uuid) -> Result<(), RegistrationError> {
        let result = registrations::Entity::delete_by_id(registration_id)
            .exec(&self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(RegistrationError::NotFound);
        }

        Ok(())
    }

    /// Registration counts for one event, broken down by payment status.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn tally(&self, event_id: Uuid) -> Result<RegistrationTally, RegistrationError> {
        let rows: Vec<(sea_orm_active_enums::PaymentStatus, i64)> = registrations::Entity::find()
            .filter(registrations::Column::EventId.eq(event_id))
            .select_only()
            .column(registrations::Column::PaymentStatus)
            .column_as(registrations::Column::RegistrationId.count(), "count")
            .group_by(registrations::Column::PaymentStatus)
            .into_tuple()
            .all(&self.db)
            .await?;

        let mut tally = RegistrationTally::default();
        for (status, count) in rows {
            let count = u64::try_from(count).unwrap_or(0);
            tally.total += count;
            match status.into() {
                PaymentStatus::Paid => tally.paid += count,
                PaymentStatus::Pending => tally.pending += count,
                PaymentStatus::Free => tally.free += count,
            }
        }

        Ok(tally)
    }
}
