//! NGO repository for database operations.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, Set, SqlErr, TransactionTrait,
};
use thiserror::Error;
use uuid::Uuid;

use givehub_core::ngo::{NgoInput, NgoValidationError};

use crate::entities::{events, ngos};

/// NGO-level repository errors, mapped to HTTP statuses at the route layer.
#[derive(Debug, Error)]
pub enum NgoError {
    /// No NGO with the given id.
    #[error("NGO not found")]
    NotFound,

    /// The NGO still owns events and cannot be deleted.
    #[error("Cannot delete this NGO because there are {0} related event(s)")]
    HasEvents(u64),

    /// The payload failed validation.
    #[error(transparent)]
    Validation(#[from] NgoValidationError),

    /// Underlying database failure.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// NGO repository for CRUD operations.
#[derive(Debug, Clone)]
pub struct NgoRepository {
    db: DatabaseConnection,
}

impl NgoRepository {
    /// Creates a new NGO repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists all NGOs ordered by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list(&self) -> Result<Vec<ngos::Model>, NgoError> {
        let rows = ngos::Entity::find()
            .order_by_asc(ngos::Column::NgoName)
            .all(&self.db)
            .await?;

        Ok(rows)
    }

    /// Creates an NGO from a validated payload.
    ///
    /// # Errors
    ///
    /// Returns `NgoError::Validation` on a bad payload, or a database error.
    pub async fn create(&self, input: NgoInput) -> Result<ngos::Model, NgoError> {
        let ngo = input.validate()?;
        let now = chrono::Utc::now().into();

        let model = ngos::ActiveModel {
            ngo_id: Set(Uuid::new_v4()),
            ngo_name: Set(ngo.ngo_name),
            hq_location: Set(ngo.hq_location),
            contact_email: Set(ngo.contact_email),
            created_at: Set(now),
            updated_at: Set(now),
        };

        Ok(model.insert(&self.db).await?)
    }

    /// Replaces all editable fields of an NGO. All three fields are required,
    /// matching the admin form.
    ///
    /// # Errors
    ///
    /// Returns `NgoError::NotFound` if the NGO does not exist, or validation
    /// and database errors.
    pub async fn update(&self, ngo_id: Uuid, input: NgoInput) -> Result<ngos::Model, NgoError> {
        let ngo = input.validate()?;

        let existing = ngos::Entity::find_by_id(ngo_id)
            .one(&self.db)
            .await?
            .ok_or(NgoError::NotFound)?;

        let mut model: ngos::ActiveModel = existing.into();
        model.ngo_name = Set(ngo.ngo_name);
        model.hq_location = Set(ngo.hq_location);
        model.contact_email = Set(ngo.contact_email);
        model.updated_at = Set(chrono::Utc::now().into());

        Ok(model.update(&self.db).await?)
    }

    /// Deletes an NGO, guarded by its event count.
    ///
    /// The count check and the delete share a transaction; the restrictive
    /// foreign key on `events.ngo_id` remains the authoritative enforcement,
    /// and a foreign-key violation maps to the same guard error.
    ///
    /// # Errors
    ///
    /// Returns `NgoError::HasEvents` when events still reference the NGO,
    /// `NgoError::NotFound` for an unknown id, or a database error.
    pub async fn delete(&self, ngo_id: Uuid) -> Result<(), NgoError> {
        let txn = self.db.begin().await?;

        let event_count = events::Entity::find()
            .filter(events::Column::NgoId.eq(ngo_id))
            .count(&txn)
            .await?;

        if event_count > 0 {
            return Err(NgoError::HasEvents(event_count));
        }

        let result = match ngos::Entity::delete_by_id(ngo_id).exec(&txn).await {
            Ok(result) => result,
            // A concurrent event insert can slip past the count above.
            Err(e) if matches!(e.sql_err(), Some(SqlErr::ForeignKeyConstraintViolation(_))) => {
                return Err(NgoError::HasEvents(event_count.max(1)));
            }
            Err(e) => return Err(e.into()),
        };

        if result.rows_affected == 0 {
            return Err(NgoError::NotFound);
        }

        txn.commit().await?;

        Ok(())
    }
}
