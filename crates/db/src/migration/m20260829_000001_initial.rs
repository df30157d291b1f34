//! Initial database migration.
//!
//! Creates the enums and the three core tables. Referential invariants are
//! enforced at the schema level: restrictive foreign keys guard NGO and event
//! deletion, and a unique index on `(event_id, email)` guards duplicate
//! registrations. The application-level checks exist only for friendlier
//! error messages.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        db.execute_unprepared(ENUMS_SQL).await?;
        db.execute_unprepared(NGOS_SQL).await?;
        db.execute_unprepared(EVENTS_SQL).await?;
        db.execute_unprepared(REGISTRATIONS_SQL).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(DROP_ALL_SQL).await?;
        Ok(())
    }
}

// ============================================================
// SQL CONSTANTS
// ============================================================

const ENUMS_SQL: &str = r"
CREATE TYPE event_status AS ENUM (
    'draft',
    'active',
    'suspended',
    'completed'
);

CREATE TYPE payment_status AS ENUM (
    'free',
    'pending',
    'paid'
);
";

const NGOS_SQL: &str = r"
CREATE TABLE ngos (
    ngo_id UUID PRIMARY KEY,
    ngo_name VARCHAR(120) NOT NULL,
    hq_location VARCHAR(255) NOT NULL,
    contact_email VARCHAR(255) NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
);
";

const EVENTS_SQL: &str = r"
CREATE TABLE events (
    event_id UUID PRIMARY KEY,
    ngo_id UUID NOT NULL REFERENCES ngos(ngo_id) ON DELETE RESTRICT,
    name VARCHAR(160) NOT NULL,
    purpose VARCHAR(255),
    full_description TEXT,
    location VARCHAR(160),
    start_date TIMESTAMPTZ NOT NULL,
    end_date TIMESTAMPTZ,
    ticket_price NUMERIC(12, 2) NOT NULL DEFAULT 0 CHECK (ticket_price >= 0),
    currency VARCHAR(3) NOT NULL DEFAULT 'AUD',
    goal_amount NUMERIC(12, 2) NOT NULL DEFAULT 0 CHECK (goal_amount >= 0),
    progress_amount NUMERIC(12, 2) NOT NULL DEFAULT 0 CHECK (progress_amount >= 0),
    image_url TEXT,
    category VARCHAR(80),
    status event_status NOT NULL DEFAULT 'draft',
    latitude NUMERIC(9, 6),
    longitude NUMERIC(9, 6),
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),

    CONSTRAINT events_date_range CHECK (end_date IS NULL OR end_date >= start_date)
);

CREATE INDEX idx_events_ngo ON events(ngo_id);
CREATE INDEX idx_events_status_start ON events(status, start_date);
CREATE INDEX idx_events_category ON events(category) WHERE category IS NOT NULL;
";

const REGISTRATIONS_SQL: &str = r"
CREATE TABLE registrations (
    registration_id UUID PRIMARY KEY,
    event_id UUID NOT NULL REFERENCES events(event_id) ON DELETE RESTRICT,
    full_name VARCHAR(160) NOT NULL,
    email VARCHAR(255) NOT NULL,
    phone VARCHAR(16) NOT NULL,
    tickets INTEGER NOT NULL DEFAULT 1 CHECK (tickets BETWEEN 1 AND 10),
    payment_status payment_status NOT NULL DEFAULT 'free',
    registered_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
);

CREATE UNIQUE INDEX uq_registrations_event_email ON registrations(event_id, email);
CREATE INDEX idx_registrations_event ON registrations(event_id);
";

const DROP_ALL_SQL: &str = r"
DROP TABLE IF EXISTS registrations;
DROP TABLE IF EXISTS events;
DROP TABLE IF EXISTS ngos;
DROP TYPE IF EXISTS payment_status;
DROP TYPE IF EXISTS event_status;
";
