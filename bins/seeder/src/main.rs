//! Database seeder for GiveHub development and testing.
//!
//! Seeds two NGOs and a handful of events in different lifecycle states so
//! the home partition, search, and admin views all have data to show.
//!
//! Usage: cargo run --bin seeder

use chrono::{Duration, Utc};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use uuid::Uuid;

use givehub_db::entities::{
    events, ngos,
    sea_orm_active_enums::EventStatus,
};

/// Seed NGO ids (consistent across runs).
const NGO_HELPING_HANDS: &str = "00000000-0000-0000-0000-000000000001";
const NGO_OCEAN_CARE: &str = "00000000-0000-0000-0000-000000000002";

/// Seed event ids.
const EVENT_GALA: &str = "00000000-0000-0000-0000-000000000101";
const EVENT_BEACH_CLEANUP: &str = "00000000-0000-0000-0000-000000000102";
const EVENT_WINTER_APPEAL: &str = "00000000-0000-0000-0000-000000000103";

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let database_url =
        std::env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");

    println!("Connecting to database...");
    let db = givehub_db::connect(&database_url)
        .await
        .expect("Failed to connect to database");

    println!("Seeding NGOs...");
    seed_ngos(&db).await;

    println!("Seeding events...");
    seed_events(&db).await;

    println!("Seeding complete!");
}

fn id(value: &str) -> Uuid {
    Uuid::parse_str(value).unwrap()
}

async fn seed_ngos(db: &DatabaseConnection) {
    let now = Utc::now().into();
    let seeds = [
        (NGO_HELPING_HANDS, "Helping Hands", "Sydney, NSW", "contact@helpinghands.org"),
        (NGO_OCEAN_CARE, "Ocean Care Alliance", "Cairns, QLD", "hello@oceancare.org"),
    ];

    for (ngo_id, name, location, email) in seeds {
        if ngos::Entity::find_by_id(id(ngo_id))
            .one(db)
            .await
            .ok()
            .flatten()
            .is_some()
        {
            println!("  NGO '{name}' already exists, skipping...");
            continue;
        }

        let ngo = ngos::ActiveModel {
            ngo_id: Set(id(ngo_id)),
            ngo_name: Set(name.to_string()),
            hq_location: Set(location.to_string()),
            contact_email: Set(email.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
        };
        ngo.insert(db).await.expect("Failed to seed NGO");
    }
}

#[allow(clippy::too_many_lines)]
async fn seed_events(db: &DatabaseConnection) {
    let now = Utc::now();

    // One upcoming, one past, one draft: exercises every home-view branch.
    let seeds = [
        (
            EVENT_GALA,
            NGO_HELPING_HANDS,
            "Annual Charity Gala",
            "Black-tie dinner supporting emergency housing",
            "Sydney Town Hall",
            now + Duration::days(45),
            Some(now + Duration::days(45) + Duration::hours(5)),
            Decimal::new(15_000, 2), // 150.00
            Decimal::new(5_000_000, 2),
            Decimal::new(1_250_000, 2),
            "gala",
            EventStatus::Active,
        ),
        (
            EVENT_BEACH_CLEANUP,
            NGO_OCEAN_CARE,
            "Reef Beach Cleanup",
            "Community cleanup day along the northern beaches",
            "Palm Cove Beach",
            now - Duration::days(30),
            Some(now - Duration::days(30) + Duration::hours(6)),
            Decimal::ZERO,
            Decimal::new(200_000, 2),
            Decimal::new(215_000, 2),
            "environment",
            EventStatus::Active,
        ),
        (
            EVENT_WINTER_APPEAL,
            NGO_HELPING_HANDS,
            "Winter Appeal Launch",
            "Launch night for the winter donation drive",
            "Melbourne Exhibition Centre",
            now + Duration::days(90),
            None,
            Decimal::new(2_500, 2), // 25.00
            Decimal::new(1_000_000, 2),
            Decimal::ZERO,
            "appeal",
            EventStatus::Draft,
        ),
    ];

    for (event_id, ngo_id, name, purpose, location, start, end, price, goal, progress, category, status) in
        seeds
    {
        if events::Entity::find_by_id(id(event_id))
            .one(db)
            .await
            .ok()
            .flatten()
            .is_some()
        {
            println!("  Event '{name}' already exists, skipping...");
            continue;
        }

        let created = Utc::now().into();
        let event = events::ActiveModel {
            event_id: Set(id(event_id)),
            ngo_id: Set(id(ngo_id)),
            name: Set(name.to_string()),
            purpose: Set(Some(purpose.to_string())),
            full_description: Set(None),
            location: Set(Some(location.to_string())),
            start_date: Set(start.into()),
            end_date: Set(end.map(Into::into)),
            ticket_price: Set(price),
            currency: Set("AUD".to_string()),
            goal_amount: Set(goal),
            progress_amount: Set(progress),
            image_url: Set(None),
            category: Set(Some(category.to_string())),
            status: Set(status),
            latitude: Set(None),
            longitude: Set(None),
            created_at: Set(created),
            updated_at: Set(created),
        };
        event.insert(db).await.expect("Failed to seed event");
    }
}
