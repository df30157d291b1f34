//! `SeaORM` Entity for the events table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::sea_orm_active_enums::EventStatus;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "events")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub event_id: Uuid,
    pub ngo_id: Uuid,
    pub name: String,
    pub purpose: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub full_description: Option<String>,
    pub location: Option<String>,
    pub start_date: DateTimeWithTimeZone,
    pub end_date: Option<DateTimeWithTimeZone>,
    #[sea_orm(column_type = "Decimal(Some((12, 2)))")]
    pub ticket_price: Decimal,
    pub currency: String,
    #[sea_orm(column_type = "Decimal(Some((12, 2)))")]
    pub goal_amount: Decimal,
    #[sea_orm(column_type = "Decimal(Some((12, 2)))")]
    pub progress_amount: Decimal,
    #[sea_orm(column_type = "Text", nullable)]
    pub image_url: Option<String>,
    pub category: Option<String>,
    pub status: EventStatus,
    #[sea_orm(column_type = "Decimal(Some((9, 6)))", nullable)]
    pub latitude: Option<Decimal>,
    #[sea_orm(column_type = "Decimal(Some((9, 6)))", nullable)]
    pub longitude: Option<Decimal>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::ngos::Entity",
        from = "Column::NgoId",
        to = "super::ngos::Column::NgoId"
    )]
    Ngos,
    #[sea_orm(has_many = "super::registrations::Entity")]
    Registrations,
}

impl Related<super::ngos::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Ngos.def()
    }
}

impl Related<super::registrations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Registrations.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
