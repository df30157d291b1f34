//! `SeaORM` entity definitions.

pub mod events;
pub mod ngos;
pub mod registrations;
pub mod sea_orm_active_enums;
