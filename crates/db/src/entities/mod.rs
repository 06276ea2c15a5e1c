//! `SeaORM` entity definitions.

pub mod financial_events;
pub mod sea_orm_active_enums;
pub mod users;
