//! `SeaORM` active enums.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Stored direction of a financial event (`financial_events.type`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum FinancialEventType {
    /// Money in.
    #[sea_orm(string_value = "INCOME")]
    Income,
    /// Money out.
    #[sea_orm(string_value = "OUTCOME")]
    Outcome,
}
