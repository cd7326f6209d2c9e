//! `SeaORM` Entity for budget_defaults table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "budget_defaults")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(column_type = "Decimal(Some((19, 2)))")]
    pub marketing_percent: Decimal,
    #[sea_orm(column_type = "Decimal(Some((19, 2)))")]
    pub cp_percent: Decimal,
    #[sea_orm(column_type = "Decimal(Some((19, 2)))")]
    pub other_percent: Decimal,
    pub is_active: bool,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
