//! `SeaORM` Entity for marketing_budgets table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "marketing_budgets")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub project_id: Uuid,
    #[sea_orm(column_type = "Decimal(Some((19, 2)))")]
    pub marketing_percent: Decimal,
    #[sea_orm(column_type = "Decimal(Some((19, 2)))")]
    pub marketing_amount: Decimal,
    #[sea_orm(column_type = "Decimal(Some((19, 2)))")]
    pub cp_percent: Decimal,
    #[sea_orm(column_type = "Decimal(Some((19, 2)))")]
    pub cp_amount: Decimal,
    #[sea_orm(column_type = "Decimal(Some((19, 2)))")]
    pub other_percent: Decimal,
    #[sea_orm(column_type = "Decimal(Some((19, 2)))")]
    pub other_amount: Decimal,
    #[sea_orm(column_type = "Decimal(Some((19, 2)))")]
    pub planned_budget: Decimal,
    pub year_count: i32,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::projects::Entity",
        from = "Column::ProjectId",
        to = "super::projects::Column::Id"
    )]
    Projects,
    #[sea_orm(has_many = "super::marketing_budget_years::Entity")]
    MarketingBudgetYears,
}

impl Related<super::projects::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Projects.def()
    }
}

impl Related<super::marketing_budget_years::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MarketingBudgetYears.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
