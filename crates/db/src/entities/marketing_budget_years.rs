//! `SeaORM` Entity for marketing_budget_years table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "marketing_budget_years")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub budget_id: Uuid,
    pub year_number: i32,
    #[sea_orm(column_type = "Decimal(Some((19, 2)))")]
    pub percent: Decimal,
    #[sea_orm(column_type = "Decimal(Some((19, 2)))")]
    pub total_budget: Decimal,
    #[sea_orm(column_type = "Decimal(None)")]
    pub lead_target: Decimal,
    #[sea_orm(column_type = "Decimal(Some((19, 2)))")]
    pub q1: Decimal,
    #[sea_orm(column_type = "Decimal(Some((19, 2)))")]
    pub q2: Decimal,
    #[sea_orm(column_type = "Decimal(Some((19, 2)))")]
    pub q3: Decimal,
    #[sea_orm(column_type = "Decimal(Some((19, 2)))")]
    pub q4: Decimal,
    pub manually_edited: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::marketing_budgets::Entity",
        from = "Column::BudgetId",
        to = "super::marketing_budgets::Column::Id",
        on_delete = "Cascade"
    )]
    MarketingBudgets,
}

impl Related<super::marketing_budgets::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MarketingBudgets.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
