//! Initial schema for projects, default percentages and saved marketing budgets.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(SCHEMA_SQL).await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(
            r"
            DROP TABLE IF EXISTS marketing_budget_years CASCADE;
            DROP TABLE IF EXISTS marketing_budgets CASCADE;
            DROP TABLE IF EXISTS budget_defaults CASCADE;
            DROP TABLE IF EXISTS projects CASCADE;
            ",
        )
        .await?;
        Ok(())
    }
}

const SCHEMA_SQL: &str = r"
CREATE TABLE projects (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    name VARCHAR(255) NOT NULL,
    project_cost NUMERIC(19, 2) NOT NULL DEFAULT 0,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    CONSTRAINT chk_project_cost_non_negative CHECK (project_cost >= 0)
);

-- Default category percentages; the newest active row is used
CREATE TABLE budget_defaults (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    marketing_percent NUMERIC(19, 2) NOT NULL DEFAULT 0,
    cp_percent NUMERIC(19, 2) NOT NULL DEFAULT 0,
    other_percent NUMERIC(19, 2) NOT NULL DEFAULT 0,
    is_active BOOLEAN NOT NULL DEFAULT true,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
);

CREATE INDEX idx_budget_defaults_active ON budget_defaults(created_at DESC) WHERE is_active;

CREATE TABLE marketing_budgets (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    project_id UUID NOT NULL REFERENCES projects(id) ON DELETE CASCADE,
    marketing_percent NUMERIC(19, 2) NOT NULL,
    marketing_amount NUMERIC(19, 2) NOT NULL,
    cp_percent NUMERIC(19, 2) NOT NULL,
    cp_amount NUMERIC(19, 2) NOT NULL,
    other_percent NUMERIC(19, 2) NOT NULL,
    other_amount NUMERIC(19, 2) NOT NULL,
    planned_budget NUMERIC(19, 2) NOT NULL,
    year_count INTEGER NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    CONSTRAINT chk_year_count_non_negative CHECK (year_count >= 0)
);

CREATE INDEX idx_marketing_budgets_project ON marketing_budgets(project_id, created_at DESC);

CREATE TABLE marketing_budget_years (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    budget_id UUID NOT NULL REFERENCES marketing_budgets(id) ON DELETE CASCADE,
    year_number INTEGER NOT NULL,
    percent NUMERIC(19, 2) NOT NULL,
    total_budget NUMERIC(19, 2) NOT NULL,
    lead_target NUMERIC NOT NULL DEFAULT 0,
    q1 NUMERIC(19, 2) NOT NULL,
    q2 NUMERIC(19, 2) NOT NULL,
    q3 NUMERIC(19, 2) NOT NULL,
    q4 NUMERIC(19, 2) NOT NULL,
    manually_edited BOOLEAN NOT NULL DEFAULT false,
    CONSTRAINT uq_budget_year UNIQUE (budget_id, year_number),
    CONSTRAINT chk_year_number_positive CHECK (year_number >= 1),
    -- Quarters must add up to the year's total
    CONSTRAINT chk_quarters_match_total CHECK (q1 + q2 + q3 + q4 = total_budget)
);
";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_columns_hold_the_full_money_range() {
        assert!(!SCHEMA_SQL.contains("NUMERIC(9, 2)"));
        for column in [
            "marketing_percent NUMERIC(19, 2)",
            "cp_percent NUMERIC(19, 2)",
            "other_percent NUMERIC(19, 2)",
            "percent NUMERIC(19, 2)",
        ] {
            assert!(SCHEMA_SQL.contains(column), "missing `{column}`");
        }
    }
}
