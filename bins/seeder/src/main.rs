//! Database seeder for MBudget development and testing.
//!
//! Seeds the default category percentages and a few demo projects.
//!
//! Usage: cargo run --bin seeder

use mbudget_core::session::DefaultPercentages;
use mbudget_db::{BudgetDefaultsRepository, ProjectRepository};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use sea_orm::DatabaseConnection;

/// Demo projects and their costs.
const DEMO_PROJECTS: [(&str, Decimal); 3] = [
    ("Riverside Residences", dec!(2500000.00)),
    ("Northgate Office Park", dec!(8750000.00)),
    ("Harbour Lofts", dec!(1200000.00)),
];

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let database_url =
        std::env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");

    println!("Connecting to database...");
    let db = mbudget_db::connect(&database_url)
        .await
        .expect("Failed to connect to database");

    println!("Seeding default budget percentages...");
    seed_budget_defaults(&db).await;

    println!("Seeding demo projects...");
    seed_projects(&db).await;

    println!("Seeding complete!");
}

/// Seeds marketing 10%, CP 10%, Other 5% unless active defaults exist.
async fn seed_budget_defaults(db: &DatabaseConnection) {
    let repo = BudgetDefaultsRepository::new(db.clone());

    match repo.find_active().await {
        Ok(Some(_)) => {
            println!("  Active defaults already exist, skipping...");
            return;
        }
        Ok(None) => {}
        Err(e) => {
            eprintln!("Failed to look up budget defaults: {e}");
            return;
        }
    }

    let defaults = DefaultPercentages {
        marketing_percent: dec!(10),
        cp_percent: dec!(10),
        other_percent: dec!(5),
    };

    if let Err(e) = repo.replace_active(defaults).await {
        eprintln!("Failed to insert budget defaults: {e}");
    } else {
        println!("  Created defaults: marketing 10%, CP 10%, other 5%");
    }
}

/// Seeds demo projects unless any project exists.
async fn seed_projects(db: &DatabaseConnection) {
    let repo = ProjectRepository::new(db.clone());

    match repo.list().await {
        Ok(existing) if !existing.is_empty() => {
            println!("  {} projects already exist, skipping...", existing.len());
            return;
        }
        Ok(_) => {}
        Err(e) => {
            eprintln!("Failed to list projects: {e}");
            return;
        }
    }

    for (name, cost) in DEMO_PROJECTS {
        match repo.create(name, cost).await {
            Ok(project) => println!("  Created project: {name} ({})", project.id),
            Err(e) => eprintln!("Failed to insert project {name}: {e}"),
        }
    }
}
