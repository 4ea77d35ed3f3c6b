//! Example data for an empty catalog.
//!
//! Five manufacturers with three models each. Every model of a manufacturer
//! shares one dealer id, 1 through 5 in manufacturer order.

use rusqlite::{Connection, TransactionBehavior};
use serde::Serialize;

use crate::db::{
    count_car_models, count_manufacturers, insert_car_model, insert_manufacturer, Database,
};
use crate::error::Result;
use crate::models::{CarModel, Category, CreateCarModelInput, CreateManufacturerInput, Manufacturer};

const MANUFACTURERS: [(&str, &str); 5] = [
    ("NISSAN", "Great cars. Japanese technology"),
    ("Mercedes", "Great cars. German technology"),
    ("Audi", "Great cars. German technology"),
    ("Kia", "Great cars. Korean technology"),
    ("Toyota", "Great cars. Japanese technology"),
];

struct ModelFixture {
    /// Index into `MANUFACTURERS`.
    manufacturer: usize,
    dealer_id: i64,
    name: &'static str,
    category: Category,
    model_year: i32,
}

const fn fixture(manufacturer: usize, name: &'static str, category: Category) -> ModelFixture {
    ModelFixture {
        manufacturer,
        dealer_id: manufacturer as i64 + 1,
        name,
        category,
        model_year: 2023,
    }
}

const CAR_MODELS: [ModelFixture; 15] = [
    fixture(0, "Pathfinder", Category::Suv),
    fixture(0, "Qashqai", Category::Suv),
    fixture(0, "XTRAIL", Category::Suv),
    fixture(1, "A-Class", Category::Suv),
    fixture(1, "C-Class", Category::Suv),
    fixture(1, "E-Class", Category::Suv),
    fixture(2, "A4", Category::Suv),
    fixture(2, "A5", Category::Suv),
    fixture(2, "A6", Category::Suv),
    fixture(3, "Sorrento", Category::Suv),
    fixture(3, "Carnival", Category::Suv),
    fixture(3, "Cerato", Category::Sedan),
    fixture(4, "Corolla", Category::Sedan),
    fixture(4, "Camry", Category::Sedan),
    fixture(4, "Kluger", Category::Suv),
];

/// Rows written by one seeding run, in insertion order.
#[derive(Debug, Clone, Serialize)]
pub struct SeedSummary {
    pub manufacturers: Vec<Manufacturer>,
    pub car_models: Vec<CarModel>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SeedOutcome {
    Seeded(SeedSummary),
    /// The catalog already had data; nothing was written.
    AlreadyPopulated {
        manufacturers: usize,
        car_models: usize,
    },
}

/// Insert every fixture row. Manufacturers go first so that each model can
/// reference its maker by position.
fn insert_fixtures(conn: &Connection) -> Result<SeedSummary> {
    let manufacturers = MANUFACTURERS
        .iter()
        .map(|&(name, description)| {
            insert_manufacturer(
                conn,
                CreateManufacturerInput {
                    name: name.to_string(),
                    description: description.to_string(),
                },
            )
        })
        .collect::<Result<Vec<_>>>()?;

    let car_models = CAR_MODELS
        .iter()
        .map(|f| {
            insert_car_model(
                conn,
                CreateCarModelInput {
                    manufacturer_id: manufacturers[f.manufacturer].id,
                    dealer_id: f.dealer_id,
                    name: f.name.to_string(),
                    category: Some(f.category),
                    model_year: f.model_year,
                },
            )
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(SeedSummary {
        manufacturers,
        car_models,
    })
}

impl Database {
    /// Insert the example rows unconditionally, all or nothing.
    ///
    /// Calling this twice duplicates every row; use [`Database::seed_if_empty`]
    /// unless duplicates are wanted.
    pub fn populate(&self) -> Result<SeedSummary> {
        let summary =
            self.with_transaction(TransactionBehavior::Immediate, |tx| insert_fixtures(tx))?;
        tracing::info!(
            "Database populated with {} manufacturers and {} car models",
            summary.manufacturers.len(),
            summary.car_models.len()
        );
        Ok(summary)
    }

    /// Seed the catalog only when it has no manufacturers. The check and the
    /// inserts share one immediate transaction, so concurrent callers on the
    /// same file cannot both seed.
    pub fn seed_if_empty(&self) -> Result<SeedOutcome> {
        let outcome = self.with_transaction(TransactionBehavior::Immediate, |tx| {
            let manufacturers = count_manufacturers(tx)?;
            if manufacturers > 0 {
                return Ok(SeedOutcome::AlreadyPopulated {
                    manufacturers,
                    car_models: count_car_models(tx)?,
                });
            }
            insert_fixtures(tx).map(SeedOutcome::Seeded)
        })?;

        match &outcome {
            SeedOutcome::Seeded(summary) => tracing::info!(
                "Database populated with {} manufacturers and {} car models",
                summary.manufacturers.len(),
                summary.car_models.len()
            ),
            SeedOutcome::AlreadyPopulated { .. } => {
                tracing::debug!("Catalog already populated, skipping seed")
            }
        }
        Ok(outcome)
    }
}
