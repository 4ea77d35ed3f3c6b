//! Subcommand handlers. Results go to stdout; logs go to stderr.

use anyhow::bail;
use uuid::Uuid;

use dealership_core::models::CarModelFilter;
use dealership_core::{Database, SeedOutcome};

pub fn seed(db: &Database, force: bool) -> anyhow::Result<()> {
    if force {
        let summary = db.populate()?;
        println!(
            "Inserted {} manufacturers and {} car models",
            summary.manufacturers.len(),
            summary.car_models.len()
        );
        return Ok(());
    }

    match db.seed_if_empty()? {
        SeedOutcome::Seeded(summary) => println!(
            "Inserted {} manufacturers and {} car models",
            summary.manufacturers.len(),
            summary.car_models.len()
        ),
        SeedOutcome::AlreadyPopulated {
            manufacturers,
            car_models,
        } => println!(
            "Catalog already has {} manufacturers and {} car models; nothing inserted",
            manufacturers, car_models
        ),
    }
    Ok(())
}

/// The catalog view: an empty catalog is seeded before it is listed.
pub fn cars(db: &Database, filter: &CarModelFilter, json: bool) -> anyhow::Result<()> {
    db.seed_if_empty()?;

    let models = db.list_car_models(filter)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&models)?);
        return Ok(());
    }

    for entry in &models {
        println!(
            "{}  {}  {}  {}  dealer {}",
            entry.model.id,
            entry,
            entry.model.category,
            entry.model.model_year,
            entry.model.dealer_id
        );
    }
    Ok(())
}

pub fn makes(db: &Database, search: Option<&str>, json: bool) -> anyhow::Result<()> {
    let manufacturers = match search {
        Some(term) => db.search_manufacturers(term)?,
        None => db.get_all_manufacturers()?,
    };
    if json {
        println!("{}", serde_json::to_string_pretty(&manufacturers)?);
        return Ok(());
    }

    for manufacturer in &manufacturers {
        println!("{}  {}  {}", manufacturer.id, manufacturer, manufacturer.description);
    }
    Ok(())
}

pub fn delete_make(db: &Database, id: Uuid) -> anyhow::Result<()> {
    let Some(models) = db.delete_manufacturer(id)? else {
        bail!("manufacturer not found: {}", id);
    };
    println!("Deleted manufacturer {} and {} car models", id, models);
    Ok(())
}

pub fn status(db: &Database) -> anyhow::Result<()> {
    println!("manufacturers: {}", db.count_manufacturers()?);
    println!("car models: {}", db.count_car_models()?);
    Ok(())
}
