use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

use dealership_core::db::{self, Database};
use dealership_core::models::{CarModelFilter, Category};

mod commands;

#[derive(Parser)]
#[command(name = "dealership")]
#[command(about = "Car inventory for a dealership")]
struct Cli {
    /// Database file (defaults to the platform data directory)
    #[arg(long, global = true, env = "DEALERSHIP_DATABASE")]
    database: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fill an empty catalog with example manufacturers and models
    Seed {
        /// Insert the example rows even if the catalog has data
        #[arg(long)]
        force: bool,
    },
    /// List car models, seeding the catalog first if it is empty
    Cars {
        /// Only models of this manufacturer
        #[arg(long)]
        make: Option<Uuid>,

        /// Only models of this category
        #[arg(long, value_parser = parse_category)]
        category: Option<Category>,

        /// Only models of this year
        #[arg(long)]
        year: Option<i32>,

        /// Substring of the model or manufacturer name
        #[arg(short, long)]
        search: Option<String>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// List manufacturers
    Makes {
        /// Substring of the manufacturer name
        #[arg(short, long)]
        search: Option<String>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Delete a manufacturer together with all of its models
    DeleteMake { id: Uuid },
    /// Show how many manufacturers and models are stored
    Status,
}

fn parse_category(s: &str) -> Result<Category, String> {
    Category::parse(s).map_err(|e| e.to_string())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "dealership=info,dealership_core=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let path = match cli.database {
        Some(path) => path,
        None => db::default_path()?,
    };
    tracing::info!("Using database at {}", path.display());
    let db = Database::open(&path)?;
    db.migrate()?;

    match cli.command {
        Commands::Seed { force } => commands::seed(&db, force)?,
        Commands::Cars {
            make,
            category,
            year,
            search,
            json,
        } => {
            let filter = CarModelFilter {
                manufacturer_id: make,
                category,
                model_year: year,
                search,
            };
            commands::cars(&db, &filter, json)?
        }
        Commands::Makes { search, json } => commands::makes(&db, search.as_deref(), json)?,
        Commands::DeleteMake { id } => commands::delete_make(&db, id)?,
        Commands::Status => commands::status(&db)?,
    }

    Ok(())
}
