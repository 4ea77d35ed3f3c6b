//! Core library for the dealership inventory.
//!
//! This crate provides the manufacturer and car model types, the SQLite
//! storage layer that enforces their integrity rules, and the routine that
//! seeds an empty catalog with example data. It is independent of any
//! front end.
//!
//! # Usage
//!
//! ```no_run
//! use dealership_core::db::Database;
//! use dealership_core::models::*;
//!
//! let db = Database::open_default()?;
//! db.migrate()?;
//! db.seed_if_empty()?;
//!
//! let suvs = db.list_car_models(&CarModelFilter {
//!     category: Some(Category::Suv),
//!     ..Default::default()
//! })?;
//! # Ok::<(), dealership_core::Error>(())
//! ```

pub mod db;
pub mod error;
pub mod models;
pub mod seed;

// Re-export commonly used types at crate root
pub use db::Database;
pub use error::{Error, Result, ValidationError};
pub use seed::{SeedOutcome, SeedSummary};
