use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension, Row, TransactionBehavior};
use uuid::Uuid;

use super::{like_pattern, parse_timestamp, parse_uuid, timestamp, Database};
use crate::error::Result;
use crate::models::{CreateManufacturerInput, Manufacturer, UpdateManufacturerInput};

pub(super) const COLUMNS: &str = "id, name, description, created_at, updated_at";

/// Read a manufacturer from five columns starting at `offset`.
pub(super) fn from_row(row: &Row<'_>, offset: usize) -> rusqlite::Result<Manufacturer> {
    let id: String = row.get(offset)?;
    let created_at: String = row.get(offset + 3)?;
    let updated_at: String = row.get(offset + 4)?;

    Ok(Manufacturer {
        id: parse_uuid(offset, &id)?,
        name: row.get(offset + 1)?,
        description: row.get(offset + 2)?,
        created_at: parse_timestamp(offset + 3, &created_at)?,
        updated_at: parse_timestamp(offset + 4, &updated_at)?,
    })
}

pub(crate) fn insert_manufacturer(
    conn: &Connection,
    input: CreateManufacturerInput,
) -> Result<Manufacturer> {
    input.validate()?;

    let now = Utc::now();
    let manufacturer = Manufacturer {
        id: Uuid::new_v4(),
        name: input.name,
        description: input.description,
        created_at: now,
        updated_at: now,
    };

    conn.execute(
        "INSERT INTO manufacturers (id, name, description, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            manufacturer.id.to_string(),
            manufacturer.name,
            manufacturer.description,
            timestamp(&manufacturer.created_at),
            timestamp(&manufacturer.updated_at),
        ],
    )?;

    tracing::debug!("Created manufacturer {} ({})", manufacturer.name, manufacturer.id);
    Ok(manufacturer)
}

pub(super) fn find_manufacturer(conn: &Connection, id: Uuid) -> Result<Option<Manufacturer>> {
    let manufacturer = conn
        .query_row(
            &format!("SELECT {COLUMNS} FROM manufacturers WHERE id = ?1"),
            params![id.to_string()],
            |row| from_row(row, 0),
        )
        .optional()?;
    Ok(manufacturer)
}

pub(super) fn manufacturer_exists(conn: &Connection, id: Uuid) -> Result<bool> {
    let exists = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM manufacturers WHERE id = ?1)",
        params![id.to_string()],
        |row| row.get(0),
    )?;
    Ok(exists)
}

pub(crate) fn count_manufacturers(conn: &Connection) -> Result<usize> {
    let count: i64 = conn.query_row("SELECT COUNT(*) FROM manufacturers", [], |row| row.get(0))?;
    Ok(count as usize)
}

impl Database {
    pub fn create_manufacturer(&self, input: CreateManufacturerInput) -> Result<Manufacturer> {
        self.with_connection(|conn| insert_manufacturer(conn, input))
    }

    pub fn get_manufacturer(&self, id: Uuid) -> Result<Option<Manufacturer>> {
        self.with_connection(|conn| find_manufacturer(conn, id))
    }

    /// All manufacturers in creation order.
    pub fn get_all_manufacturers(&self) -> Result<Vec<Manufacturer>> {
        self.with_connection(|conn| {
            let mut stmt =
                conn.prepare(&format!("SELECT {COLUMNS} FROM manufacturers ORDER BY rowid"))?;
            let rows = stmt.query_map([], |row| from_row(row, 0))?;
            Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
        })
    }

    /// Manufacturers whose name contains `term`, ignoring case. SQLite
    /// `LIKE` folds ASCII letters only, so "škoda" does not match "Škoda".
    pub fn search_manufacturers(&self, term: &str) -> Result<Vec<Manufacturer>> {
        self.with_connection(|conn| {
            let mut stmt = conn.prepare(&format!(
                "SELECT {COLUMNS} FROM manufacturers
                 WHERE name LIKE ?1 ESCAPE '\\'
                 ORDER BY rowid"
            ))?;
            let rows = stmt.query_map(params![like_pattern(term)], |row| from_row(row, 0))?;
            Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
        })
    }

    /// Returns `false` when no manufacturer has this id.
    pub fn update_manufacturer(&self, id: Uuid, input: UpdateManufacturerInput) -> Result<bool> {
        self.with_connection(|conn| {
            let Some(mut manufacturer) = find_manufacturer(conn, id)? else {
                return Ok(false);
            };
            manufacturer.apply(input)?;
            manufacturer.updated_at = Utc::now();

            conn.execute(
                "UPDATE manufacturers SET name = ?2, description = ?3, updated_at = ?4 WHERE id = ?1",
                params![
                    id.to_string(),
                    manufacturer.name,
                    manufacturer.description,
                    timestamp(&manufacturer.updated_at),
                ],
            )?;

            tracing::debug!("Updated manufacturer {}", id);
            Ok(true)
        })
    }

    /// Delete a manufacturer and, through the foreign key, every car model
    /// that references it. Returns how many car models went with it, or
    /// `None` when no manufacturer has this id.
    pub fn delete_manufacturer(&self, id: Uuid) -> Result<Option<usize>> {
        self.with_transaction(TransactionBehavior::Immediate, |tx| {
            let models: i64 = tx.query_row(
                "SELECT COUNT(*) FROM car_models WHERE manufacturer_id = ?1",
                params![id.to_string()],
                |row| row.get(0),
            )?;
            let deleted = tx.execute(
                "DELETE FROM manufacturers WHERE id = ?1",
                params![id.to_string()],
            )?;

            if deleted == 0 {
                return Ok(None);
            }
            tracing::info!("Deleted manufacturer {} and {} car model(s)", id, models);
            Ok(Some(models as usize))
        })
    }

    pub fn count_manufacturers(&self) -> Result<usize> {
        self.with_connection(count_manufacturers)
    }
}
