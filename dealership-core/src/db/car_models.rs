use chrono::Utc;
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row, TransactionBehavior};
use uuid::Uuid;

use super::manufacturers::{self, manufacturer_exists};
use super::{like_pattern, parse_category, parse_timestamp, parse_uuid, timestamp, Database};
use crate::error::{Error, Result};
use crate::models::{
    CarModel, CarModelFilter, CarModelWithManufacturer, CreateCarModelInput, UpdateCarModelInput,
};

const COLUMNS: &str =
    "id, manufacturer_id, dealer_id, name, category, model_year, created_at, updated_at";

const SELECT_WITH_MANUFACTURER: &str = "SELECT m.id, m.manufacturer_id, m.dealer_id, m.name, m.category, m.model_year, m.created_at, m.updated_at,
        f.id, f.name, f.description, f.created_at, f.updated_at
 FROM car_models m
 JOIN manufacturers f ON f.id = m.manufacturer_id";

fn from_row(row: &Row<'_>) -> rusqlite::Result<CarModel> {
    let id: String = row.get(0)?;
    let manufacturer_id: String = row.get(1)?;
    let category: String = row.get(4)?;
    let created_at: String = row.get(6)?;
    let updated_at: String = row.get(7)?;

    Ok(CarModel {
        id: parse_uuid(0, &id)?,
        manufacturer_id: parse_uuid(1, &manufacturer_id)?,
        dealer_id: row.get(2)?,
        name: row.get(3)?,
        category: parse_category(4, &category)?,
        model_year: row.get(5)?,
        created_at: parse_timestamp(6, &created_at)?,
        updated_at: parse_timestamp(7, &updated_at)?,
    })
}

fn joined_from_row(row: &Row<'_>) -> rusqlite::Result<CarModelWithManufacturer> {
    Ok(CarModelWithManufacturer {
        model: from_row(row)?,
        manufacturer: manufacturers::from_row(row, 8)?,
    })
}

pub(crate) fn insert_car_model(conn: &Connection, input: CreateCarModelInput) -> Result<CarModel> {
    input.validate()?;
    if !manufacturer_exists(conn, input.manufacturer_id)? {
        return Err(Error::ManufacturerNotFound(input.manufacturer_id));
    }

    let now = Utc::now();
    let model = CarModel {
        id: Uuid::new_v4(),
        manufacturer_id: input.manufacturer_id,
        dealer_id: input.dealer_id,
        name: input.name,
        category: input.category.unwrap_or_default(),
        model_year: input.model_year,
        created_at: now,
        updated_at: now,
    };

    conn.execute(
        &format!("INSERT INTO car_models ({COLUMNS}) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)"),
        params![
            model.id.to_string(),
            model.manufacturer_id.to_string(),
            model.dealer_id,
            model.name,
            model.category.as_str(),
            model.model_year,
            timestamp(&model.created_at),
            timestamp(&model.updated_at),
        ],
    )?;

    tracing::debug!("Created car model {} ({})", model.name, model.id);
    Ok(model)
}

fn find_car_model(conn: &Connection, id: Uuid) -> Result<Option<CarModel>> {
    let model = conn
        .query_row(
            &format!("SELECT {COLUMNS} FROM car_models WHERE id = ?1"),
            params![id.to_string()],
            from_row,
        )
        .optional()?;
    Ok(model)
}

pub(crate) fn count_car_models(conn: &Connection) -> Result<usize> {
    let count: i64 = conn.query_row("SELECT COUNT(*) FROM car_models", [], |row| row.get(0))?;
    Ok(count as usize)
}

impl Database {
    pub fn create_car_model(&self, input: CreateCarModelInput) -> Result<CarModel> {
        self.with_connection(|conn| insert_car_model(conn, input))
    }

    pub fn get_car_model(&self, id: Uuid) -> Result<Option<CarModel>> {
        self.with_connection(|conn| find_car_model(conn, id))
    }

    pub fn get_car_model_with_manufacturer(
        &self,
        id: Uuid,
    ) -> Result<Option<CarModelWithManufacturer>> {
        self.with_connection(|conn| {
            let model = conn
                .query_row(
                    &format!("{SELECT_WITH_MANUFACTURER} WHERE m.id = ?1"),
                    params![id.to_string()],
                    joined_from_row,
                )
                .optional()?;
            Ok(model)
        })
    }

    /// Car models matching every criterion set in `filter`, in creation order.
    pub fn list_car_models(&self, filter: &CarModelFilter) -> Result<Vec<CarModelWithManufacturer>> {
        let mut clauses: Vec<&str> = Vec::new();
        let mut values: Vec<Value> = Vec::new();

        if let Some(manufacturer_id) = filter.manufacturer_id {
            clauses.push("m.manufacturer_id = ?");
            values.push(Value::Text(manufacturer_id.to_string()));
        }
        if let Some(category) = filter.category {
            clauses.push("m.category = ?");
            values.push(Value::Text(category.as_str().to_string()));
        }
        if let Some(year) = filter.model_year {
            clauses.push("m.model_year = ?");
            values.push(Value::Integer(i64::from(year)));
        }
        if let Some(term) = filter.search.as_deref().filter(|t| !t.is_empty()) {
            clauses.push("(m.name LIKE ? ESCAPE '\\' OR f.name LIKE ? ESCAPE '\\')");
            let pattern = like_pattern(term);
            values.push(Value::Text(pattern.clone()));
            values.push(Value::Text(pattern));
        }

        let mut sql = SELECT_WITH_MANUFACTURER.to_string();
        if !clauses.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&clauses.join(" AND "));
        }
        sql.push_str(" ORDER BY m.rowid");

        self.with_connection(|conn| {
            let mut stmt = conn.prepare(&sql)?;
            let rows = stmt.query_map(params_from_iter(values), joined_from_row)?;
            Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
        })
    }

    /// The models a manufacturer makes, in creation order.
    pub fn list_car_models_for_manufacturer(&self, manufacturer_id: Uuid) -> Result<Vec<CarModel>> {
        self.with_connection(|conn| {
            let mut stmt = conn.prepare(&format!(
                "SELECT {COLUMNS} FROM car_models WHERE manufacturer_id = ?1 ORDER BY rowid"
            ))?;
            let rows = stmt.query_map(params![manufacturer_id.to_string()], from_row)?;
            Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
        })
    }

    /// Returns `false` when no car model has this id.
    pub fn update_car_model(&self, id: Uuid, input: UpdateCarModelInput) -> Result<bool> {
        self.with_transaction(TransactionBehavior::Immediate, |tx| {
            let Some(mut model) = find_car_model(tx, id)? else {
                return Ok(false);
            };
            if let Some(manufacturer_id) = input.manufacturer_id {
                if !manufacturer_exists(tx, manufacturer_id)? {
                    return Err(Error::ManufacturerNotFound(manufacturer_id));
                }
            }
            model.apply(input)?;
            model.updated_at = Utc::now();

            tx.execute(
                "UPDATE car_models
                 SET manufacturer_id = ?2, dealer_id = ?3, name = ?4, category = ?5,
                     model_year = ?6, updated_at = ?7
                 WHERE id = ?1",
                params![
                    id.to_string(),
                    model.manufacturer_id.to_string(),
                    model.dealer_id,
                    model.name,
                    model.category.as_str(),
                    model.model_year,
                    timestamp(&model.updated_at),
                ],
            )?;

            tracing::debug!("Updated car model {}", id);
            Ok(true)
        })
    }

    /// Returns `false` when no car model has this id.
    pub fn delete_car_model(&self, id: Uuid) -> Result<bool> {
        self.with_connection(|conn| {
            let deleted = conn.execute("DELETE FROM car_models WHERE id = ?1", params![id.to_string()])?;
            if deleted > 0 {
                tracing::debug!("Deleted car model {}", id);
            }
            Ok(deleted > 0)
        })
    }

    pub fn count_car_models(&self) -> Result<usize> {
        self.with_connection(count_car_models)
    }
}
