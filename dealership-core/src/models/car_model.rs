use std::fmt;
use std::ops::RangeInclusive;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Manufacturer;
use crate::error::ValidationError;

pub const MIN_MODEL_YEAR: i32 = 2015;
pub const MAX_MODEL_YEAR: i32 = 2023;
pub const MODEL_YEARS: RangeInclusive<i32> = MIN_MODEL_YEAR..=MAX_MODEL_YEAR;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CarModel {
    pub id: Uuid,
    pub manufacturer_id: Uuid,
    /// Dealer in the external dealer system; not checked here.
    pub dealer_id: i64,
    pub name: String,
    pub category: Category,
    pub model_year: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Category {
    #[default]
    Sedan,
    #[serde(rename = "SUV")]
    Suv,
    Wagon,
    Coupe,
    Hatchback,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Self::Sedan,
        Self::Suv,
        Self::Wagon,
        Self::Coupe,
        Self::Hatchback,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sedan => "Sedan",
            Self::Suv => "SUV",
            Self::Wagon => "Wagon",
            Self::Coupe => "Coupe",
            Self::Hatchback => "Hatchback",
        }
    }

    /// Case-insensitive; also accepts the legacy `WAGON` spelling.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "sedan" => Some(Self::Sedan),
            "suv" => Some(Self::Suv),
            "wagon" => Some(Self::Wagon),
            "coupe" => Some(Self::Coupe),
            "hatchback" => Some(Self::Hatchback),
            _ => None,
        }
    }

    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        Self::from_str(s).ok_or_else(|| ValidationError::UnknownCategory(s.to_string()))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn validate_model_year(year: i32) -> Result<(), ValidationError> {
    if MODEL_YEARS.contains(&year) {
        Ok(())
    } else {
        Err(ValidationError::ModelYearOutOfRange { year })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCarModelInput {
    pub manufacturer_id: Uuid,
    pub dealer_id: i64,
    pub name: String,
    #[serde(default)]
    pub category: Option<Category>,
    pub model_year: i32,
}

impl CreateCarModelInput {
    pub fn validate(&self) -> Result<(), ValidationError> {
        super::validate_name("name", &self.name)?;
        validate_model_year(self.model_year)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateCarModelInput {
    pub manufacturer_id: Option<Uuid>,
    pub dealer_id: Option<i64>,
    pub name: Option<String>,
    pub category: Option<Category>,
    pub model_year: Option<i32>,
}

impl CarModel {
    /// Merge an update into this row, validating the fields it touches.
    /// Whether a new manufacturer exists is checked by the caller.
    pub(crate) fn apply(&mut self, input: UpdateCarModelInput) -> Result<(), ValidationError> {
        if let Some(name) = input.name {
            super::validate_name("name", &name)?;
            self.name = name;
        }
        if let Some(year) = input.model_year {
            validate_model_year(year)?;
            self.model_year = year;
        }
        if let Some(manufacturer_id) = input.manufacturer_id {
            self.manufacturer_id = manufacturer_id;
        }
        if let Some(dealer_id) = input.dealer_id {
            self.dealer_id = dealer_id;
        }
        if let Some(category) = input.category {
            self.category = category;
        }
        Ok(())
    }
}

/// Query criteria for the catalog. Unset fields match everything; set
/// fields are combined with AND.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CarModelFilter {
    pub manufacturer_id: Option<Uuid>,
    pub category: Option<Category>,
    pub model_year: Option<i32>,
    /// Case-insensitive substring of the model or manufacturer name. Case
    /// folding covers ASCII letters only.
    pub search: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarModelWithManufacturer {
    #[serde(flatten)]
    pub model: CarModel,
    pub manufacturer: Manufacturer,
}

impl fmt::Display for CarModelWithManufacturer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.manufacturer.name, self.model.name)
    }
}
