use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Manufacturer {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl fmt::Display for Manufacturer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateManufacturerInput {
    pub name: String,
    pub description: String,
}

impl CreateManufacturerInput {
    pub fn validate(&self) -> Result<(), ValidationError> {
        super::validate_name("name", &self.name)?;
        super::validate_required("description", &self.description)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateManufacturerInput {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl Manufacturer {
    /// Merge an update into this row, validating the fields it touches.
    pub(crate) fn apply(&mut self, input: UpdateManufacturerInput) -> Result<(), ValidationError> {
        if let Some(name) = input.name {
            super::validate_name("name", &name)?;
            self.name = name;
        }
        if let Some(description) = input.description {
            super::validate_required("description", &description)?;
            self.description = description;
        }
        Ok(())
    }
}
