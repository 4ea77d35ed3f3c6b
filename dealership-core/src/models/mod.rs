mod car_model;
mod manufacturer;

pub use car_model::*;
pub use manufacturer::*;

use crate::error::ValidationError;

/// Longest accepted manufacturer or model name.
pub const MAX_NAME_LEN: usize = 100;

pub(crate) fn validate_name(field: &'static str, value: &str) -> Result<(), ValidationError> {
    validate_required(field, value)?;
    if value.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::FieldTooLong {
            field,
            max: MAX_NAME_LEN,
        });
    }
    Ok(())
}

pub(crate) fn validate_required(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::BlankField { field });
    }
    Ok(())
}
