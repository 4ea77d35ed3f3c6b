use thiserror::Error;
use uuid::Uuid;

pub type Result<T> = std::result::Result<T, Error>;

/// Rejected input, detected before anything is written.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("model year {year} is outside {min}..={max}", min = crate::models::MIN_MODEL_YEAR, max = crate::models::MAX_MODEL_YEAR)]
    ModelYearOutOfRange { year: i32 },

    #[error("unknown category '{0}' (expected Sedan, SUV, Wagon, Coupe or Hatchback)")]
    UnknownCategory(String),

    #[error("{field} must not be blank")]
    BlankField { field: &'static str },

    #[error("{field} must be at most {max} characters")]
    FieldTooLong { field: &'static str, max: usize },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("manufacturer not found: {0}")]
    ManufacturerNotFound(Uuid),

    #[error("database error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("failed to prepare database location: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not determine a data directory for the database")]
    NoDataDirectory,
}

impl Error {
    /// True when the storage layer rejected a write with a constraint
    /// violation (CHECK, NOT NULL, FOREIGN KEY).
    pub fn is_constraint_violation(&self) -> bool {
        matches!(
            self,
            Self::Storage(rusqlite::Error::SqliteFailure(e, _))
                if e.code == rusqlite::ErrorCode::ConstraintViolation
        )
    }
}
