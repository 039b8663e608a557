use std::num::ParseFloatError;
use thiserror::Error;

use crate::alerts::alerts_errors::UserError;
use crate::catalog::catalog_errors::CatalogError;

// Create a type alias for Result using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the price comparison application
#[derive(Error, Debug)]
pub enum Error {
    #[error("Catalog operation failed: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("User operation failed: {0}")]
    User(#[from] UserError),
}

#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Failed to parse date: {0}")]
    DateParse(#[from] chrono::ParseError),

    #[error("Failed to parse number: {0}")]
    NumberParse(#[from] ParseFloatError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),
}

impl From<chrono::ParseError> for Error {
    fn from(err: chrono::ParseError) -> Self {
        Error::Validation(ValidationError::DateParse(err))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Catalog(CatalogError::Io(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Validation(ValidationError::InvalidInput(err.to_string()))
    }
}
