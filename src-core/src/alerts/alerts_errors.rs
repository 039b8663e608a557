use thiserror::Error;

#[derive(Error, Debug)]
pub enum UserError {
    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Invalid email format: {0}")]
    InvalidEmail(String),

    #[error("User id '{0}' already exists")]
    DuplicateUserId(String),

    #[error("Email '{0}' already exists")]
    DuplicateEmail(String),

    #[error("Failed to persist registry: {0}")]
    Persistence(String),
}

impl From<std::io::Error> for UserError {
    fn from(err: std::io::Error) -> Self {
        UserError::Persistence(err.to_string())
    }
}

impl From<serde_json::Error> for UserError {
    fn from(err: serde_json::Error) -> Self {
        UserError::Persistence(err.to_string())
    }
}
