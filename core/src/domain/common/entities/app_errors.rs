use thiserror::Error;

use crate::domain::pagination::{PaginationConfigError, PaginationError};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("Not found")]
    NotFound,

    #[error("Internal server error")]
    InternalServerError,

    #[error("Invalid id")]
    InvalidId,

    /// A business rule rejected the value of `field`.
    #[error("{message}")]
    Validation { field: String, message: String },

    #[error(transparent)]
    InvalidPagination(#[from] PaginationError),

    #[error("Invalid listing configuration: {0}")]
    Configuration(#[from] PaginationConfigError),

    #[error("Database connection error: {0}")]
    DatabaseConnection(String),

    #[error("Migration error: {0}")]
    Migration(String),
}

impl CoreError {
    pub fn validation(field: &str, message: impl Into<String>) -> Self {
        CoreError::Validation {
            field: field.to_string(),
            message: message.into(),
        }
    }
}
