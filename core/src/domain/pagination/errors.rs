use thiserror::Error;

/// Malformed listing input. Surfaced to clients as a bad request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaginationError {
    #[error("invalid page parameter: page must be a positive integer")]
    InvalidPage,

    #[error("invalid per-page parameter: per-page must be between 1 and {max}")]
    InvalidPerPage { max: u32 },

    #[error("invalid sort direction: sort direction must be 'asc' or 'desc'")]
    InvalidSortDirection,

    #[error("invalid filters: '{key}' has an invalid value")]
    InvalidFilter { key: String },
}

/// Listing configuration that can never serve a request. Raised while the
/// service is being built, never per request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaginationConfigError {
    #[error("default sort '{0}' is not a registered sort name")]
    UnmappedDefaultSort(String),

    #[error("'{0}' is not a valid column identifier")]
    InvalidIdentifier(String),

    #[error("page sizes must satisfy 1 <= default ({default}) <= max ({max})")]
    InvalidPageSize { default: u32, max: u32 },
}
