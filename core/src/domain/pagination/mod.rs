//! Listing support shared by every paginated resource.
//!
//! A request goes through three steps:
//! - [`PaginationParams::from_query`] normalizes raw query-string values using
//!   the resource's [`FilterRegistry`] and the configured [`PaginationLimits`].
//! - The service applies the resource's [`TableConfig`] (search columns and
//!   effective sort name) and clamps the page against the row count.
//! - The repository appends [`build_where_clause`], [`build_sort_clause`] and
//!   [`build_limit_clause`] to its base statement.
//!
//! Only column names coming from a registry or a table config ever reach the
//! SQL text. Client values are always bound parameters.

pub mod errors;
pub mod query;
pub mod registry;
pub mod sql;
pub mod table_config;
pub mod value_objects;

pub use errors::{PaginationConfigError, PaginationError};
pub use query::QueryValues;
pub use registry::{FilterKind, FilterRegistry, FilterRule};
pub use sql::{WhereClause, build_limit_clause, build_sort_clause, build_where_clause};
pub use table_config::{AllowedSort, TableConfig};
pub use value_objects::{
    Filter, FilterOperator, FilterScalar, FilterValue, PaginationLimits, PaginationParams,
    PaginationResult, SortDirection, total_pages,
};
