use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::errors::{PaginationConfigError, PaginationError};

/// Sort direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }

    pub fn as_sql(&self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

impl FromStr for SortDirection {
    type Err = PaginationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            _ => Err(PaginationError::InvalidSortDirection),
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Filter operator attached to a registry entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOperator {
    Eq,  // equals
    Neq, // not equals
    Gte, // greater than or equal
    Lte, // less than or equal
    In,  // in list
    Nin, // not in list
}

impl FilterOperator {
    /// List operators take every value given for their key.
    pub fn is_list(&self) -> bool {
        matches!(self, FilterOperator::In | FilterOperator::Nin)
    }

    pub fn sql_operator(&self) -> &'static str {
        match self {
            FilterOperator::Eq => "=",
            FilterOperator::Neq => "!=",
            FilterOperator::Gte => ">=",
            FilterOperator::Lte => "<=",
            FilterOperator::In => "IN",
            FilterOperator::Nin => "NOT IN",
        }
    }
}

/// A single typed value bound to a query placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterScalar {
    Text(String),
    Integer(i64),
    Date(NaiveDate),
    Uuid(Uuid),
}

impl fmt::Display for FilterScalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterScalar::Text(value) => f.write_str(value),
            FilterScalar::Integer(value) => write!(f, "{value}"),
            FilterScalar::Date(value) => write!(f, "{}", value.format("%Y-%m-%d")),
            FilterScalar::Uuid(value) => write!(f, "{value}"),
        }
    }
}

/// Shape of a filter value, fixed when the query string is parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterValue {
    Scalar(FilterScalar),
    List(Vec<FilterScalar>),
}

/// An active filter, already mapped to its physical column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    /// External query-string key, kept so the filter can be re-encoded.
    pub key: String,
    pub column: String,
    pub operator: FilterOperator,
    pub value: FilterValue,
}

/// Page size bounds injected from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationLimits {
    pub max_page_size: u32,
    pub default_page_size: u32,
}

impl Default for PaginationLimits {
    fn default() -> Self {
        Self {
            max_page_size: 100,
            default_page_size: 10,
        }
    }
}

impl PaginationLimits {
    pub fn new(max_page_size: u32, default_page_size: u32) -> Result<Self, PaginationConfigError> {
        if default_page_size == 0 || default_page_size > max_page_size {
            return Err(PaginationConfigError::InvalidPageSize {
                default: default_page_size,
                max: max_page_size,
            });
        }

        Ok(Self {
            max_page_size,
            default_page_size,
        })
    }
}

/// Normalized listing request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationParams {
    pub page: u32,
    pub per_page: u32,
    pub query: String,
    pub filters: Vec<Filter>,
    pub sort_by: String,
    pub sort_dir: SortDirection,
    /// Columns searched by `query`. Set by the service, never by the client.
    pub query_cols: Vec<String>,
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: PaginationLimits::default().default_page_size,
            query: String::new(),
            filters: Vec::new(),
            sort_by: String::new(),
            sort_dir: SortDirection::Desc,
            query_cols: Vec::new(),
        }
    }
}

impl PaginationParams {
    pub fn offset(&self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(self.per_page)
    }

    pub fn limit(&self) -> u32 {
        self.per_page
    }

    pub fn set_column_search<I, S>(&mut self, cols: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.query_cols = cols.into_iter().map(Into::into).collect();
    }

    /// Lowers `page` to the last page when it points past the end of a
    /// non-empty result set, and returns the page count for `total` rows.
    pub fn clamp_to_total(&mut self, total: u64) -> u32 {
        let total_page = total_pages(total, self.per_page);
        if self.page > total_page && total_page > 0 {
            self.page = total_page;
        }
        total_page
    }
}

/// `ceil(total / per_page)`
pub fn total_pages(total: u64, per_page: u32) -> u32 {
    if per_page == 0 {
        return 0;
    }
    u32::try_from(total.div_ceil(u64::from(per_page))).unwrap_or(u32::MAX)
}

/// One page of a listing with its metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PaginationResult<T> {
    pub data: Vec<T>,
    pub total_data: u64,
    pub total_page: u32,
    pub page: u32,
    pub per_page: u32,
}

impl<T> PaginationResult<T> {
    pub fn new(data: Vec<T>, total_data: u64, params: &PaginationParams) -> Self {
        Self {
            data,
            total_data,
            total_page: total_pages(total_data, params.per_page),
            page: params.page,
            per_page: params.per_page,
        }
    }

    pub fn map<U, F>(self, f: F) -> PaginationResult<U>
    where
        F: FnMut(T) -> U,
    {
        PaginationResult {
            data: self.data.into_iter().map(f).collect(),
            total_data: self.total_data,
            total_page: self.total_page,
            page: self.page,
            per_page: self.per_page,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(page: u32, per_page: u32) -> PaginationParams {
        PaginationParams {
            page,
            per_page,
            ..Default::default()
        }
    }

    #[test]
    fn test_offset_is_page_minus_one_times_per_page() {
        assert_eq!(params(1, 10).offset(), 0);
        assert_eq!(params(3, 10).offset(), 20);
        assert_eq!(params(7, 100).offset(), 600);
    }

    #[test]
    fn test_total_pages_rounds_up() {
        assert_eq!(total_pages(25, 10), 3);
        assert_eq!(total_pages(30, 10), 3);
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(1, 100), 1);
    }

    #[test]
    fn test_clamp_lowers_page_past_the_end() {
        let mut p = params(9, 10);
        let total_page = p.clamp_to_total(25);

        assert_eq!(total_page, 3);
        assert_eq!(p.page, 3);
        assert_eq!(p.offset(), 20);
    }

    #[test]
    fn test_clamp_keeps_page_when_result_is_empty() {
        let mut p = params(4, 10);
        assert_eq!(p.clamp_to_total(0), 0);
        assert_eq!(p.page, 4);
    }

    #[test]
    fn test_clamp_keeps_page_in_range() {
        let mut p = params(2, 10);
        p.clamp_to_total(25);
        assert_eq!(p.page, 2);
    }

    #[test]
    fn test_result_metadata() {
        let result = PaginationResult::new(vec!["a", "b"], 25, &params(3, 10));
        assert_eq!(result.total_page, 3);
        assert_eq!(result.page, 3);
        assert_eq!(result.per_page, 10);
        assert_eq!(result.total_data, 25);
    }

    #[test]
    fn test_limits_reject_default_above_max() {
        assert!(PaginationLimits::new(100, 10).is_ok());
        assert_eq!(
            PaginationLimits::new(20, 50),
            Err(PaginationConfigError::InvalidPageSize {
                default: 50,
                max: 20
            })
        );
        assert!(PaginationLimits::new(20, 0).is_err());
    }
}
