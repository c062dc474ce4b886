use super::errors::PaginationError;
use super::registry::FilterRegistry;
use super::value_objects::{
    Filter, FilterValue, PaginationLimits, PaginationParams, SortDirection,
};

pub const PAGE_KEY: &str = "page";
pub const PER_PAGE_KEY: &str = "perpage";
pub const SORT_DIR_KEY: &str = "ord";
pub const SORT_BY_KEY: &str = "sb";
pub const QUERY_KEY: &str = "q";

/// Raw, possibly multi-valued query-string pairs in request order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryValues(Vec<(String, String)>);

impl QueryValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.push((key.into(), value.into()));
    }

    /// First value for `key`, if any.
    pub fn first(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn all<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.0
            .iter()
            .filter(move |(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<(String, String)>> for QueryValues {
    fn from(pairs: Vec<(String, String)>) -> Self {
        Self(pairs)
    }
}

impl<K, V> FromIterator<(K, V)> for QueryValues
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

fn non_empty<'a>(values: &'a QueryValues, key: &str) -> Option<&'a str> {
    values.first(key).filter(|v| !v.is_empty())
}

fn parse_page(raw: Option<&str>) -> Result<u32, PaginationError> {
    match raw {
        None => Ok(1),
        Some(raw) => match raw.parse::<u32>() {
            Ok(page) if page >= 1 => Ok(page),
            _ => Err(PaginationError::InvalidPage),
        },
    }
}

fn parse_per_page(raw: Option<&str>, limits: &PaginationLimits) -> Result<u32, PaginationError> {
    let invalid = PaginationError::InvalidPerPage {
        max: limits.max_page_size,
    };

    match raw {
        None => Ok(limits.default_page_size),
        Some(raw) => match raw.parse::<u32>() {
            Ok(per_page) if (1..=limits.max_page_size).contains(&per_page) => Ok(per_page),
            _ => Err(invalid),
        },
    }
}

fn build_filters(
    values: &QueryValues,
    registry: &FilterRegistry,
) -> Result<Vec<Filter>, PaginationError> {
    let mut filters = Vec::new();

    for rule in registry.rules() {
        let value = if rule.operator.is_list() {
            let list: Vec<_> = values
                .all(&rule.key)
                .filter(|v| !v.is_empty())
                .filter_map(|v| rule.kind.parse(v))
                .collect();
            // nothing usable means no filter at all
            if list.is_empty() {
                continue;
            }
            FilterValue::List(list)
        } else {
            let Some(raw) = non_empty(values, &rule.key) else {
                continue;
            };
            let scalar = rule
                .kind
                .parse(raw)
                .ok_or_else(|| PaginationError::InvalidFilter {
                    key: rule.key.clone(),
                })?;
            FilterValue::Scalar(scalar)
        };

        filters.push(Filter {
            key: rule.key.clone(),
            column: rule.column.clone(),
            operator: rule.operator,
            value,
        });
    }

    Ok(filters)
}

impl PaginationParams {
    /// Normalizes untrusted query values into listing parameters.
    ///
    /// Only keys known to `registry` become filters. `sb` and `q` are kept
    /// verbatim; the sort name is resolved later against a table config.
    pub fn from_query(
        values: &QueryValues,
        registry: &FilterRegistry,
        limits: &PaginationLimits,
    ) -> Result<Self, PaginationError> {
        let page = parse_page(non_empty(values, PAGE_KEY))?;
        let per_page = parse_per_page(non_empty(values, PER_PAGE_KEY), limits)?;
        let sort_dir = match non_empty(values, SORT_DIR_KEY) {
            Some(raw) => raw.parse::<SortDirection>()?,
            None => SortDirection::default(),
        };
        let filters = build_filters(values, registry)?;

        Ok(Self {
            page,
            per_page,
            query: values.first(QUERY_KEY).unwrap_or_default().to_string(),
            filters,
            sort_by: values.first(SORT_BY_KEY).unwrap_or_default().to_string(),
            sort_dir,
            query_cols: Vec::new(),
        })
    }

    /// Encodes the parameters back into query pairs that `from_query`
    /// accepts. Empty text fields are omitted.
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![
            (PAGE_KEY.to_string(), self.page.to_string()),
            (PER_PAGE_KEY.to_string(), self.per_page.to_string()),
            (SORT_DIR_KEY.to_string(), self.sort_dir.to_string()),
        ];

        if !self.sort_by.is_empty() {
            pairs.push((SORT_BY_KEY.to_string(), self.sort_by.clone()));
        }
        if !self.query.is_empty() {
            pairs.push((QUERY_KEY.to_string(), self.query.clone()));
        }

        for filter in &self.filters {
            match &filter.value {
                FilterValue::Scalar(value) => pairs.push((filter.key.clone(), value.to_string())),
                FilterValue::List(values) => pairs.extend(
                    values
                        .iter()
                        .map(|value| (filter.key.clone(), value.to_string())),
                ),
            }
        }

        pairs
    }

    /// Same parameters pointed at another page.
    pub fn with_page(&self, page: u32) -> Self {
        Self {
            page,
            ..self.clone()
        }
    }
}
