use coniven_core::domain::pagination::{
    PaginationParams, PaginationResult, QueryValues, SortDirection, TableConfig,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::application::http::server::api_entities::api_error::ApiError;

/// Splits a raw query string into ordered pairs, keeping repeated keys
/// (`status=a&status=b`).
pub fn parse_query_string(query: &str) -> Result<QueryValues, ApiError> {
    let pairs = serde_urlencoded::from_str::<Vec<(String, String)>>(query)
        .map_err(|e| ApiError::BadRequest(format!("invalid query string: {e}")))?;

    Ok(QueryValues::from(pairs))
}

/// Listing keys shared by every paginated route. Only used for the OpenAPI
/// document; requests are parsed through [`QueryParamsExtractor`].
///
/// [`QueryParamsExtractor`]: super::query_extractor::QueryParamsExtractor
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListingQuery {
    /// 1-based page number.
    pub page: Option<u32>,
    /// Page size.
    pub perpage: Option<u32>,
    /// Sort direction, `asc` or `desc`.
    pub ord: Option<String>,
    /// Sort name.
    pub sb: Option<String>,
    /// Case-insensitive search over the searchable columns.
    pub q: Option<String>,
    /// Created on or after this date (`YYYY-MM-DD`).
    pub dmin: Option<String>,
    /// Created on or before this date (`YYYY-MM-DD`).
    pub dmax: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct PageMeta {
    pub page: u32,
    pub per_page: u32,
    pub total_data: u64,
    pub total_page: u32,
    pub query: String,
    pub sort_by: String,
    pub sort_dir: SortDirection,
    /// Query string of the previous page.
    pub prev: Option<String>,
    /// Query string of the next page.
    pub next: Option<String>,
}

impl PageMeta {
    pub fn new<T>(
        result: &PaginationResult<T>,
        params: &PaginationParams,
        table: &TableConfig,
    ) -> Result<Self, ApiError> {
        let mut linked = params.clone();
        linked.per_page = result.per_page;
        linked.sort_by = table.effective_sort_name(&params.sort_by).to_string();

        let prev = match result.page {
            page if page > 1 => Some(page_link(&linked, page - 1)?),
            _ => None,
        };
        let next = match result.page {
            page if page < result.total_page => Some(page_link(&linked, page + 1)?),
            _ => None,
        };

        Ok(Self {
            page: result.page,
            per_page: result.per_page,
            total_data: result.total_data,
            total_page: result.total_page,
            query: params.query.clone(),
            sort_by: linked.sort_by,
            sort_dir: params.sort_dir,
            prev,
            next,
        })
    }
}

fn page_link(params: &PaginationParams, page: u32) -> Result<String, ApiError> {
    serde_urlencoded::to_string(params.with_page(page).to_query_pairs()).map_err(|e| {
        ApiError::InternalServerError(format!("failed to encode page link: {e}"))
    })
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use coniven_core::domain::pagination::{
        FilterKind, FilterOperator, FilterRegistry, FilterRule, FilterScalar, FilterValue,
        PaginationLimits,
    };

    use super::*;

    fn registry() -> FilterRegistry {
        FilterRegistry::new()
            .with_rule(
                FilterRule::new("dmin", "tgl_dibuat", FilterOperator::Gte, FilterKind::Date)
                    .unwrap(),
            )
            .with_rule(
                FilterRule::new("status", "status", FilterOperator::In, FilterKind::Text)
                    .unwrap(),
            )
    }

    fn table() -> TableConfig {
        TableConfig::new(
            &["nama"],
            &[("nama", "nama"), ("tgl_dibuat", "tgl_dibuat")],
            "tgl_dibuat",
        )
        .unwrap()
    }

    fn parse(query: &str) -> PaginationParams {
        let values = parse_query_string(query).unwrap();
        PaginationParams::from_query(&values, &registry(), &PaginationLimits::default()).unwrap()
    }

    #[test]
    fn test_parse_query_string_keeps_repeated_keys() {
        let values = parse_query_string("status=a&q=meja%20kayu&status=b").unwrap();

        assert_eq!(values.all("status").collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(values.first("q"), Some("meja kayu"));
    }

    #[test]
    fn test_parse_query_string_empty() {
        assert!(parse_query_string("").unwrap().is_empty());
    }

    #[test]
    fn test_page_meta_links_middle_page() {
        let params = parse("page=2&perpage=10&q=meja&sb=nama&ord=asc");
        let result = PaginationResult::<()>::new(Vec::new(), 35, &params);

        let meta = PageMeta::new(&result, &params, &table()).unwrap();

        assert_eq!(meta.total_page, 4);
        assert_eq!(meta.sort_by, "nama");
        assert_eq!(
            meta.prev.as_deref(),
            Some("page=1&perpage=10&ord=asc&sb=nama&q=meja")
        );
        assert_eq!(
            meta.next.as_deref(),
            Some("page=3&perpage=10&ord=asc&sb=nama&q=meja")
        );
    }

    #[test]
    fn test_page_meta_edges_have_no_links() {
        let params = parse("perpage=10");
        let result = PaginationResult::<()>::new(Vec::new(), 5, &params);

        let meta = PageMeta::new(&result, &params, &table()).unwrap();

        assert_eq!(meta.prev, None);
        assert_eq!(meta.next, None);
        assert_eq!(meta.sort_by, "tgl_dibuat");
        assert_eq!(meta.sort_dir, SortDirection::Desc);
    }

    #[test]
    fn test_page_meta_unknown_sort_links_to_default() {
        let params = parse("sb=harga");
        let result = PaginationResult::<()>::new(Vec::new(), 25, &params);

        let meta = PageMeta::new(&result, &params, &table()).unwrap();

        assert_eq!(meta.sort_by, "tgl_dibuat");
        assert_eq!(
            meta.next.as_deref(),
            Some("page=2&perpage=10&ord=desc&sb=tgl_dibuat")
        );
    }

    #[test]
    fn test_next_link_parses_back_to_same_filters() {
        let params = parse("status=a&status=b&dmin=2024-01-31&q=rak");
        let result = PaginationResult::<()>::new(Vec::new(), 30, &params);
        let meta = PageMeta::new(&result, &params, &table()).unwrap();

        let next = parse(&meta.next.unwrap());

        assert_eq!(next.page, 2);
        assert_eq!(next.query, "rak");
        assert_eq!(
            next.filters[0].value,
            FilterValue::Scalar(FilterScalar::Date(
                NaiveDate::from_ymd_opt(2024, 1, 31).unwrap()
            ))
        );
        assert_eq!(
            next.filters[1].value,
            FilterValue::List(vec![
                FilterScalar::Text("a".to_string()),
                FilterScalar::Text("b".to_string()),
            ])
        );
    }
}
