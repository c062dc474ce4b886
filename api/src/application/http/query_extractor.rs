use axum::{extract::FromRequestParts, http::request::Parts};
use coniven_core::domain::pagination::QueryValues;

use super::query_params::parse_query_string;
use crate::application::http::server::api_entities::api_error::ApiError;

/// Raw listing query of the request, repeated keys included.
///
/// Usage:
/// ```rust,ignore
/// async fn handler(
///     QueryParamsExtractor(values): QueryParamsExtractor,
/// ) -> Result<Response<T>, ApiError> {
///     let params = PaginationParams::from_query(&values, &registry, &limits)?;
/// }
/// ```
#[derive(Debug, Clone)]
pub struct QueryParamsExtractor(pub QueryValues);

impl<S> FromRequestParts<S> for QueryParamsExtractor
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let query_string = parts.uri.query().unwrap_or("");

        Ok(QueryParamsExtractor(parse_query_string(query_string)?))
    }
}

#[cfg(test)]
mod tests {
    use axum::{Json, Router, http::StatusCode, routing::get};
    use axum_test::TestServer;
    use coniven_core::domain::pagination::{
        FilterKind, FilterOperator, FilterRegistry, FilterRule, PaginationLimits,
        PaginationParams,
    };
    use serde_json::{Value, json};

    use super::*;
    use crate::application::http::server::api_entities::api_error::ErrorResponse;

    async fn echo(
        QueryParamsExtractor(values): QueryParamsExtractor,
    ) -> Result<Json<Value>, ApiError> {
        let rule = FilterRule::new("status", "status", FilterOperator::In, FilterKind::Text)
            .map_err(|e| ApiError::InternalServerError(e.to_string()))?;
        let registry = FilterRegistry::new().with_rule(rule);
        let params =
            PaginationParams::from_query(&values, &registry, &PaginationLimits::default())?;

        Ok(Json(json!({
            "page": params.page,
            "per_page": params.per_page,
            "filters": params.filters.len(),
            "query": params.query,
        })))
    }

    fn server() -> TestServer {
        TestServer::new(Router::new().route("/items", get(echo))).unwrap()
    }

    #[tokio::test]
    async fn test_extractor_defaults_without_query() {
        let response = server().get("/items").await;

        response.assert_status_ok();
        response.assert_json(&json!({
            "page": 1,
            "per_page": 10,
            "filters": 0,
            "query": "",
        }));
    }

    #[tokio::test]
    async fn test_extractor_keeps_repeated_keys() {
        let response = server()
            .get("/items")
            .add_query_param("status", "a")
            .add_query_param("status", "b")
            .add_query_param("q", "lemari besi")
            .await;

        response.assert_status_ok();
        response.assert_json(&json!({
            "page": 1,
            "per_page": 10,
            "filters": 1,
            "query": "lemari besi",
        }));
    }

    #[tokio::test]
    async fn test_invalid_page_is_bad_request() {
        let response = server().get("/items?page=0").await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body = response.json::<ErrorResponse>();
        assert_eq!(body.code, "E_BAD_REQUEST");
        assert_eq!(body.status, 400);
    }

    #[tokio::test]
    async fn test_per_page_above_limit_is_bad_request() {
        let response = server().get("/items?perpage=101").await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }
}
