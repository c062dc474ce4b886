use axum::{
    Json,
    extract::{FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use coniven_core::domain::{
    common::entities::app_errors::CoreError, pagination::PaginationError,
};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;
use tracing::error;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal server error: {0}")]
    InternalServerError(String),

    #[error("{field}: {message}")]
    Validation { field: String, message: String },

    #[error("Unprocessable entity: {0}")]
    UnProcessableEntity(String),

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),
}

/// JSON body of every error response.
#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ErrorResponse {
    pub code: String,
    pub status: u16,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) | ApiError::Validation { .. } => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::UnProcessableEntity(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            ApiError::BadRequest(_) => "E_BAD_REQUEST",
            ApiError::NotFound(_) => "E_NOT_FOUND",
            ApiError::InternalServerError(_) => "E_INTERNAL_SERVER_ERROR",
            ApiError::Validation { .. } => "E_VALIDATION",
            ApiError::UnProcessableEntity(_) => "E_UNPROCESSABLE_ENTITY",
            ApiError::ServiceUnavailable(_) => "E_SERVICE_UNAVAILABLE",
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::NotFound => ApiError::NotFound("Resource not found".to_string()),
            CoreError::InvalidId => ApiError::BadRequest("Invalid id".to_string()),
            CoreError::Validation { field, message } => ApiError::Validation { field, message },
            CoreError::InvalidPagination(e) => ApiError::from(e),
            CoreError::InternalServerError
            | CoreError::Configuration(_)
            | CoreError::DatabaseConnection(_)
            | CoreError::Migration(_) => {
                ApiError::InternalServerError("Internal server error".to_string())
            }
        }
    }
}

impl From<PaginationError> for ApiError {
    fn from(error: PaginationError) -> Self {
        ApiError::BadRequest(error.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.code().to_string();

        let (message, field) = match self {
            ApiError::Validation { field, message } => (message, Some(field)),
            ApiError::InternalServerError(message) => {
                error!("Request failed: {}", message);
                (message, None)
            }
            ApiError::BadRequest(message)
            | ApiError::NotFound(message)
            | ApiError::UnProcessableEntity(message)
            | ApiError::ServiceUnavailable(message) => (message, None),
        };

        (
            status,
            Json(ErrorResponse {
                code,
                status: status.as_u16(),
                message,
                field,
            }),
        )
            .into_response()
    }
}

/// `Json<T>` that also runs the `validator` rules of `T`.
///
/// Malformed JSON is a bad request; a body that parses but breaks a rule is
/// rejected with 422 and every failing field listed in the message.
#[derive(Debug)]
pub struct ValidateJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidateJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

        value.validate().map_err(|errors| {
            let mut messages = errors
                .field_errors()
                .iter()
                .flat_map(|(field, errs)| {
                    errs.iter().map(move |e| {
                        let message = e
                            .message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| e.code.to_string());
                        format!("{field}: {message}")
                    })
                })
                .collect::<Vec<String>>();
            messages.sort();

            ApiError::UnProcessableEntity(messages.join("; "))
        })?;

        Ok(ValidateJson(value))
    }
}

#[cfg(test)]
mod tests {
    use axum::{Router, routing::post};
    use axum_test::TestServer;
    use serde_json::json;

    use super::*;

    #[derive(Debug, Deserialize, Validate)]
    struct Payload {
        #[validate(length(min = 1, message = "name is required"))]
        name: String,
    }

    async fn create(ValidateJson(payload): ValidateJson<Payload>) -> String {
        payload.name
    }

    fn server() -> TestServer {
        TestServer::new(Router::new().route("/items", post(create))).unwrap()
    }

    #[test]
    fn test_core_errors_map_to_status_codes() {
        assert_eq!(
            ApiError::from(CoreError::NotFound).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::from(CoreError::InvalidId).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::from(CoreError::InternalServerError).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::from(CoreError::InvalidPagination(PaginationError::InvalidPage)),
            ApiError::BadRequest(
                "invalid page parameter: page must be a positive integer".to_string()
            )
        );
    }

    #[test]
    fn test_validation_error_keeps_field() {
        let error = ApiError::from(CoreError::validation("code", "code is already taken"));

        assert_eq!(
            error,
            ApiError::Validation {
                field: "code".to_string(),
                message: "code is already taken".to_string(),
            }
        );
        assert_eq!(error.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_validate_json_accepts_valid_body() {
        let response = server().post("/items").json(&json!({ "name": "Meja" })).await;

        response.assert_status_ok();
        response.assert_text("Meja");
    }

    #[tokio::test]
    async fn test_validate_json_rejects_rule_violation() {
        let response = server().post("/items").json(&json!({ "name": "" })).await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        let body = response.json::<ErrorResponse>();
        assert_eq!(body.code, "E_UNPROCESSABLE_ENTITY");
        assert_eq!(body.status, 422);
        assert_eq!(body.message, "name: name is required");
    }

    #[tokio::test]
    async fn test_validate_json_rejects_malformed_body() {
        let response = server()
            .post("/items")
            .content_type("application/json")
            .text("{ not json")
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }
}
