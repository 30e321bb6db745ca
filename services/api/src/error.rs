//! Custom error types for the API service

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;

/// A single failed field in a validation error response
#[derive(Debug, Clone, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// Custom error type for the API service
#[derive(Error, Debug)]
pub enum ApiError {
    /// One or more request fields failed validation
    #[error("Validation failed")]
    Validation(Vec<FieldError>),

    /// Registration attempted with an email that is already taken
    #[error("User already exists")]
    UserExists,

    /// Login with an unknown email or a wrong password; both map to the
    /// same generic response
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Missing, malformed, or expired bearer token
    #[error("Unauthorized")]
    Unauthorized,

    /// Authenticated caller does not own the resource it is acting on
    #[error("User not authorized")]
    NotOwner,

    /// The requested resource does not exist
    #[error("{0} not found")]
    NotFound(&'static str),

    /// Internal server error
    #[error("Internal server error")]
    InternalServerError,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::Validation(errors) => {
                (StatusCode::UNPROCESSABLE_ENTITY, json!({ "errors": errors }))
            }
            ApiError::UserExists => (StatusCode::BAD_REQUEST, json!({ "error": "User already exists" })),
            ApiError::InvalidCredentials => {
                (StatusCode::BAD_REQUEST, json!({ "error": "Invalid credentials" }))
            }
            ApiError::Unauthorized => (StatusCode::UNAUTHORIZED, json!({ "error": "Unauthorized" })),
            ApiError::NotOwner => {
                (StatusCode::UNAUTHORIZED, json!({ "error": "User not authorized" }))
            }
            ApiError::NotFound(resource) => (
                StatusCode::NOT_FOUND,
                json!({ "error": format!("{resource} not found") }),
            ),
            ApiError::InternalServerError => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": "Internal server error" }),
            ),
        };

        (status, Json(body)).into_response()
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::Validation(vec![]).into_response().status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            ApiError::UserExists.into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::InvalidCredentials.into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Unauthorized.into_response().status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::NotOwner.into_response().status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::NotFound("Post").into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::InternalServerError.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn test_validation_body_lists_fields() {
        let response = ApiError::Validation(vec![
            FieldError::new("email", "Invalid email format"),
            FieldError::new("password", "Password must be at least 6 characters long"),
        ])
        .into_response();

        let body = body_json(response).await;
        let errors = body["errors"].as_array().unwrap();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0]["field"], "email");
        assert_eq!(errors[1]["message"], "Password must be at least 6 characters long");
    }

    #[tokio::test]
    async fn test_not_owner_body() {
        let body = body_json(ApiError::NotOwner.into_response()).await;
        assert_eq!(body["error"], "User not authorized");
    }

    #[tokio::test]
    async fn test_not_found_body_names_resource() {
        let body = body_json(ApiError::NotFound("Post").into_response()).await;
        assert_eq!(body["error"], "Post not found");
    }
}
