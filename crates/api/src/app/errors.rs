use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

use catalog_products::ProductIdError;

/// Request-scoped failures. None of these affect the store or other requests.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Path segment is not a valid product id.
    #[error(transparent)]
    InvalidId(#[from] ProductIdError),

    /// Request body does not decode into a product record.
    #[error("invalid product details: {0}")]
    InvalidBody(#[from] serde_json::Error),

    #[error("product not found")]
    NotFound,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidId(_) | ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ApiError::InvalidId(_) => "invalid_id",
            ApiError::InvalidBody(_) => "invalid_body",
            ApiError::NotFound => "not_found",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        json_error(self.status(), self.code(), self.to_string())
    }
}

pub fn json_error(status: StatusCode, code: &'static str, message: impl Into<String>) -> Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
