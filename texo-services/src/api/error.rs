//! Error-to-response mapping for the JSON API

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// Body of every non-entity response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BasicResponseMessage {
    pub success: bool,
    pub message: String,
}

impl BasicResponseMessage {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),

    /// Database failure. Only `message` reaches the client.
    #[error("{message}")]
    Internal {
        message: String,
        #[source]
        source: texo_db::Error,
    },
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    /// Map a data-access error, replying with `message` when the database
    /// failed. Bad input from the caller becomes a 400 instead.
    pub fn internal(message: impl Into<String>) -> impl FnOnce(texo_db::Error) -> ApiError {
        let message = message.into();
        move |source| {
            if source.is_invalid_input() {
                ApiError::BadRequest(source.to_string())
            } else {
                ApiError::Internal { message, source }
            }
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if let ApiError::Internal { message, source } = &self {
            tracing::error!(error = %source, "{}", message);
        }
        (status, Json(BasicResponseMessage::failure(self.to_string()))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_pagination_is_bad_request() {
        let err = ApiError::internal("boom")(texo_db::Error::InvalidPagination("page 0".into()));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_database_error_hides_cause() {
        let err = ApiError::internal("There was an error getting tags")(texo_db::Error::Query(
            "table posttag is marked as crashed".into(),
        ));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "There was an error getting tags");
    }
}
