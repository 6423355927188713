use axum::http::StatusCode;
use thiserror::Error;

use crate::api::validators::FieldError;
use crate::db::StoreError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("empty body")]
    EmptyBody,

    #[error("{0}")]
    Decode(String),

    #[error("{}", join_messages(.0))]
    Validation(Vec<FieldError>),

    #[error("invalid student id {raw:?}: {reason}")]
    InvalidId { raw: String, reason: String },

    #[error("no student found with id {0}")]
    NotFound(i64),

    #[error("{0}")]
    Storage(String),

    /// An extractor refused the request before the handler ran.
    #[error("{message}")]
    Rejected { status: StatusCode, message: String },
}

impl From<axum::extract::rejection::PathRejection> for AppError {
    fn from(rejection: axum::extract::rejection::PathRejection) -> Self {
        AppError::Rejected { status: rejection.status(), message: rejection.body_text() }
    }
}

impl From<axum::extract::rejection::BytesRejection> for AppError {
    fn from(rejection: axum::extract::rejection::BytesRejection) -> Self {
        AppError::Rejected { status: rejection.status(), message: rejection.body_text() }
    }
}

fn join_messages(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => AppError::NotFound(id),
            StoreError::Database(_) => AppError::Storage(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Decode(err.to_string())
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self {
            AppError::EmptyBody
            | AppError::Decode(_)
            | AppError::Validation(_)
            | AppError::InvalidId { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Rejected { status, .. } => *status,
        };

        crate::api::response::error(status, self.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
