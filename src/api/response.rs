//! JSON envelopes shared by every handler.
//!
//! Successful results are written as-is, errors as
//! `{"status": "Error", "error": "<message>"}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

pub const STATUS_ERROR: &str = "Error";

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub status: &'static str,
    pub error: String,
}

pub fn success<T: Serialize>(status: StatusCode, value: T) -> Response {
    (status, Json(value)).into_response()
}

pub fn error(status: StatusCode, message: impl Into<String>) -> Response {
    let body = ErrorBody {
        status: STATUS_ERROR,
        error: message.into(),
    };
    (status, Json(body)).into_response()
}
