use axum::{
    body::Bytes,
    extract::{
        rejection::{BytesRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::Response,
};
use std::sync::Arc;

use crate::api::response;
use crate::api::validators::validate_student;
use crate::api::AppState;
use crate::db::models::student::{CreatedStudent, NewStudent};
use crate::error::{AppError, AppResult};

pub async fn create(
    State(state): State<Arc<AppState>>,
    body: Result<Bytes, BytesRejection>,
) -> AppResult<Response> {
    tracing::info!("creating a student");

    let body = body?;

    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(AppError::EmptyBody);
    }

    let student: NewStudent = serde_json::from_slice(&body)?;

    if let Err(errors) = validate_student(&student) {
        tracing::info!("rejected student payload: {} invalid field(s)", errors.len());
        return Err(AppError::Validation(errors));
    }

    let id = state
        .store
        .create_student(&student.name, &student.email, student.age)
        .await
        .inspect_err(|e| tracing::error!("failed to create student: {}", e))?;

    tracing::info!("student created successfully, id={}", id);
    Ok(response::success(StatusCode::CREATED, CreatedStudent { id }))
}

pub async fn get(
    State(state): State<Arc<AppState>>,
    raw_id: Result<Path<String>, PathRejection>,
) -> AppResult<Response> {
    let Path(raw_id) = raw_id?;
    tracing::info!("getting a student, id={}", raw_id);

    let id: i64 = raw_id.parse().map_err(|e: std::num::ParseIntError| AppError::InvalidId {
        raw: raw_id.clone(),
        reason: e.to_string(),
    })?;

    let student = state
        .store
        .get_student_by_id(id)
        .await
        .inspect_err(|e| tracing::error!("error getting student {}: {}", id, e))?;

    Ok(response::success(StatusCode::OK, student))
}

pub async fn list(State(state): State<Arc<AppState>>) -> AppResult<Response> {
    tracing::info!("getting all students");

    let students = state
        .store
        .get_students()
        .await
        .inspect_err(|e| tracing::error!("error listing students: {}", e))?;

    Ok(response::success(StatusCode::OK, students))
}
