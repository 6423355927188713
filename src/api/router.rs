use axum::{routing::get, Router};
use std::sync::Arc;
use super::AppState;
use super::handlers;

fn student_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/students", get(handlers::students::list).post(handlers::students::create))
        .route("/students/", get(handlers::students::list))
        .route("/students/{id}", get(handlers::students::get))
}

pub fn routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health_check))
        .merge(student_routes())
        .nest("/api", student_routes())
        .with_state(state)
}
