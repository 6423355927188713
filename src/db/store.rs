use async_trait::async_trait;
use thiserror::Error;

use crate::db::models::student::Student;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no student found with id {0}")]
    NotFound(i64),

    #[error("query error: {0}")]
    Database(#[from] sqlx::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence seam for student records. Handlers only see this trait, so
/// tests can swap in a mock in place of SQLite.
#[async_trait]
pub trait StudentStore: Send + Sync {
    /// Inserts a row and returns the id assigned by the datastore.
    async fn create_student(&self, name: &str, email: &str, age: i64) -> StoreResult<i64>;

    async fn get_student_by_id(&self, id: i64) -> StoreResult<Student>;

    /// All rows in datastore order. An empty table yields an empty vec.
    async fn get_students(&self) -> StoreResult<Vec<Student>>;
}
