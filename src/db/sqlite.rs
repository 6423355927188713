use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::db::models::student::Student;
use crate::db::store::{StoreError, StoreResult, StudentStore};

const CREATE_STUDENTS_TABLE: &str = "CREATE TABLE IF NOT EXISTS students (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT,
    email TEXT,
    age INTEGER
)";

/// SQLite-backed [`StudentStore`]. Cloning shares the underlying pool.
#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Wraps `pool` and makes sure the `students` table exists.
    pub async fn new(pool: SqlitePool) -> StoreResult<Self> {
        sqlx::query(CREATE_STUDENTS_TABLE)
            .execute(&pool)
            .await?;

        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl StudentStore for SqliteStore {
    async fn create_student(&self, name: &str, email: &str, age: i64) -> StoreResult<i64> {
        let result = sqlx::query("INSERT INTO students (name, email, age) VALUES (?, ?, ?)")
            .bind(name)
            .bind(email)
            .bind(age)
            .execute(&self.pool)
            .await?;

        Ok(result.last_insert_rowid())
    }

    async fn get_student_by_id(&self, id: i64) -> StoreResult<Student> {
        let row: Option<Student> = sqlx::query_as(
            "SELECT id, name, email, age FROM students WHERE id = ? LIMIT 1"
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.ok_or(StoreError::NotFound(id))
    }

    async fn get_students(&self) -> StoreResult<Vec<Student>> {
        let rows: Vec<Student> = sqlx::query_as("SELECT id, name, email, age FROM students")
            .fetch_all(&self.pool)
            .await?;

        Ok(rows)
    }
}
