use async_trait::async_trait;
use sea_orm::{DbErr, SqlErr};
use serde::{de::DeserializeOwned, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("Record not found")]
    NotFound,

    #[error("Record already exists: {0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<DbErr> for StoreError {
    fn from(err: DbErr) -> Self {
        if let Some(SqlErr::UniqueConstraintViolation(detail)) = err.sql_err() {
            return StoreError::Conflict(detail);
        }

        match err {
            DbErr::RecordNotFound(_) | DbErr::RecordNotUpdated => StoreError::NotFound,
            other => {
                let msg = other.to_string();
                let lower = msg.to_lowercase();
                if lower.contains("duplicate key") || lower.contains("23505") {
                    StoreError::Conflict(msg)
                } else {
                    StoreError::Database(msg)
                }
            }
        }
    }
}

/// Single-table CRUD port shared by the plain content resources
/// (education, experience, project, service, testimonial).
///
/// `Draft` is the full set of writable fields; updates replace every field.
#[async_trait]
pub trait ResourceRepository: Send + Sync {
    type Record: Send + Sync + 'static;
    type Draft: Send + Sync + 'static;

    async fn list(&self) -> Result<Vec<Self::Record>, StoreError>;

    async fn create(&self, draft: Self::Draft) -> Result<Self::Record, StoreError>;

    async fn update(&self, id: Uuid, draft: Self::Draft) -> Result<Self::Record, StoreError>;

    async fn delete(&self, id: Uuid) -> Result<(), StoreError>;
}

/// Encodes a domain value for a JSONB column.
pub fn to_json<T: Serialize>(data: &T) -> Result<serde_json::Value, StoreError> {
    serde_json::to_value(data).map_err(|e| StoreError::Database(e.to_string()))
}

/// Decodes a JSONB column; a shape mismatch is reported as a database error.
pub fn from_json<T: DeserializeOwned>(json: serde_json::Value) -> Result<T, StoreError> {
    serde_json::from_value(json).map_err(|e| StoreError::Database(e.to_string()))
}
