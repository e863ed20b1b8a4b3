// src/shared/api/crud.rs
use actix_web::HttpResponse;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::shared::{
    api::{ApiResponse, Normalize},
    store::{ResourceRepository, StoreError},
};

//
// ──────────────────────────────────────────────────────────
// Request DTOs
// ──────────────────────────────────────────────────────────
//

/// Update bodies carry the row id next to the full set of fields.
#[derive(Debug, Deserialize)]
pub struct UpdateRequest<D> {
    pub id: Uuid,
    #[serde(flatten)]
    pub draft: D,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct DeleteRequest {
    pub id: Uuid,
}

//
// ──────────────────────────────────────────────────────────
// Handler bodies
// ──────────────────────────────────────────────────────────
//

pub async fn list_response<R>(repo: &R, entity: &str) -> HttpResponse
where
    R: ResourceRepository + ?Sized,
    R::Record: Serialize,
{
    match repo.list().await {
        Ok(rows) => ApiResponse::success(rows),
        Err(err) => store_error_response(err, entity),
    }
}

pub async fn create_response<R>(repo: &R, draft: R::Draft, entity: &str) -> HttpResponse
where
    R: ResourceRepository + ?Sized,
    R::Record: Serialize,
    R::Draft: Normalize,
{
    let draft = match draft.normalize() {
        Ok(d) => d,
        Err(err) => return err.into_response(),
    };

    match repo.create(draft).await {
        Ok(row) => ApiResponse::created(row),
        Err(err) => store_error_response(err, entity),
    }
}

pub async fn update_response<R>(repo: &R, id: Uuid, draft: R::Draft, entity: &str) -> HttpResponse
where
    R: ResourceRepository + ?Sized,
    R::Record: Serialize,
    R::Draft: Normalize,
{
    let draft = match draft.normalize() {
        Ok(d) => d,
        Err(err) => return err.into_response(),
    };

    match repo.update(id, draft).await {
        Ok(row) => ApiResponse::success(row),
        Err(err) => store_error_response(err, entity),
    }
}

pub async fn delete_response<R>(repo: &R, id: Uuid, entity: &str) -> HttpResponse
where
    R: ResourceRepository + ?Sized,
{
    match repo.delete(id).await {
        Ok(()) => ApiResponse::ok(),
        Err(err) => store_error_response(err, entity),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

pub fn store_error_response(err: StoreError, entity: &str) -> HttpResponse {
    let code_prefix = entity.to_uppercase().replace(' ', "_");
    match err {
        StoreError::NotFound => ApiResponse::not_found(
            &format!("{code_prefix}_NOT_FOUND"),
            &format!("{entity} not found"),
        ),
        StoreError::Conflict(detail) => {
            tracing::debug!("{} conflict: {}", entity, detail);
            ApiResponse::conflict(
                &format!("{code_prefix}_ALREADY_EXISTS"),
                &format!("{entity} already exists"),
            )
        }
        StoreError::Database(msg) => {
            tracing::error!("Database error on {}: {}", entity, msg);
            ApiResponse::internal_error()
        }
    }
}
