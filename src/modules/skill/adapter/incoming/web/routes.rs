use actix_web::{get, post, web, HttpResponse, Responder};
use indexmap::IndexMap;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::shared::api::crud::store_error_response;
use crate::shared::api::{ApiResponse, Normalize};
use crate::skill::application::services::{ReconcileError, ReconcileReport};
use crate::skill::domain::{
    group_for_admin, GroupedSkills, SkillCategory, SkillCategoryRow, SkillItem, SkillTree,
};
use crate::AppState;

const ENTITY: &str = "skill category";

#[derive(Debug, Deserialize, ToSchema)]
pub struct DeleteCategoryRequest {
    pub category: String,
}

/// The admin editor's whole tree. Key order is the order of the upserts.
#[derive(Debug, Deserialize, ToSchema)]
pub struct SyncSkillsRequest {
    #[schema(value_type = Object)]
    pub categories: IndexMap<String, Vec<SkillItem>>,
}

#[utoipa::path(
    get,
    path = "/api/skilltool",
    tag = "skills",
    responses((status = 200, description = "Skill rows ordered by category", body = [SkillCategoryRow]))
)]
#[get("/api/skilltool")]
pub async fn list_skills_handler(data: web::Data<AppState>) -> impl Responder {
    match data.skills.list().await {
        Ok(rows) => ApiResponse::success(rows),
        Err(err) => store_error_response(err, ENTITY),
    }
}

#[utoipa::path(
    get,
    path = "/api/skilltool/grouped",
    tag = "skills",
    responses((status = 200, description = "Technical categories and merged soft skills", body = GroupedSkills))
)]
#[get("/api/skilltool/grouped")]
pub async fn grouped_skills_handler(data: web::Data<AppState>) -> impl Responder {
    match data.skills.list().await {
        Ok(rows) => {
            let categories: Vec<SkillCategory> = rows.into_iter().map(Into::into).collect();
            ApiResponse::success(group_for_admin(&categories))
        }
        Err(err) => store_error_response(err, ENTITY),
    }
}

#[utoipa::path(
    post,
    path = "/api/skilltool/create",
    tag = "skills",
    request_body = SkillCategory,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Category created", body = SkillCategoryRow),
        (status = 409, description = "Category already exists")
    )
)]
#[post("/api/skilltool/create")]
pub async fn create_skill_category_handler(
    _admin: AdminUser,
    req: web::Json<SkillCategory>,
    data: web::Data<AppState>,
) -> impl Responder {
    let category = match req.into_inner().normalize() {
        Ok(c) => c,
        Err(err) => return err.into_response(),
    };

    match data.skills.insert(category).await {
        Ok(row) => ApiResponse::created(row),
        Err(err) => store_error_response(err, ENTITY),
    }
}

#[utoipa::path(
    post,
    path = "/api/skilltool/update",
    tag = "skills",
    request_body = SkillCategory,
    security(("bearer_auth" = [])),
    responses((status = 200, description = "Category created or replaced", body = SkillCategoryRow))
)]
#[post("/api/skilltool/update")]
pub async fn upsert_skill_category_handler(
    _admin: AdminUser,
    req: web::Json<SkillCategory>,
    data: web::Data<AppState>,
) -> impl Responder {
    let category = match req.into_inner().normalize() {
        Ok(c) => c,
        Err(err) => return err.into_response(),
    };

    match data.skills.upsert(category).await {
        Ok(row) => ApiResponse::success(row),
        Err(err) => store_error_response(err, ENTITY),
    }
}

#[utoipa::path(
    post,
    path = "/api/skilltool/delete",
    tag = "skills",
    request_body = DeleteCategoryRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Category deleted", body = crate::api::schemas::AckResponse),
        (status = 404, description = "No such category", body = crate::api::schemas::ErrorResponse)
    )
)]
#[post("/api/skilltool/delete")]
pub async fn delete_skill_category_handler(
    _admin: AdminUser,
    req: web::Json<DeleteCategoryRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    // Matched as sent; rows stored before names were lower-cased keep their case.
    let category = req.into_inner().category;
    if category.trim().is_empty() {
        return ApiResponse::bad_request("VALIDATION_ERROR", "category must not be empty");
    }
    match data.skills.delete_by_category(&category).await {
        Ok(()) => ApiResponse::ok(),
        Err(err) => store_error_response(err, ENTITY),
    }
}

#[utoipa::path(
    post,
    path = "/api/skilltool/sync",
    tag = "skills",
    request_body = SyncSkillsRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Writes attempted; failures are itemized", body = ReconcileReport),
        (status = 400, description = "Invalid tree"),
        (status = 503, description = "Stored skills could not be read; nothing written")
    )
)]
#[post("/api/skilltool/sync")]
pub async fn sync_skills_handler(
    _admin: AdminUser,
    req: web::Json<SyncSkillsRequest>,
    data: web::Data<AppState>,
) -> HttpResponse {
    let categories = req
        .into_inner()
        .categories
        .into_iter()
        .map(|(category, items)| SkillCategory::new(category, items));

    let tree = match SkillTree::from_categories(categories) {
        Ok(tree) => tree,
        Err(err) => return ApiResponse::bad_request("VALIDATION_ERROR", &err.to_string()),
    };

    match data.reconciler.reconcile(&tree).await {
        Ok(report) => ApiResponse::success(report),
        Err(ReconcileError::Snapshot(err)) => {
            tracing::error!("Skill sync aborted, snapshot failed: {}", err);
            ApiResponse::service_unavailable(
                "SKILL_SNAPSHOT_FAILED",
                "Stored skills could not be read; nothing was written",
            )
        }
    }
}
