use actix_web::{get, post, web, Responder};

use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::education::domain::EducationDraft;
use crate::shared::api::crud::{self, DeleteRequest, UpdateRequest};
use crate::AppState;

const ENTITY: &str = "education";

#[utoipa::path(
    get,
    path = "/api/education",
    tag = "content",
    responses((status = 200, description = "Education entries, newest first"))
)]
#[get("/api/education")]
pub async fn list_education_handler(data: web::Data<AppState>) -> impl Responder {
    crud::list_response(&*data.education, ENTITY).await
}

#[post("/api/education/create")]
pub async fn create_education_handler(
    _admin: AdminUser,
    req: web::Json<EducationDraft>,
    data: web::Data<AppState>,
) -> impl Responder {
    crud::create_response(&*data.education, req.into_inner(), ENTITY).await
}

#[post("/api/education/update")]
pub async fn update_education_handler(
    _admin: AdminUser,
    req: web::Json<UpdateRequest<EducationDraft>>,
    data: web::Data<AppState>,
) -> impl Responder {
    let UpdateRequest { id, draft } = req.into_inner();
    crud::update_response(&*data.education, id, draft, ENTITY).await
}

#[post("/api/education/delete")]
pub async fn delete_education_handler(
    _admin: AdminUser,
    req: web::Json<DeleteRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    crud::delete_response(&*data.education, req.id, ENTITY).await
}
