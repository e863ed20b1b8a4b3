use actix_web::{get, post, web, Responder};

use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::service::domain::ServiceDraft;
use crate::shared::api::crud::{self, DeleteRequest, UpdateRequest};
use crate::AppState;

const ENTITY: &str = "service";

#[utoipa::path(
    get,
    path = "/api/service",
    tag = "content",
    responses((status = 200, description = "Services, most recently edited first"))
)]
#[get("/api/service")]
pub async fn list_services_handler(data: web::Data<AppState>) -> impl Responder {
    crud::list_response(&*data.services, ENTITY).await
}

#[post("/api/service/create")]
pub async fn create_service_handler(
    _admin: AdminUser,
    req: web::Json<ServiceDraft>,
    data: web::Data<AppState>,
) -> impl Responder {
    crud::create_response(&*data.services, req.into_inner(), ENTITY).await
}

#[post("/api/service/update")]
pub async fn update_service_handler(
    _admin: AdminUser,
    req: web::Json<UpdateRequest<ServiceDraft>>,
    data: web::Data<AppState>,
) -> impl Responder {
    let UpdateRequest { id, draft } = req.into_inner();
    crud::update_response(&*data.services, id, draft, ENTITY).await
}

#[post("/api/service/delete")]
pub async fn delete_service_handler(
    _admin: AdminUser,
    req: web::Json<DeleteRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    crud::delete_response(&*data.services, req.id, ENTITY).await
}
