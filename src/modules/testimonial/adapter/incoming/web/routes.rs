use actix_web::{get, post, web, Responder};

use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::shared::api::crud::{self, DeleteRequest, UpdateRequest};
use crate::testimonial::domain::TestimonialDraft;
use crate::AppState;

const ENTITY: &str = "testimonial";

#[utoipa::path(
    get,
    path = "/api/testimonial",
    tag = "content",
    responses((status = 200, description = "Testimonials, oldest first"))
)]
#[get("/api/testimonial")]
pub async fn list_testimonials_handler(data: web::Data<AppState>) -> impl Responder {
    crud::list_response(&*data.testimonials, ENTITY).await
}

#[post("/api/testimonial/create")]
pub async fn create_testimonial_handler(
    _admin: AdminUser,
    req: web::Json<TestimonialDraft>,
    data: web::Data<AppState>,
) -> impl Responder {
    crud::create_response(&*data.testimonials, req.into_inner(), ENTITY).await
}

#[post("/api/testimonial/update")]
pub async fn update_testimonial_handler(
    _admin: AdminUser,
    req: web::Json<UpdateRequest<TestimonialDraft>>,
    data: web::Data<AppState>,
) -> impl Responder {
    let UpdateRequest { id, draft } = req.into_inner();
    crud::update_response(&*data.testimonials, id, draft, ENTITY).await
}

#[post("/api/testimonial/delete")]
pub async fn delete_testimonial_handler(
    _admin: AdminUser,
    req: web::Json<DeleteRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    crud::delete_response(&*data.testimonials, req.id, ENTITY).await
}
