use actix_web::{get, post, web, Responder};

use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::hero::domain::HeroDraft;
use crate::shared::api::crud::{store_error_response, UpdateRequest};
use crate::shared::api::{ApiResponse, Normalize};
use crate::shared::store::StoreError;
use crate::AppState;

const ENTITY: &str = "hero";

#[utoipa::path(
    get,
    path = "/api/hero",
    tag = "content",
    responses(
        (status = 200, description = "Hero section"),
        (status = 404, description = "Hero row has not been seeded")
    )
)]
#[get("/api/hero")]
pub async fn get_hero_handler(data: web::Data<AppState>) -> impl Responder {
    match data.hero.get().await {
        Ok(Some(hero)) => ApiResponse::success(hero),
        Ok(None) => store_error_response(StoreError::NotFound, ENTITY),
        Err(err) => store_error_response(err, ENTITY),
    }
}

#[post("/api/hero/update")]
pub async fn update_hero_handler(
    _admin: AdminUser,
    req: web::Json<UpdateRequest<HeroDraft>>,
    data: web::Data<AppState>,
) -> impl Responder {
    let UpdateRequest { id, draft } = req.into_inner();
    let draft = match draft.normalize() {
        Ok(d) => d,
        Err(err) => return err.into_response(),
    };

    match data.hero.update(id, draft).await {
        Ok(hero) => ApiResponse::success(hero),
        Err(err) => store_error_response(err, ENTITY),
    }
}
