use actix_web::{delete, get, post, put, web, Responder};
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::blog::domain::BlogDraft;
use crate::shared::api::crud::{self, store_error_response};
use crate::shared::api::ApiResponse;
use crate::shared::store::StoreError;
use crate::AppState;

const ENTITY: &str = "blog";

#[utoipa::path(
    get,
    path = "/api/blog",
    tag = "content",
    responses((status = 200, description = "Blog posts, latest publication first"))
)]
#[get("/api/blog")]
pub async fn list_blog_handler(data: web::Data<AppState>) -> impl Responder {
    crud::list_response(&*data.blog, ENTITY).await
}

#[utoipa::path(
    get,
    path = "/api/blog/{slug}",
    tag = "content",
    params(("slug" = String, Path, description = "Post slug")),
    responses(
        (status = 200, description = "Blog post"),
        (status = 404, description = "No post with that slug")
    )
)]
#[get("/api/blog/{slug}")]
pub async fn get_blog_by_slug_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.blog.find_by_slug(&path.into_inner()).await {
        Ok(Some(post)) => ApiResponse::success(post),
        Ok(None) => store_error_response(StoreError::NotFound, ENTITY),
        Err(err) => store_error_response(err, ENTITY),
    }
}

#[post("/api/blog/create")]
pub async fn create_blog_handler(
    _admin: AdminUser,
    req: web::Json<BlogDraft>,
    data: web::Data<AppState>,
) -> impl Responder {
    crud::create_response(&*data.blog, req.into_inner(), ENTITY).await
}

#[put("/api/blog/update/{id}")]
pub async fn update_blog_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    req: web::Json<BlogDraft>,
    data: web::Data<AppState>,
) -> impl Responder {
    crud::update_response(&*data.blog, path.into_inner(), req.into_inner(), ENTITY).await
}

#[delete("/api/blog/delete/{id}")]
pub async fn delete_blog_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    crud::delete_response(&*data.blog, path.into_inner(), ENTITY).await
}
