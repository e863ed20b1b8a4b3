use actix_web::{get, post, web, Responder};

use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::project::domain::ProjectDraft;
use crate::shared::api::crud::{self, DeleteRequest, UpdateRequest};
use crate::AppState;

const ENTITY: &str = "project";

#[utoipa::path(
    get,
    path = "/api/project",
    tag = "content",
    responses((status = 200, description = "Projects, newest first"))
)]
#[get("/api/project")]
pub async fn list_projects_handler(data: web::Data<AppState>) -> impl Responder {
    crud::list_response(&*data.projects, ENTITY).await
}

#[post("/api/project/create")]
pub async fn create_project_handler(
    _admin: AdminUser,
    req: web::Json<ProjectDraft>,
    data: web::Data<AppState>,
) -> impl Responder {
    crud::create_response(&*data.projects, req.into_inner(), ENTITY).await
}

#[post("/api/project/update")]
pub async fn update_project_handler(
    _admin: AdminUser,
    req: web::Json<UpdateRequest<ProjectDraft>>,
    data: web::Data<AppState>,
) -> impl Responder {
    let UpdateRequest { id, draft } = req.into_inner();
    crud::update_response(&*data.projects, id, draft, ENTITY).await
}

#[post("/api/project/delete")]
pub async fn delete_project_handler(
    _admin: AdminUser,
    req: web::Json<DeleteRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    crud::delete_response(&*data.projects, req.id, ENTITY).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use chrono::Utc;
    use serde_json::{json, Value};
    use uuid::Uuid;

    use crate::project::domain::Project;
    use crate::shared::store::StoreError;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer, token_verifier};
    use crate::tests::support::stubs::StubResourceRepository;

    fn project() -> Project {
        Project {
            id: Uuid::new_v4(),
            title: "Ramadan Campaign".to_string(),
            category: "Paid Social".to_string(),
            description: String::new(),
            image: String::new(),
            link: None,
            details: String::new(),
            metrics: Default::default(),
            deliverables: vec![],
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[actix_web::test]
    async fn create_returns_201() {
        let state = TestAppStateBuilder::default()
            .with_projects(StubResourceRepository::with_rows(vec![project()]))
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(web::Data::new(token_verifier()))
                .service(create_project_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/project/create")
            .insert_header(bearer())
            .set_json(json!({
                "title": "Ramadan Campaign",
                "category": "Paid Social",
                "metrics": { "ROAS": "4.2x" }
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["title"], "Ramadan Campaign");
    }

    #[actix_web::test]
    async fn delete_of_unknown_id_is_404() {
        let state = TestAppStateBuilder::default()
            .with_projects(StubResourceRepository::failing(StoreError::NotFound))
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(web::Data::new(token_verifier()))
                .service(delete_project_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/project/delete")
            .insert_header(bearer())
            .set_json(json!({ "id": Uuid::new_v4() }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "PROJECT_NOT_FOUND");
    }

    #[actix_web::test]
    async fn delete_without_id_is_bad_request() {
        let state = TestAppStateBuilder::default().build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(web::Data::new(token_verifier()))
                .app_data(crate::shared::api::custom_json_config())
                .service(delete_project_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/project/delete")
            .insert_header(bearer())
            .set_json(json!({}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
