use actix_web::{get, post, web, Responder};

use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::experience::domain::ExperienceDraft;
use crate::shared::api::crud::{self, DeleteRequest, UpdateRequest};
use crate::AppState;

const ENTITY: &str = "experience";

#[utoipa::path(
    get,
    path = "/api/experience",
    tag = "content",
    responses((status = 200, description = "Work history, latest start date first"))
)]
#[get("/api/experience")]
pub async fn list_experience_handler(data: web::Data<AppState>) -> impl Responder {
    crud::list_response(&*data.experience, ENTITY).await
}

#[post("/api/experience/create")]
pub async fn create_experience_handler(
    _admin: AdminUser,
    req: web::Json<ExperienceDraft>,
    data: web::Data<AppState>,
) -> impl Responder {
    crud::create_response(&*data.experience, req.into_inner(), ENTITY).await
}

#[post("/api/experience/update")]
pub async fn update_experience_handler(
    _admin: AdminUser,
    req: web::Json<UpdateRequest<ExperienceDraft>>,
    data: web::Data<AppState>,
) -> impl Responder {
    let UpdateRequest { id, draft } = req.into_inner();
    crud::update_response(&*data.experience, id, draft, ENTITY).await
}

#[post("/api/experience/delete")]
pub async fn delete_experience_handler(
    _admin: AdminUser,
    req: web::Json<DeleteRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    crud::delete_response(&*data.experience, req.id, ENTITY).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};
    use uuid::Uuid;

    use crate::experience::domain::ExperienceEntry;
    use crate::shared::store::StoreError;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer, token_verifier};
    use crate::tests::support::stubs::StubResourceRepository;

    fn entry() -> ExperienceEntry {
        ExperienceEntry {
            id: Uuid::new_v4(),
            company: "Kopi Kenangan".to_string(),
            role: "Digital Marketing Lead".to_string(),
            start_date: "2021-03-01".to_string(),
            end_date: None,
            currently_working: true,
            description: String::new(),
            highlights: vec![],
            platform_tools: vec![],
        }
    }

    #[actix_web::test]
    async fn list_returns_rows() {
        let state = TestAppStateBuilder::default()
            .with_experience(StubResourceRepository::with_rows(vec![entry()]))
            .build();
        let app =
            test::init_service(App::new().app_data(state).service(list_experience_handler)).await;

        let req = test::TestRequest::get().uri("/api/experience").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"][0]["company"], "Kopi Kenangan");
        assert_eq!(body["data"][0]["end_date"], Value::Null);
    }

    #[actix_web::test]
    async fn list_failure_is_internal_error() {
        let state = TestAppStateBuilder::default()
            .with_experience(StubResourceRepository::failing(StoreError::Database(
                "connection reset".to_string(),
            )))
            .build();
        let app =
            test::init_service(App::new().app_data(state).service(list_experience_handler)).await;

        let req = test::TestRequest::get().uri("/api/experience").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[actix_web::test]
    async fn update_with_admin_token_returns_row() {
        let state = TestAppStateBuilder::default()
            .with_experience(StubResourceRepository::with_rows(vec![entry()]))
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(web::Data::new(token_verifier()))
                .service(update_experience_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/experience/update")
            .insert_header(bearer())
            .set_json(json!({
                "id": Uuid::new_v4(),
                "company": "Kopi Kenangan",
                "role": "Digital Marketing Lead",
                "start_date": "2021-03-01",
                "end_date": "2024-01-01",
                "currently_working": true
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
    }

    #[actix_web::test]
    async fn delete_requires_admin_token() {
        let state = TestAppStateBuilder::default().build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(web::Data::new(token_verifier()))
                .service(delete_experience_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/experience/delete")
            .set_json(json!({ "id": Uuid::new_v4() }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }
}
