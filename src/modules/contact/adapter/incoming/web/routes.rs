use actix_web::{get, post, web, Responder};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::contact::domain::MessageDraft;
use crate::shared::api::crud::{store_error_response, DeleteRequest};
use crate::shared::api::{ApiResponse, Normalize};
use crate::AppState;

const ENTITY: &str = "message";

#[derive(Debug, Deserialize, ToSchema)]
pub struct MarkReadRequest {
    pub id: Uuid,
    pub is_read: bool,
}

#[utoipa::path(
    get,
    path = "/api/contact",
    tag = "contact",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Inbox, newest first"),
        (status = 401, description = "Missing or invalid token")
    )
)]
#[get("/api/contact")]
pub async fn list_messages_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.messages.list().await {
        Ok(messages) => ApiResponse::success(messages),
        Err(err) => store_error_response(err, ENTITY),
    }
}

#[utoipa::path(
    post,
    path = "/api/contact/create",
    tag = "contact",
    request_body = MessageDraft,
    responses(
        (status = 201, description = "Message stored"),
        (status = 400, description = "Missing field or invalid email")
    )
)]
#[post("/api/contact/create")]
pub async fn create_message_handler(
    req: web::Json<MessageDraft>,
    data: web::Data<AppState>,
) -> impl Responder {
    let draft = match req.into_inner().normalize() {
        Ok(d) => d,
        Err(err) => return err.into_response(),
    };

    match data.messages.create(draft).await {
        Ok(message) => {
            tracing::info!("Contact message received from {}", message.email);
            ApiResponse::created(message)
        }
        Err(err) => store_error_response(err, ENTITY),
    }
}

#[utoipa::path(
    post,
    path = "/api/contact/update",
    tag = "contact",
    request_body = MarkReadRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Read flag updated"),
        (status = 400, description = "Missing id or non-boolean is_read"),
        (status = 404, description = "Unknown message")
    )
)]
#[post("/api/contact/update")]
pub async fn mark_message_read_handler(
    _admin: AdminUser,
    req: web::Json<MarkReadRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let MarkReadRequest { id, is_read } = req.into_inner();
    match data.messages.set_read(id, is_read).await {
        Ok(message) => ApiResponse::success(message),
        Err(err) => store_error_response(err, ENTITY),
    }
}

#[utoipa::path(
    post,
    path = "/api/contact/delete",
    tag = "contact",
    request_body = DeleteRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Message deleted", body = crate::api::schemas::AckResponse),
        (status = 404, description = "Unknown message")
    )
)]
#[post("/api/contact/delete")]
pub async fn delete_message_handler(
    _admin: AdminUser,
    req: web::Json<DeleteRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.messages.delete(req.id).await {
        Ok(()) => ApiResponse::ok(),
        Err(err) => store_error_response(err, ENTITY),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};

    use crate::shared::api::custom_json_config;
    use crate::shared::store::StoreError;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer, token_verifier};
    use crate::tests::support::fixtures::message;
    use crate::tests::support::stubs::StubMessageRepository;

    #[actix_web::test]
    async fn contact_form_is_public() {
        let state = TestAppStateBuilder::default().build();
        let app =
            test::init_service(App::new().app_data(state).service(create_message_handler)).await;

        let req = test::TestRequest::post()
            .uri("/api/contact/create")
            .set_json(json!({
                "name": "Rina",
                "email": "rina@example.com",
                "subject": "Collaboration",
                "message": "Let's talk."
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["is_read"], false);
        assert_eq!(body["data"]["email"], "rina@example.com");
    }

    #[actix_web::test]
    async fn contact_form_rejects_bad_email() {
        let state = TestAppStateBuilder::default().build();
        let app =
            test::init_service(App::new().app_data(state).service(create_message_handler)).await;

        let req = test::TestRequest::post()
            .uri("/api/contact/create")
            .set_json(json!({
                "name": "Rina",
                "email": "not-an-email",
                "subject": "Collaboration",
                "message": "Let's talk."
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[actix_web::test]
    async fn inbox_requires_admin() {
        let state = TestAppStateBuilder::default().build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(web::Data::new(token_verifier()))
                .service(list_messages_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/contact").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn inbox_lists_messages_for_admin() {
        let state = TestAppStateBuilder::default()
            .with_messages(StubMessageRepository::with_messages(vec![message(false)]))
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(web::Data::new(token_verifier()))
                .service(list_messages_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/contact")
            .insert_header(bearer())
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"].as_array().map(Vec::len), Some(1));
    }

    #[actix_web::test]
    async fn read_flag_must_be_boolean() {
        let state = TestAppStateBuilder::default().build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(web::Data::new(token_verifier()))
                .app_data(custom_json_config())
                .service(mark_message_read_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/contact/update")
            .insert_header(bearer())
            .set_json(json!({ "id": Uuid::new_v4(), "is_read": "yes" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[actix_web::test]
    async fn mark_read_without_id_is_400() {
        let state = TestAppStateBuilder::default().build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(web::Data::new(token_verifier()))
                .app_data(custom_json_config())
                .service(mark_message_read_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/contact/update")
            .insert_header(bearer())
            .set_json(json!({ "is_read": true }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn mark_read_toggles_flag() {
        let unread = message(false);
        let state = TestAppStateBuilder::default()
            .with_messages(StubMessageRepository::with_messages(vec![unread.clone()]))
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(web::Data::new(token_verifier()))
                .service(mark_message_read_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/contact/update")
            .insert_header(bearer())
            .set_json(json!({ "id": unread.id, "is_read": true }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["is_read"], true);
    }

    #[actix_web::test]
    async fn delete_of_unknown_message_is_404() {
        let state = TestAppStateBuilder::default()
            .with_messages(StubMessageRepository::failing(StoreError::NotFound))
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(web::Data::new(token_verifier()))
                .service(delete_message_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/contact/delete")
            .insert_header(bearer())
            .set_json(json!({ "id": Uuid::new_v4() }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "MESSAGE_NOT_FOUND");
    }
}
