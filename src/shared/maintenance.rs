use actix_web::{
    body::{EitherBody, MessageBody},
    dev::{ServiceRequest, ServiceResponse},
    get,
    middleware::Next,
    web, Error, Responder,
};
use serde::Serialize;

use crate::shared::api::ApiResponse;

/// Paths that stay reachable while the site is down for maintenance.
const EXEMPT_PATHS: [&str; 4] = ["/health", "/ready", "/api/ping", "/api/maintenance"];

#[derive(Debug, Clone, Copy, Serialize)]
pub struct MaintenanceMode {
    pub enabled: bool,
}

impl MaintenanceMode {
    pub fn blocks(&self, path: &str) -> bool {
        self.enabled && !EXEMPT_PATHS.contains(&path)
    }
}

/// Answers 503 for every non-exempt route while maintenance is on.
pub async fn maintenance_gate(
    req: ServiceRequest,
    next: Next<impl MessageBody>,
) -> Result<ServiceResponse<EitherBody<impl MessageBody>>, Error> {
    let blocked = req
        .app_data::<web::Data<MaintenanceMode>>()
        .map(|mode| mode.blocks(req.path()))
        .unwrap_or(false);

    if blocked {
        tracing::debug!("Maintenance mode: rejecting {}", req.path());
        let response = ApiResponse::service_unavailable(
            "MAINTENANCE",
            "The site is under maintenance, please come back later",
        );
        return Ok(req.into_response(response).map_into_right_body());
    }

    next.call(req)
        .await
        .map(ServiceResponse::map_into_left_body)
}

#[get("/api/maintenance")]
pub async fn maintenance_status(mode: web::Data<MaintenanceMode>) -> impl Responder {
    ApiResponse::success(*mode.get_ref())
}
