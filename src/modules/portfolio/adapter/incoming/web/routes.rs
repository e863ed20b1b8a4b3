use actix_web::{get, web, HttpResponse, Responder};
use serde::Serialize;

use crate::portfolio::application::FailureReporting;
use crate::portfolio::domain::{PortfolioView, ResourceFailure};
use crate::shared::api::ApiResponse;
use crate::shared::icon::Icon;
use crate::AppState;

/// Success envelope with the fallback log attached.
#[derive(Serialize)]
struct ExposedPortfolio<'a> {
    success: bool,
    data: &'a PortfolioView,
    failures: &'a [ResourceFailure],
}

#[utoipa::path(
    get,
    path = "/api/portfolio",
    tag = "portfolio",
    responses(
        (status = 200, description = "Every public section in one object; unreadable sections are empty", body = crate::api::schemas::PortfolioResponse)
    )
)]
#[get("/api/portfolio")]
pub async fn get_portfolio_handler(data: web::Data<AppState>) -> impl Responder {
    let outcome = data.aggregator.aggregate().await;

    match data.failure_reporting {
        FailureReporting::Silent => ApiResponse::success(outcome.view),
        FailureReporting::Expose => HttpResponse::Ok().json(ExposedPortfolio {
            success: true,
            data: &outcome.view,
            failures: &outcome.failures,
        }),
    }
}

#[utoipa::path(
    get,
    path = "/api/icons",
    tag = "portfolio",
    responses((status = 200, description = "Icon names accepted by services and hero traits"))
)]
#[get("/api/icons")]
pub async fn list_icons_handler() -> impl Responder {
    ApiResponse::success(Icon::ALL.map(Icon::name))
}
