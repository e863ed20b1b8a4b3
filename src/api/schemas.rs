//! Envelope shapes for the OpenAPI document. Handlers build these bodies
//! through `ApiResponse`; the types here only describe them.

use serde::Serialize;
use utoipa::ToSchema;

use crate::portfolio::domain::{PortfolioView, ResourceFailure};

#[derive(Serialize, ToSchema)]
#[serde(bound = "T: Serialize")]
pub struct SuccessResponse<T> {
    #[schema(example = true)]
    pub success: bool,
    pub data: T,
}

/// Body of every delete and of other writes without a payload.
#[derive(Serialize, ToSchema)]
pub struct AckResponse {
    #[schema(example = true)]
    pub success: bool,
}

/// `GET /api/portfolio`. `failures` is only present when failure reporting is
/// set to `expose`.
#[derive(Serialize, ToSchema)]
pub struct PortfolioResponse {
    #[schema(example = true)]
    pub success: bool,
    pub data: PortfolioView,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failures: Option<Vec<ResourceFailure>>,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = false)]
    pub success: bool,
    pub error: ErrorDetail,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorDetail {
    /// `VALIDATION_ERROR`, an auth code, `<ENTITY>_NOT_FOUND`,
    /// `<ENTITY>_ALREADY_EXISTS`, `MAINTENANCE` or `INTERNAL_ERROR`.
    #[schema(example = "SKILL_CATEGORY_NOT_FOUND")]
    pub code: String,

    #[schema(example = "skill category not found")]
    pub message: String,
}
