use actix_web::error::{InternalError, JsonPayloadError};
use actix_web::web::JsonConfig;

use crate::shared::api::ApiResponse;

/// Blog and project editors inline cover images as base64 data URIs, so a
/// single body carries a few megabytes. Anything larger is rejected before
/// decoding.
const BODY_LIMIT: usize = 10 * 1024 * 1024;

/// Malformed, mistyped or oversized JSON bodies answer 400 with the standard
/// error envelope instead of actix's plain-text default.
pub fn custom_json_config() -> JsonConfig {
    JsonConfig::default()
        .limit(BODY_LIMIT)
        .error_handler(|err, req| {
            let message = describe(&err);
            tracing::debug!("Rejected JSON body on {}: {}", req.path(), message);
            InternalError::from_response(err, ApiResponse::bad_request("VALIDATION_ERROR", &message))
                .into()
        })
}

fn describe(err: &JsonPayloadError) -> String {
    match err {
        JsonPayloadError::ContentType => "Content-Type must be application/json".to_string(),
        JsonPayloadError::Overflow { limit } | JsonPayloadError::OverflowKnownLength { limit, .. } => {
            format!("Request body exceeds {limit} bytes")
        }
        JsonPayloadError::Deserialize(e) => e.to_string(),
        other => other.to_string(),
    }
}
