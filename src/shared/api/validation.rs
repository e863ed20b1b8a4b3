use actix_web::HttpResponse;

use crate::shared::api::ApiResponse;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{field}: {message}")]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }

    pub fn into_response(self) -> HttpResponse {
        ApiResponse::bad_request("VALIDATION_ERROR", &self.to_string())
    }
}

/// Input drafts are checked and canonicalized before they reach a repository.
pub trait Normalize: Sized {
    fn normalize(self) -> Result<Self, FieldError>;
}

/// Trims `value` and rejects it when nothing is left.
pub fn non_empty(field: &'static str, value: String) -> Result<String, FieldError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(FieldError::new(field, "must not be empty"));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_empty_trims_surrounding_whitespace() {
        assert_eq!(non_empty("name", "  Kyle ".into()).unwrap(), "Kyle");
    }

    #[test]
    fn non_empty_rejects_blank_input() {
        let err = non_empty("name", "   ".into()).unwrap_err();
        assert_eq!(err.field, "name");
        assert_eq!(err.to_string(), "name: must not be empty");
    }
}
