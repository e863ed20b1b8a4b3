pub mod crud;
mod json_config;
mod response;
mod validation;

pub use json_config::custom_json_config;
pub use response::{ApiError, ApiResponse};
pub use validation::{non_empty, FieldError, Normalize};
