use std::sync::Arc;

use chrono::{Duration, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde_json::json;

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenVerifier};
use crate::auth::application::ports::outgoing::TokenVerifier;

pub const TEST_SECRET: &str = "test_secret_key_for_testing_purposes_only";
pub const ADMIN_ROLE: &str = "authenticated";

pub fn token_verifier() -> Arc<dyn TokenVerifier + Send + Sync> {
    let config = JwtConfig::new(TEST_SECRET.to_string(), ADMIN_ROLE.to_string(), None)
        .expect("test jwt config");
    Arc::new(JwtTokenVerifier::new(config))
}

pub fn token_with_role(role: &str) -> String {
    let claims = json!({
        "sub": "admin-user",
        "exp": (Utc::now() + Duration::hours(1)).timestamp(),
        "role": role,
        "email": "admin@example.com",
    });

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
    )
    .expect("test token")
}

pub fn admin_token() -> String {
    token_with_role(ADMIN_ROLE)
}

pub fn bearer() -> (&'static str, String) {
    ("Authorization", format!("Bearer {}", admin_token()))
}
