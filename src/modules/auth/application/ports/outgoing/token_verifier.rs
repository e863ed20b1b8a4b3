use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    #[error("Token has expired")]
    TokenExpired,

    #[error("Token is not yet valid")]
    TokenNotYetValid,

    #[error("Invalid token signature")]
    InvalidSignature,

    #[error("Token audience does not match")]
    InvalidAudience,

    #[error("Malformed token")]
    MalformedToken,

    #[error("Role '{0}' is not allowed to manage content")]
    RoleNotAllowed(String),
}

/// Claims of an access token issued by the hosted identity provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminClaims {
    pub sub: String,
    pub exp: i64,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

pub trait TokenVerifier: Send + Sync {
    /// Checks signature, lifetime and role, returning the claims of a token
    /// that may manage content.
    fn verify(&self, token: &str) -> Result<AdminClaims, TokenError>;
}
