use jsonwebtoken::{decode, errors::ErrorKind, Algorithm, DecodingKey, Validation};
use std::fmt;

use crate::auth::application::ports::outgoing::{AdminClaims, TokenError, TokenVerifier};

use super::jwt_config::JwtConfig;

#[derive(Clone)]
pub struct JwtTokenVerifier {
    config: JwtConfig,
    decoding_key: DecodingKey,
}

#[cfg(not(tarpaulin_include))]
impl fmt::Debug for JwtTokenVerifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtTokenVerifier")
            .field("required_role", &self.config.required_role)
            .field("audience", &self.config.audience)
            .finish()
    }
}

impl JwtTokenVerifier {
    pub fn new(config: JwtConfig) -> Self {
        let decoding_key = DecodingKey::from_secret(config.secret_key.as_bytes());

        Self {
            config,
            decoding_key,
        }
    }

    fn validation(&self) -> Validation {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 30;
        validation.validate_nbf = true;

        match &self.config.audience {
            Some(aud) => validation.set_audience(&[aud]),
            None => validation.validate_aud = false,
        }

        validation
    }
}

impl TokenVerifier for JwtTokenVerifier {
    fn verify(&self, token: &str) -> Result<AdminClaims, TokenError> {
        let decoded = decode::<AdminClaims>(token, &self.decoding_key, &self.validation())
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => {
                    tracing::debug!("Token verification failed: Token expired");
                    TokenError::TokenExpired
                }
                ErrorKind::ImmatureSignature => {
                    tracing::warn!("Token verification failed: Token not yet valid");
                    TokenError::TokenNotYetValid
                }
                ErrorKind::InvalidSignature => {
                    tracing::error!("Security alert: Invalid token signature detected");
                    TokenError::InvalidSignature
                }
                ErrorKind::InvalidAudience => {
                    tracing::warn!("Token verification failed: Audience mismatch");
                    TokenError::InvalidAudience
                }
                _ => {
                    tracing::warn!("Token verification failed: Malformed token");
                    TokenError::MalformedToken
                }
            })?;

        let claims = decoded.claims;
        let role = claims.role.clone().unwrap_or_default();
        if role != self.config.required_role {
            tracing::warn!(
                "Rejected token for subject {} with role '{}'",
                claims.sub,
                role
            );
            return Err(TokenError::RoleNotAllowed(role));
        }

        Ok(claims)
    }
}
