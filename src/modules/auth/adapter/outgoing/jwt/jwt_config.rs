use anyhow::bail;

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub required_role: String,
    pub audience: Option<String>,
}

impl JwtConfig {
    pub fn new(
        secret_key: String,
        required_role: String,
        audience: Option<String>,
    ) -> anyhow::Result<Self> {
        // HS256 requires at least 32 bytes
        if secret_key.len() < 32 {
            bail!("ADMIN_JWT_SECRET must be at least 32 characters long for HS256 algorithm");
        }

        if required_role.trim().is_empty() {
            bail!("ADMIN_JWT_ROLE must not be empty");
        }

        Ok(Self {
            secret_key,
            required_role: required_role.trim().to_string(),
            audience,
        })
    }
}
