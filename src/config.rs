use std::env;
use std::time::Duration;

use anyhow::{anyhow, bail, Context};

use crate::auth::adapter::outgoing::jwt::JwtConfig;
use crate::portfolio::application::FailureReporting;

/// Where the aggregator and the skill reconciler read and write content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentSource {
    /// Repositories of this process.
    InProcess,
    /// JSON endpoints of another deployment.
    Upstream {
        base_url: String,
        token: Option<String>,
        timeout: Duration,
    },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: String,
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub run_migrations: bool,
    pub maintenance_mode: bool,
    pub failure_reporting: FailureReporting,
    pub content_source: ContentSource,
    pub jwt: JwtConfig,
}

impl AppConfig {
    /// Load `.env.{RUST_ENV}` (falling back to `.env`) and read the process
    /// environment.
    pub fn from_env() -> anyhow::Result<Self> {
        let environment = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

        let env_file = format!(".env.{}", environment);
        if dotenvy::from_filename(&env_file).is_err() {
            dotenvy::dotenv().ok();
        }

        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| anyhow!("{} is not set", key))
        };

        let environment = lookup("RUST_ENV").unwrap_or_else(|| "development".to_string());

        let port = required("PORT")?
            .parse::<u16>()
            .context("PORT must be a valid port number")?;

        let run_migrations = parse_flag("RUN_MIGRATIONS", lookup("RUN_MIGRATIONS"))?;

        // Maintenance never applies to local development.
        let maintenance_mode = parse_flag("MAINTENANCE_MODE", lookup("MAINTENANCE_MODE"))?
            && environment != "development";

        let failure_reporting = match lookup("PORTFOLIO_FAILURE_REPORTING") {
            None => FailureReporting::Silent,
            Some(raw) => raw.parse().map_err(|e: String| anyhow!(e))?,
        };

        let content_source = match lookup("CONTENT_SOURCE_URL").filter(|v| !v.trim().is_empty())
        {
            None => ContentSource::InProcess,
            Some(base_url) => {
                let timeout_secs = lookup("CONTENT_SOURCE_TIMEOUT_SECS")
                    .unwrap_or_else(|| "10".to_string())
                    .parse::<u64>()
                    .context("CONTENT_SOURCE_TIMEOUT_SECS must be a whole number of seconds")?;
                if timeout_secs == 0 {
                    bail!("CONTENT_SOURCE_TIMEOUT_SECS must be greater than zero");
                }

                ContentSource::Upstream {
                    base_url: base_url.trim_end_matches('/').to_string(),
                    token: lookup("CONTENT_SOURCE_TOKEN").filter(|v| !v.is_empty()),
                    timeout: Duration::from_secs(timeout_secs),
                }
            }
        };

        let jwt = JwtConfig::new(
            required("ADMIN_JWT_SECRET")?,
            lookup("ADMIN_JWT_ROLE").unwrap_or_else(|| "authenticated".to_string()),
            lookup("ADMIN_JWT_AUDIENCE").filter(|v| !v.is_empty()),
        )?;

        Ok(Self {
            environment,
            database_url: required("DATABASE_URL")?,
            host: required("HOST")?,
            port,
            run_migrations,
            maintenance_mode,
            failure_reporting,
            content_source,
            jwt,
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_flag(key: &str, value: Option<String>) -> anyhow::Result<bool> {
    match value.as_deref().map(str::trim) {
        None | Some("") => Ok(false),
        Some("true") | Some("1") => Ok(true),
        Some("false") | Some("0") => Ok(false),
        Some(other) => bail!("{} must be true or false, got '{}'", key, other),
    }
}
