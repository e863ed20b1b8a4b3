use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::shared::api::{non_empty, FieldError, Normalize};
use crate::shared::icon::Icon;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Service {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    /// Icon name as stored; unknown names render as [`Icon::SERVICE_DEFAULT`].
    pub icon: String,
    #[serde(default)]
    pub deliverables: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, ToSchema)]
pub struct ServiceDraft {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub deliverables: Vec<String>,
}

impl Normalize for ServiceDraft {
    fn normalize(self) -> Result<Self, FieldError> {
        let icon = if self.icon.trim().is_empty() {
            Icon::SERVICE_DEFAULT.name().to_string()
        } else {
            Icon::canonicalize(self.icon)
        };

        Ok(Self {
            title: non_empty("title", self.title)?,
            icon,
            ..self
        })
    }
}
