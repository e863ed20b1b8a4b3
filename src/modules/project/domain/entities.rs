use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::shared::api::{non_empty, FieldError, Normalize};

/// A case study card. `metrics` keeps the admin's key order ("ROAS" before
/// "CTR" stays that way on the site).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Project {
    pub id: Uuid,
    pub title: String,
    pub category: String,
    pub description: String,
    pub image: String,
    pub link: Option<String>,
    pub details: String,
    #[serde(default)]
    #[schema(value_type = Object)]
    pub metrics: IndexMap<String, String>,
    #[serde(default)]
    pub deliverables: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, ToSchema)]
pub struct ProjectDraft {
    pub title: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub details: String,
    #[serde(default)]
    #[schema(value_type = Option<Object>)]
    pub metrics: Option<IndexMap<String, String>>,
    #[serde(default)]
    pub deliverables: Vec<String>,
}

impl Normalize for ProjectDraft {
    fn normalize(self) -> Result<Self, FieldError> {
        let metrics = self
            .metrics
            .unwrap_or_default()
            .into_iter()
            .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
            .filter(|(k, _)| !k.is_empty())
            .collect();

        Ok(Self {
            title: non_empty("title", self.title)?,
            category: self.category.trim().to_string(),
            link: self
                .link
                .map(|l| l.trim().to_string())
                .filter(|l| !l.is_empty()),
            metrics: Some(metrics),
            ..self
        })
    }
}
