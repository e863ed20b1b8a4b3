use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::shared::api::{non_empty, FieldError, Normalize};

static SLUG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("valid slug pattern"));

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BlogPost {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub cover_image: String,
    #[serde(default)]
    pub published: bool,
    /// HTML body.
    #[serde(default)]
    pub content: String,
    pub published_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, ToSchema)]
pub struct BlogDraft {
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub cover_image: String,
    #[serde(default)]
    pub published: bool,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
}

pub fn is_valid_slug(slug: &str) -> bool {
    SLUG_PATTERN.is_match(slug)
}

impl Normalize for BlogDraft {
    fn normalize(self) -> Result<Self, FieldError> {
        let slug = self.slug.trim().to_string();
        if !is_valid_slug(&slug) {
            return Err(FieldError::new(
                "slug",
                "must be lower-case words separated by single hyphens",
            ));
        }

        // Publishing without a date stamps the post now.
        let published_at = match (self.published, self.published_at) {
            (true, None) => Some(Utc::now()),
            (_, at) => at,
        };

        Ok(Self {
            title: non_empty("title", self.title)?,
            slug,
            excerpt: self.excerpt.trim().to_string(),
            category: self.category.trim().to_string(),
            published_at,
            ..self
        })
    }
}
