use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::shared::api::{non_empty, FieldError, Normalize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Testimonial {
    pub id: Uuid,
    pub name: String,
    pub role: String,
    pub company: String,
    pub content: String,
    pub image: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, ToSchema)]
pub struct TestimonialDraft {
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub company: String,
    pub content: String,
    #[serde(default)]
    pub image: String,
}

impl Normalize for TestimonialDraft {
    fn normalize(self) -> Result<Self, FieldError> {
        Ok(Self {
            name: non_empty("name", self.name)?,
            content: non_empty("content", self.content)?,
            ..self
        })
    }
}
