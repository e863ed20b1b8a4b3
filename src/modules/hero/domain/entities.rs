use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::shared::api::{non_empty, FieldError, Normalize};
use crate::shared::icon::Icon;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct SocialLinks {
    pub instagram: String,
    pub linkedin: String,
    pub facebook: String,
    pub youtube: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct ApproachStep {
    pub step: String,
    pub title: String,
    pub desc: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct UniqueTrait {
    pub icon: String,
    pub title: String,
    pub desc: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HeroData {
    pub id: Uuid,
    #[serde(default)]
    pub greeting: String,
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub profile_image: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub resume_url: Option<String>,
    #[serde(default)]
    pub social_links: SocialLinks,
    #[serde(default)]
    pub skills: Vec<String>,
    pub my_story: Option<String>,
    pub marketing_philosophy: Option<String>,
    #[serde(default)]
    pub marketing_approach: Vec<ApproachStep>,
    #[serde(default)]
    pub unique_traits: Vec<UniqueTrait>,
    pub updated_at: DateTime<Utc>,
}

/// Full set of hero fields as posted by the admin form. The form still sends
/// a couple of camelCase keys, both spellings are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, ToSchema)]
pub struct HeroDraft {
    #[serde(default)]
    pub greeting: String,
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, alias = "profileImage")]
    pub profile_image: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub resume_url: Option<String>,
    #[serde(default, alias = "socialLinks")]
    pub social_links: SocialLinks,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub my_story: Option<String>,
    #[serde(default)]
    pub marketing_philosophy: Option<String>,
    #[serde(default)]
    pub marketing_approach: Vec<ApproachStep>,
    #[serde(default)]
    pub unique_traits: Vec<UniqueTrait>,
}

fn blank_to_none(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

impl Normalize for HeroDraft {
    fn normalize(self) -> Result<Self, FieldError> {
        let unique_traits = self
            .unique_traits
            .into_iter()
            .map(|t| UniqueTrait {
                icon: if t.icon.trim().is_empty() {
                    Icon::TRAIT_DEFAULT.name().to_string()
                } else {
                    Icon::canonicalize(t.icon)
                },
                ..t
            })
            .collect();

        Ok(Self {
            name: non_empty("name", self.name)?,
            phone: blank_to_none(self.phone),
            email: blank_to_none(self.email),
            address: blank_to_none(self.address),
            resume_url: blank_to_none(self.resume_url),
            skills: self
                .skills
                .into_iter()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            unique_traits,
            ..self
        })
    }
}
