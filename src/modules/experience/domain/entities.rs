use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::shared::api::{non_empty, FieldError, Normalize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ExperienceEntry {
    pub id: Uuid,
    pub company: String,
    pub role: String,
    pub start_date: String,
    pub end_date: Option<String>,
    pub currently_working: bool,
    pub description: String,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub platform_tools: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, ToSchema)]
pub struct ExperienceDraft {
    pub company: String,
    pub role: String,
    pub start_date: String,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub currently_working: bool,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub highlights: Vec<String>,
    // The admin form has historically posted both spellings.
    #[serde(default, alias = "platforms_tools")]
    pub platform_tools: Vec<String>,
}

impl Normalize for ExperienceDraft {
    fn normalize(self) -> Result<Self, FieldError> {
        // An ongoing position has no end date, whatever the form sent.
        let end_date = if self.currently_working {
            None
        } else {
            self.end_date
                .map(|d| d.trim().to_string())
                .filter(|d| !d.is_empty())
        };

        Ok(Self {
            company: non_empty("company", self.company)?,
            role: non_empty("role", self.role)?,
            start_date: non_empty("start_date", self.start_date)?,
            end_date,
            currently_working: self.currently_working,
            description: self.description,
            highlights: self.highlights,
            platform_tools: self.platform_tools,
        })
    }
}
