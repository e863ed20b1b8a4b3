use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::shared::api::{non_empty, FieldError, Normalize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct EducationEntry {
    pub id: Uuid,
    pub school: String,
    pub degree: String,
    pub start_year: String,
    pub end_year: String,
    #[serde(default)]
    pub honors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, ToSchema)]
pub struct EducationDraft {
    pub school: String,
    pub degree: String,
    pub start_year: String,
    #[serde(default)]
    pub end_year: String,
    #[serde(default)]
    pub honors: Vec<String>,
}

impl Normalize for EducationDraft {
    fn normalize(self) -> Result<Self, FieldError> {
        Ok(Self {
            school: non_empty("school", self.school)?,
            degree: non_empty("degree", self.degree)?,
            start_year: non_empty("start_year", self.start_year)?,
            end_year: self.end_year.trim().to_string(),
            honors: self
                .honors
                .into_iter()
                .map(|h| h.trim().to_string())
                .filter(|h| !h.is_empty())
                .collect(),
        })
    }
}
