use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::shared::api::{non_empty, FieldError, Normalize};

/// Category name that read-side grouping splits into its own bucket.
pub const SOFT_SKILLS: &str = "soft skills";

pub const MAX_LEVEL: u8 = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SkillItem {
    pub name: String,
    /// Proficiency in percent, 0 to 100.
    pub level: u8,
}

impl SkillItem {
    pub fn new(name: impl Into<String>, level: u8) -> Self {
        Self {
            name: name.into(),
            level,
        }
    }
}

/// One category with its ordered items, as written by the admin and as
/// exchanged between services. Unknown fields (ids, timestamps) are ignored
/// on input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SkillCategory {
    pub category: String,
    #[serde(default)]
    pub items: Vec<SkillItem>,
}

impl SkillCategory {
    pub fn new(category: impl Into<String>, items: Vec<SkillItem>) -> Self {
        Self {
            category: category.into(),
            items,
        }
    }

    pub fn is_soft_skills(&self) -> bool {
        self.category.trim().eq_ignore_ascii_case(SOFT_SKILLS)
    }
}

/// Category names are stored lower-case, items must be named and levels
/// must stay within 0 to 100.
impl Normalize for SkillCategory {
    fn normalize(self) -> Result<Self, FieldError> {
        let category = non_empty("category", self.category)?.to_lowercase();

        let items = self
            .items
            .into_iter()
            .map(|item| {
                if item.level > MAX_LEVEL {
                    return Err(FieldError::new("items", "level must be between 0 and 100"));
                }
                Ok(SkillItem {
                    name: non_empty("items", item.name)
                        .map_err(|_| FieldError::new("items", "skill name must not be empty"))?,
                    level: item.level,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { category, items })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SkillCategoryRow {
    pub id: Uuid,
    pub category: String,
    pub items: Vec<SkillItem>,
    pub created_at: DateTime<Utc>,
}

impl From<SkillCategoryRow> for SkillCategory {
    fn from(row: SkillCategoryRow) -> Self {
        Self {
            category: row.category,
            items: row.items,
        }
    }
}

/// A skill tagged with its owning category, the public flattened shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CategorizedSkill {
    pub name: String,
    pub level: u8,
    pub category: String,
}
