use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::skill::domain::{CategorizedSkill, SkillCategory, SkillItem};

/// Admin view of the skill rows: soft skills pulled into one bucket,
/// everything else kept per category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct GroupedSkills {
    pub technical: Vec<SkillCategory>,
    pub soft: Vec<SkillItem>,
}

/// Every item of every row, tagged with the row's category, in row order.
pub fn flatten(rows: &[SkillCategory]) -> Vec<CategorizedSkill> {
    rows.iter()
        .flat_map(|row| {
            row.items.iter().map(move |item| CategorizedSkill {
                name: item.name.clone(),
                level: item.level,
                category: row.category.clone(),
            })
        })
        .collect()
}

/// Inverse of [`flatten`] for non-empty categories. Categories appear in the
/// order of their first item.
pub fn regroup(skills: &[CategorizedSkill]) -> Vec<SkillCategory> {
    let mut groups: IndexMap<&str, Vec<SkillItem>> = IndexMap::new();
    for skill in skills {
        groups
            .entry(skill.category.as_str())
            .or_default()
            .push(SkillItem::new(skill.name.clone(), skill.level));
    }

    groups
        .into_iter()
        .map(|(category, items)| SkillCategory::new(category, items))
        .collect()
}

pub fn group_for_admin(rows: &[SkillCategory]) -> GroupedSkills {
    let mut grouped = GroupedSkills::default();
    for row in rows {
        if row.is_soft_skills() {
            grouped.soft.extend(row.items.iter().cloned());
        } else {
            grouped.technical.push(row.clone());
        }
    }
    grouped
}
