use indexmap::IndexMap;
use serde::Serialize;

use crate::skill::domain::entities::MAX_LEVEL;
use crate::skill::domain::{SkillCategory, SkillItem};

/// Level given to a freshly added skill.
pub const DEFAULT_LEVEL: u8 = 50;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SkillTreeError {
    #[error("category name must not be empty")]
    EmptyCategoryName,

    #[error("category '{0}' already exists")]
    DuplicateCategory(String),

    #[error("category '{0}' does not exist")]
    UnknownCategory(String),

    #[error("skill name must not be empty")]
    EmptySkillName,

    #[error("category '{category}' has no skill at position {index}")]
    UnknownSkill { category: String, index: usize },

    #[error("level {0} is outside 0..=100")]
    LevelOutOfRange(u16),
}

/// The admin's working copy of the skills: category name to ordered items.
///
/// Keys are trimmed and lower-cased on insertion, so lookups ignore case.
/// Insertion order is kept and drives the order of writes on save.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SkillTree(IndexMap<String, Vec<SkillItem>>);

fn category_key(name: &str) -> Result<String, SkillTreeError> {
    let key = name.trim().to_lowercase();
    if key.is_empty() {
        return Err(SkillTreeError::EmptyCategoryName);
    }
    Ok(key)
}

fn skill_name(name: &str) -> Result<String, SkillTreeError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(SkillTreeError::EmptySkillName);
    }
    Ok(name.to_string())
}

fn checked_level(level: u16) -> Result<u8, SkillTreeError> {
    u8::try_from(level)
        .ok()
        .filter(|l| *l <= MAX_LEVEL)
        .ok_or(SkillTreeError::LevelOutOfRange(level))
}

impl SkillTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a tree from whole categories, e.g. a sync request body.
    pub fn from_categories(
        categories: impl IntoIterator<Item = SkillCategory>,
    ) -> Result<Self, SkillTreeError> {
        let mut tree = Self::new();
        for category in categories {
            let key = tree.add_category(&category.category)?;
            for item in category.items {
                let name = skill_name(&item.name)?;
                let level = checked_level(u16::from(item.level))?;
                tree.items_mut(&key)?.push(SkillItem::new(name, level));
            }
        }
        Ok(tree)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, category: &str) -> bool {
        self.0.contains_key(&category.trim().to_lowercase())
    }

    pub fn get(&self, category: &str) -> Option<&[SkillItem]> {
        self.0
            .get(&category.trim().to_lowercase())
            .map(Vec::as_slice)
    }

    /// Categories in insertion order.
    pub fn categories(&self) -> impl Iterator<Item = (&str, &[SkillItem])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Adds an empty category and returns its normalized key.
    pub fn add_category(&mut self, name: &str) -> Result<String, SkillTreeError> {
        let key = category_key(name)?;
        if self.0.contains_key(&key) {
            return Err(SkillTreeError::DuplicateCategory(key));
        }
        self.0.insert(key.clone(), Vec::new());
        Ok(key)
    }

    pub fn remove_category(&mut self, name: &str) -> Result<Vec<SkillItem>, SkillTreeError> {
        let key = category_key(name)?;
        self.0
            .shift_remove(&key)
            .ok_or(SkillTreeError::UnknownCategory(key))
    }

    /// Appends a skill at [`DEFAULT_LEVEL`] and returns its position.
    pub fn add_skill(&mut self, category: &str, name: &str) -> Result<usize, SkillTreeError> {
        let name = skill_name(name)?;
        let items = self.items_mut(category)?;
        items.push(SkillItem::new(name, DEFAULT_LEVEL));
        Ok(items.len() - 1)
    }

    pub fn rename_skill(
        &mut self,
        category: &str,
        index: usize,
        name: &str,
    ) -> Result<(), SkillTreeError> {
        let name = skill_name(name)?;
        self.item_mut(category, index)?.name = name;
        Ok(())
    }

    pub fn set_level(
        &mut self,
        category: &str,
        index: usize,
        level: u16,
    ) -> Result<(), SkillTreeError> {
        let level = checked_level(level)?;
        self.item_mut(category, index)?.level = level;
        Ok(())
    }

    pub fn remove_skill(&mut self, category: &str, index: usize) -> Result<SkillItem, SkillTreeError> {
        let key = category_key(category)?;
        let items = self.items_mut(&key)?;
        if index >= items.len() {
            return Err(SkillTreeError::UnknownSkill {
                category: key,
                index,
            });
        }
        Ok(items.remove(index))
    }

    fn items_mut(&mut self, category: &str) -> Result<&mut Vec<SkillItem>, SkillTreeError> {
        let key = category_key(category)?;
        match self.0.get_mut(&key) {
            Some(items) => Ok(items),
            None => Err(SkillTreeError::UnknownCategory(key)),
        }
    }

    fn item_mut(&mut self, category: &str, index: usize) -> Result<&mut SkillItem, SkillTreeError> {
        let key = category_key(category)?;
        self.items_mut(&key)?
            .get_mut(index)
            .ok_or(SkillTreeError::UnknownSkill {
                category: key,
                index,
            })
    }
}
