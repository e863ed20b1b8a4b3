pub mod entities;
pub mod grouping;
pub mod tree;

pub use entities::{CategorizedSkill, SkillCategory, SkillCategoryRow, SkillItem, SOFT_SKILLS};
pub use grouping::{flatten, group_for_admin, regroup, GroupedSkills};
pub use tree::{SkillTree, SkillTreeError};
