pub mod skill_category_repository;
pub mod skill_store;

pub use skill_category_repository::SkillCategoryRepository;
pub use skill_store::{SkillStore, SkillStoreError};
