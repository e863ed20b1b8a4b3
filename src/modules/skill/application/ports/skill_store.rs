use async_trait::async_trait;

use crate::shared::store::StoreError;
use crate::shared::upstream::FetchError;
use crate::skill::domain::SkillCategory;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SkillStoreError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Upstream(#[from] FetchError),
}

/// What the reconciler needs from wherever the skill rows live.
#[async_trait]
pub trait SkillStore: Send + Sync {
    async fn snapshot(&self) -> Result<Vec<SkillCategory>, SkillStoreError>;

    async fn delete_category(&self, category: &str) -> Result<(), SkillStoreError>;

    async fn upsert_category(&self, category: SkillCategory) -> Result<(), SkillStoreError>;
}
