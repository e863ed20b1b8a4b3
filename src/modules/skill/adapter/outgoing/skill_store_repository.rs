use async_trait::async_trait;
use std::sync::Arc;

use crate::shared::store::StoreError;
use crate::skill::application::ports::{SkillCategoryRepository, SkillStore, SkillStoreError};
use crate::skill::domain::SkillCategory;

/// Skill store backed by this process's own repository.
#[derive(Clone)]
pub struct RepositorySkillStore {
    repo: Arc<dyn SkillCategoryRepository>,
}

impl RepositorySkillStore {
    pub fn new(repo: Arc<dyn SkillCategoryRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl SkillStore for RepositorySkillStore {
    async fn snapshot(&self) -> Result<Vec<SkillCategory>, SkillStoreError> {
        let rows = self.repo.list().await?;
        Ok(rows.into_iter().map(SkillCategory::from).collect())
    }

    async fn delete_category(&self, category: &str) -> Result<(), SkillStoreError> {
        match self.repo.delete_by_category(category).await {
            // Already gone is what we wanted.
            Ok(()) | Err(StoreError::NotFound) => Ok(()),
            Err(err) => Err(err.into()),
        }
    }

    async fn upsert_category(&self, category: SkillCategory) -> Result<(), SkillStoreError> {
        self.repo.upsert(category).await?;
        Ok(())
    }
}
