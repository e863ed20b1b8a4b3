use async_trait::async_trait;

use crate::shared::store::StoreError;
use crate::skill::domain::{SkillCategory, SkillCategoryRow};

/// Storage of skill rows keyed by their category name.
#[async_trait]
pub trait SkillCategoryRepository: Send + Sync {
    /// All rows, ordered by category.
    async fn list(&self) -> Result<Vec<SkillCategoryRow>, StoreError>;

    /// Fails with [`StoreError::Conflict`] when the category already exists.
    async fn insert(&self, category: SkillCategory) -> Result<SkillCategoryRow, StoreError>;

    /// Replaces the items of an existing category. `None` when no row matched.
    async fn update_items(
        &self,
        category: &SkillCategory,
    ) -> Result<Option<SkillCategoryRow>, StoreError>;

    async fn delete_by_category(&self, category: &str) -> Result<(), StoreError>;

    /// Update, then insert when nothing matched. Two round trips and not
    /// atomic; stores that can do better override it.
    async fn upsert(&self, category: SkillCategory) -> Result<SkillCategoryRow, StoreError> {
        match self.update_items(&category).await? {
            Some(row) => Ok(row),
            None => self.insert(category).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use mockall::{mock, predicate::*};
    use uuid::Uuid;

    use crate::skill::domain::SkillItem;

    mock! {
        pub SkillRepo {}
        #[async_trait]
        impl SkillCategoryRepository for SkillRepo {
            async fn list(&self) -> Result<Vec<SkillCategoryRow>, StoreError>;
            async fn insert(&self, category: SkillCategory) -> Result<SkillCategoryRow, StoreError>;
            async fn update_items(
                &self,
                category: &SkillCategory,
            ) -> Result<Option<SkillCategoryRow>, StoreError>;
            async fn delete_by_category(&self, category: &str) -> Result<(), StoreError>;
        }
    }

    fn payload() -> SkillCategory {
        SkillCategory::new("seo", vec![SkillItem::new("Ahrefs", 70)])
    }

    fn row(category: &SkillCategory) -> SkillCategoryRow {
        SkillCategoryRow {
            id: Uuid::new_v4(),
            category: category.category.clone(),
            items: category.items.clone(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn upsert_inserts_same_payload_when_update_matches_nothing() {
        let mut repo = MockSkillRepo::new();
        repo.expect_update_items()
            .withf(|c| c.category == "seo")
            .times(1)
            .returning(|_| Ok(None));
        repo.expect_insert()
            .with(eq(payload()))
            .times(1)
            .returning(|c| Ok(row(&c)));

        let saved = repo.upsert(payload()).await.unwrap();
        assert_eq!(saved.items, payload().items);
    }

    #[tokio::test]
    async fn upsert_skips_insert_when_update_matched() {
        let mut repo = MockSkillRepo::new();
        repo.expect_update_items()
            .times(1)
            .returning(|c| Ok(Some(row(c))));
        repo.expect_insert().never();

        assert!(repo.upsert(payload()).await.is_ok());
    }

    #[tokio::test]
    async fn upsert_stops_on_update_failure() {
        let mut repo = MockSkillRepo::new();
        repo.expect_update_items()
            .returning(|_| Err(StoreError::Database("timeout".to_string())));
        repo.expect_insert().never();

        assert!(matches!(
            repo.upsert(payload()).await,
            Err(StoreError::Database(_))
        ));
    }
}
