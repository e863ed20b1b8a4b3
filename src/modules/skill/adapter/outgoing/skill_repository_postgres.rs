use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::shared::store::{from_json, to_json, StoreError};
use crate::skill::adapter::outgoing::sea_orm_entity::{self, ActiveModel, Column, Entity};
use crate::skill::application::ports::SkillCategoryRepository;
use crate::skill::domain::{SkillCategory, SkillCategoryRow};

#[derive(Clone)]
pub struct SkillRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl SkillRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn new_row(category: SkillCategory) -> Result<ActiveModel, StoreError> {
        Ok(ActiveModel {
            id: Set(Uuid::new_v4()),
            category: Set(category.category),
            items: Set(to_json(&category.items)?),
            created_at: Set(Utc::now().fixed_offset()),
        })
    }
}

#[async_trait]
impl SkillCategoryRepository for SkillRepositoryPostgres {
    async fn list(&self) -> Result<Vec<SkillCategoryRow>, StoreError> {
        Entity::find()
            .order_by_asc(Column::Category)
            .all(&*self.db)
            .await?
            .into_iter()
            .map(model_to_row)
            .collect()
    }

    async fn insert(&self, category: SkillCategory) -> Result<SkillCategoryRow, StoreError> {
        let model = Self::new_row(category)?.insert(&*self.db).await?;
        model_to_row(model)
    }

    async fn update_items(
        &self,
        category: &SkillCategory,
    ) -> Result<Option<SkillCategoryRow>, StoreError> {
        let model = ActiveModel {
            items: Set(to_json(&category.items)?),
            ..Default::default()
        };

        Entity::update_many()
            .set(model)
            .filter(Column::Category.eq(category.category.as_str()))
            .exec_with_returning(&*self.db)
            .await?
            .into_iter()
            .next()
            .map(model_to_row)
            .transpose()
    }

    async fn delete_by_category(&self, category: &str) -> Result<(), StoreError> {
        let result = Entity::delete_many()
            .filter(Column::Category.eq(category))
            .exec(&*self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    /// Single `INSERT ... ON CONFLICT (category) DO UPDATE SET items`.
    ///
    /// The conflict target is the exact name. Callers pass lower-case keys;
    /// a legacy mixed-case row is not matched and trips the `lower(category)`
    /// index instead, surfacing as `StoreError::Conflict`.
    async fn upsert(&self, category: SkillCategory) -> Result<SkillCategoryRow, StoreError> {
        let model = Entity::insert(Self::new_row(category)?)
            .on_conflict(
                OnConflict::column(Column::Category)
                    .update_column(Column::Items)
                    .to_owned(),
            )
            .exec_with_returning(&*self.db)
            .await?;

        model_to_row(model)
    }
}

fn model_to_row(model: sea_orm_entity::Model) -> Result<SkillCategoryRow, StoreError> {
    Ok(SkillCategoryRow {
        id: model.id,
        category: model.category,
        items: from_json(model.items)?,
        created_at: model.created_at.into(),
    })
}
