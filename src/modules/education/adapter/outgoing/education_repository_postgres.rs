use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::education::adapter::outgoing::sea_orm_entity::{self, ActiveModel, Column, Entity};
use crate::education::domain::{EducationDraft, EducationEntry};
use crate::shared::store::{from_json, to_json, ResourceRepository, StoreError};

#[derive(Clone)]
pub struct EducationRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl EducationRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ResourceRepository for EducationRepositoryPostgres {
    type Record = EducationEntry;
    type Draft = EducationDraft;

    async fn list(&self) -> Result<Vec<EducationEntry>, StoreError> {
        Entity::find()
            .order_by_desc(Column::StartYear)
            .all(&*self.db)
            .await?
            .into_iter()
            .map(model_to_entry)
            .collect()
    }

    async fn create(&self, draft: EducationDraft) -> Result<EducationEntry, StoreError> {
        let mut model = draft_to_active(draft)?;
        model.id = Set(Uuid::new_v4());

        let created = model.insert(&*self.db).await?;
        model_to_entry(created)
    }

    async fn update(&self, id: Uuid, draft: EducationDraft) -> Result<EducationEntry, StoreError> {
        let updated = Entity::update_many()
            .set(draft_to_active(draft)?)
            .filter(Column::Id.eq(id))
            .exec_with_returning(&*self.db)
            .await?
            .into_iter()
            .next()
            .ok_or(StoreError::NotFound)?;

        model_to_entry(updated)
    }

    async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        let result = Entity::delete_by_id(id).exec(&*self.db).await?;
        if result.rows_affected == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }
}

fn draft_to_active(draft: EducationDraft) -> Result<ActiveModel, StoreError> {
    Ok(ActiveModel {
        school: Set(draft.school),
        degree: Set(draft.degree),
        start_year: Set(draft.start_year),
        end_year: Set(draft.end_year),
        honors: Set(to_json(&draft.honors)?),
        ..Default::default()
    })
}

fn model_to_entry(model: sea_orm_entity::Model) -> Result<EducationEntry, StoreError> {
    Ok(EducationEntry {
        id: model.id,
        school: model.school,
        degree: model.degree,
        start_year: model.start_year,
        end_year: model.end_year,
        honors: from_json(model.honors)?,
    })
}
