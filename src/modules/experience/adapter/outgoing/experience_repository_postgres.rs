use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::experience::adapter::outgoing::sea_orm_entity::{self, ActiveModel, Column, Entity};
use crate::experience::domain::{ExperienceDraft, ExperienceEntry};
use crate::shared::store::{from_json, to_json, ResourceRepository, StoreError};

#[derive(Clone)]
pub struct ExperienceRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ExperienceRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ResourceRepository for ExperienceRepositoryPostgres {
    type Record = ExperienceEntry;
    type Draft = ExperienceDraft;

    async fn list(&self) -> Result<Vec<ExperienceEntry>, StoreError> {
        Entity::find()
            .order_by_desc(Column::StartDate)
            .all(&*self.db)
            .await?
            .into_iter()
            .map(model_to_entry)
            .collect()
    }

    async fn create(&self, draft: ExperienceDraft) -> Result<ExperienceEntry, StoreError> {
        let mut model = draft_to_active(draft)?;
        model.id = Set(Uuid::new_v4());
        model.created_at = Set(Utc::now().fixed_offset());

        let created = model.insert(&*self.db).await?;
        model_to_entry(created)
    }

    async fn update(&self, id: Uuid, draft: ExperienceDraft) -> Result<ExperienceEntry, StoreError> {
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

fn draft_to_active(draft: ExperienceDraft) -> Result<ActiveModel, StoreError> {
    let end_date = if draft.currently_working {
        None
    } else {
        draft.end_date
    };

    Ok(ActiveModel {
        company: Set(draft.company),
        role: Set(draft.role),
        start_date: Set(draft.start_date),
        end_date: Set(end_date),
        currently_working: Set(draft.currently_working),
        description: Set(draft.description),
        highlights: Set(to_json(&draft.highlights)?),
        platform_tools: Set(to_json(&draft.platform_tools)?),
        ..Default::default()
    })
}

fn model_to_entry(model: sea_orm_entity::Model) -> Result<ExperienceEntry, StoreError> {
    Ok(ExperienceEntry {
        id: model.id,
        company: model.company,
        role: model.role,
        start_date: model.start_date,
        end_date: model.end_date,
        currently_working: model.currently_working,
        description: model.description,
        highlights: from_json(model.highlights)?,
        platform_tools: from_json(model.platform_tools)?,
    })
}
