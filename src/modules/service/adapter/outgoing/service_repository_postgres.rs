use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::service::adapter::outgoing::sea_orm_entity::{self, ActiveModel, Column, Entity};
use crate::service::domain::{Service, ServiceDraft};
use crate::shared::store::{from_json, to_json, ResourceRepository, StoreError};

#[derive(Clone)]
pub struct ServiceRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ServiceRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ResourceRepository for ServiceRepositoryPostgres {
    type Record = Service;
    type Draft = ServiceDraft;

    async fn list(&self) -> Result<Vec<Service>, StoreError> {
        Entity::find()
            .order_by_desc(Column::UpdatedAt)
            .all(&*self.db)
            .await?
            .into_iter()
            .map(model_to_service)
            .collect()
    }

    async fn create(&self, draft: ServiceDraft) -> Result<Service, StoreError> {
        let now = Utc::now().fixed_offset();

        let mut model = draft_to_active(draft)?;
        model.id = Set(Uuid::new_v4());
        model.created_at = Set(now);
        model.updated_at = Set(now);

        let created = model.insert(&*self.db).await?;
        model_to_service(created)
    }

    async fn update(&self, id: Uuid, draft: ServiceDraft) -> Result<Service, StoreError> {
        let mut model = draft_to_active(draft)?;
        model.updated_at = Set(Utc::now().fixed_offset());

        let updated = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(id))
            .exec_with_returning(&*self.db)
            .await?
            .into_iter()
            .next()
            .ok_or(StoreError::NotFound)?;

        model_to_service(updated)
    }

    async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        let result = Entity::delete_by_id(id).exec(&*self.db).await?;
        if result.rows_affected == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }
}

fn draft_to_active(draft: ServiceDraft) -> Result<ActiveModel, StoreError> {
    Ok(ActiveModel {
        title: Set(draft.title),
        description: Set(draft.description),
        icon: Set(draft.icon),
        deliverables: Set(to_json(&draft.deliverables)?),
        ..Default::default()
    })
}

fn model_to_service(model: sea_orm_entity::Model) -> Result<Service, StoreError> {
    Ok(Service {
        id: model.id,
        title: model.title,
        description: model.description,
        icon: model.icon,
        deliverables: from_json(model.deliverables)?,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    })
}
