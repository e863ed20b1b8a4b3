use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::shared::store::{ResourceRepository, StoreError};
use crate::testimonial::adapter::outgoing::sea_orm_entity::{self, ActiveModel, Column, Entity};
use crate::testimonial::domain::{Testimonial, TestimonialDraft};

#[derive(Clone)]
pub struct TestimonialRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl TestimonialRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ResourceRepository for TestimonialRepositoryPostgres {
    type Record = Testimonial;
    type Draft = TestimonialDraft;

    async fn list(&self) -> Result<Vec<Testimonial>, StoreError> {
        let rows = Entity::find()
            .order_by_asc(Column::CreatedAt)
            .all(&*self.db)
            .await?;

        Ok(rows.into_iter().map(Testimonial::from).collect())
    }

    async fn create(&self, draft: TestimonialDraft) -> Result<Testimonial, StoreError> {
        let mut model = draft_to_active(draft);
        model.id = Set(Uuid::new_v4());
        model.created_at = Set(Utc::now().fixed_offset());

        Ok(model.insert(&*self.db).await?.into())
    }

    async fn update(&self, id: Uuid, draft: TestimonialDraft) -> Result<Testimonial, StoreError> {
        Entity::update_many()
            .set(draft_to_active(draft))
            .filter(Column::Id.eq(id))
            .exec_with_returning(&*self.db)
            .await?
            .into_iter()
            .next()
            .map(Testimonial::from)
            .ok_or(StoreError::NotFound)
    }

    async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        let result = Entity::delete_by_id(id).exec(&*self.db).await?;
        if result.rows_affected == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }
}

fn draft_to_active(draft: TestimonialDraft) -> ActiveModel {
    ActiveModel {
        name: Set(draft.name),
        role: Set(draft.role),
        company: Set(draft.company),
        content: Set(draft.content),
        image: Set(draft.image),
        ..Default::default()
    }
}

impl From<sea_orm_entity::Model> for Testimonial {
    fn from(model: sea_orm_entity::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            role: model.role,
            company: model.company,
            content: model.content,
            image: model.image,
            created_at: model.created_at.into(),
        }
    }
}
