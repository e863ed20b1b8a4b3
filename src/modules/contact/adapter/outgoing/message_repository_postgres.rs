use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::contact::adapter::outgoing::sea_orm_entity::{self, ActiveModel, Column, Entity};
use crate::contact::application::ports::MessageRepository;
use crate::contact::domain::{Message, MessageDraft};
use crate::shared::store::StoreError;

#[derive(Clone)]
pub struct MessageRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl MessageRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MessageRepository for MessageRepositoryPostgres {
    async fn list(&self) -> Result<Vec<Message>, StoreError> {
        let rows = Entity::find()
            .order_by_desc(Column::CreatedAt)
            .all(&*self.db)
            .await?;

        Ok(rows.into_iter().map(Message::from).collect())
    }

    async fn create(&self, draft: MessageDraft) -> Result<Message, StoreError> {
        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(draft.name),
            email: Set(draft.email),
            subject: Set(draft.subject),
            message: Set(draft.message),
            created_at: Set(Utc::now().fixed_offset()),
            is_read: Set(false),
        };

        Ok(model.insert(&*self.db).await?.into())
    }

    async fn set_read(&self, id: Uuid, is_read: bool) -> Result<Message, StoreError> {
        let model = ActiveModel {
            is_read: Set(is_read),
            ..Default::default()
        };

        Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(id))
            .exec_with_returning(&*self.db)
            .await?
            .into_iter()
            .next()
            .map(Message::from)
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

impl From<sea_orm_entity::Model> for Message {
    fn from(model: sea_orm_entity::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            email: model.email,
            subject: model.subject,
            message: model.message,
            created_at: model.created_at.into(),
            is_read: model.is_read,
        }
    }
}
