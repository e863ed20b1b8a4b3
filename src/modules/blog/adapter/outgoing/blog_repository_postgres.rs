use async_trait::async_trait;
use sea_orm::sea_query::NullOrdering;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, Order, QueryFilter,
    QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::blog::adapter::outgoing::sea_orm_entity::{self, ActiveModel, Column, Entity};
use crate::blog::application::ports::BlogRepository;
use crate::blog::domain::{BlogDraft, BlogPost};
use crate::shared::store::{ResourceRepository, StoreError};

#[derive(Clone)]
pub struct BlogRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl BlogRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ResourceRepository for BlogRepositoryPostgres {
    type Record = BlogPost;
    type Draft = BlogDraft;

    async fn list(&self) -> Result<Vec<BlogPost>, StoreError> {
        let rows = Entity::find()
            .order_by_with_nulls(Column::PublishedAt, Order::Desc, NullOrdering::Last)
            .all(&*self.db)
            .await?;

        Ok(rows.into_iter().map(BlogPost::from).collect())
    }

    async fn create(&self, draft: BlogDraft) -> Result<BlogPost, StoreError> {
        let mut model = draft_to_active(draft);
        model.id = Set(Uuid::new_v4());

        Ok(model.insert(&*self.db).await?.into())
    }

    async fn update(&self, id: Uuid, draft: BlogDraft) -> Result<BlogPost, StoreError> {
        Entity::update_many()
            .set(draft_to_active(draft))
            .filter(Column::Id.eq(id))
            .exec_with_returning(&*self.db)
            .await?
            .into_iter()
            .next()
            .map(BlogPost::from)
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

#[async_trait]
impl BlogRepository for BlogRepositoryPostgres {
    async fn find_by_slug(&self, slug: &str) -> Result<Option<BlogPost>, StoreError> {
        let row = Entity::find()
            .filter(Column::Slug.eq(slug))
            .one(&*self.db)
            .await?;

        Ok(row.map(BlogPost::from))
    }
}

fn draft_to_active(draft: BlogDraft) -> ActiveModel {
    ActiveModel {
        title: Set(draft.title),
        slug: Set(draft.slug),
        excerpt: Set(draft.excerpt),
        category: Set(draft.category),
        cover_image: Set(draft.cover_image),
        published: Set(draft.published),
        content: Set(draft.content),
        published_at: Set(draft.published_at.map(|at| at.fixed_offset())),
        ..Default::default()
    }
}

impl From<sea_orm_entity::Model> for BlogPost {
    fn from(model: sea_orm_entity::Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            slug: model.slug,
            excerpt: model.excerpt,
            category: model.category,
            cover_image: model.cover_image,
            published: model.published,
            content: model.content,
            published_at: model.published_at.map(Into::into),
        }
    }
}
