use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QuerySelect, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::hero::adapter::outgoing::sea_orm_entity::{self, ActiveModel, Column, Entity};
use crate::hero::application::ports::outgoing::HeroRepository;
use crate::hero::domain::{HeroData, HeroDraft};
use crate::shared::store::{from_json, to_json, StoreError};

#[derive(Clone)]
pub struct HeroRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl HeroRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl HeroRepository for HeroRepositoryPostgres {
    async fn get(&self) -> Result<Option<HeroData>, StoreError> {
        match Entity::find().one(&*self.db).await? {
            Some(model) => Ok(Some(model_to_hero(model)?)),
            None => Ok(None),
        }
    }

    async fn update(&self, id: Uuid, draft: HeroDraft) -> Result<HeroData, StoreError> {
        let model = ActiveModel {
            greeting: Set(draft.greeting),
            name: Set(draft.name),
            title: Set(draft.title),
            tagline: Set(draft.tagline),
            description: Set(draft.description),
            profile_image: Set(draft.profile_image),
            phone: Set(draft.phone),
            email: Set(draft.email),
            address: Set(draft.address),
            resume_url: Set(draft.resume_url),
            social_links: Set(to_json(&draft.social_links)?),
            skills: Set(to_json(&draft.skills)?),
            my_story: Set(draft.my_story),
            marketing_philosophy: Set(draft.marketing_philosophy),
            marketing_approach: Set(to_json(&draft.marketing_approach)?),
            unique_traits: Set(to_json(&draft.unique_traits)?),
            updated_at: Set(Utc::now().fixed_offset()),
            ..Default::default()
        };

        let updated = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(id))
            .exec_with_returning(&*self.db)
            .await?
            .into_iter()
            .next()
            .ok_or(StoreError::NotFound)?;

        model_to_hero(updated)
    }

    async fn probe(&self) -> Result<Option<Uuid>, StoreError> {
        let id = Entity::find()
            .select_only()
            .column(Column::Id)
            .limit(1)
            .into_tuple::<Uuid>()
            .one(&*self.db)
            .await?;

        Ok(id)
    }
}

fn model_to_hero(model: sea_orm_entity::Model) -> Result<HeroData, StoreError> {
    Ok(HeroData {
        id: model.id,
        greeting: model.greeting,
        name: model.name,
        title: model.title,
        tagline: model.tagline,
        description: model.description,
        profile_image: model.profile_image,
        phone: model.phone,
        email: model.email,
        address: model.address,
        resume_url: model.resume_url,
        social_links: from_json(model.social_links)?,
        skills: from_json(model.skills)?,
        my_story: model.my_story,
        marketing_philosophy: model.marketing_philosophy,
        marketing_approach: from_json(model.marketing_approach)?,
        unique_traits: from_json(model.unique_traits)?,
        updated_at: model.updated_at.into(),
    })
}
