use std::marker::PhantomData;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::blog::application::ports::BlogRepository;
use crate::blog::domain::{BlogDraft, BlogPost};
use crate::contact::application::ports::MessageRepository;
use crate::contact::domain::{Message, MessageDraft};
use crate::education::domain::EducationEntry;
use crate::experience::domain::ExperienceEntry;
use crate::hero::application::ports::outgoing::HeroRepository;
use crate::hero::domain::{HeroData, HeroDraft};
use crate::portfolio::application::ports::ResourceFetcher;
use crate::project::domain::Project;
use crate::service::domain::Service;
use crate::shared::store::{ResourceRepository, StoreError};
use crate::shared::upstream::FetchError;
use crate::skill::application::ports::SkillCategoryRepository;
use crate::skill::domain::{SkillCategory, SkillCategoryRow, SkillItem};
use crate::testimonial::domain::Testimonial;
use crate::tests::support::fixtures;

fn check(error: &Option<StoreError>) -> Result<(), StoreError> {
    match error {
        Some(err) => Err(err.clone()),
        None => Ok(()),
    }
}

/// Canned rows for any plain content resource. Writes echo the first row.
pub struct StubResourceRepository<R, D> {
    rows: Vec<R>,
    error: Option<StoreError>,
    _draft: PhantomData<fn(D)>,
}

impl<R, D> Default for StubResourceRepository<R, D> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            error: None,
            _draft: PhantomData,
        }
    }
}

impl<R, D> StubResourceRepository<R, D> {
    pub fn with_rows(rows: Vec<R>) -> Self {
        Self {
            rows,
            ..Default::default()
        }
    }

    pub fn failing(error: StoreError) -> Self {
        Self {
            error: Some(error),
            ..Default::default()
        }
    }
}

impl<R: Clone, D> StubResourceRepository<R, D> {
    fn echo(&self) -> Result<R, StoreError> {
        check(&self.error)?;
        self.rows
            .first()
            .cloned()
            .ok_or_else(|| StoreError::Database("stub has no canned row".to_string()))
    }
}

/// Shared handle with the draft type taken from the expected port.
pub fn shared_rows<R, D>(rows: Vec<R>) -> Arc<dyn ResourceRepository<Record = R, Draft = D>>
where
    R: Clone + Send + Sync + 'static,
    D: Send + Sync + 'static,
{
    Arc::new(StubResourceRepository::with_rows(rows))
}

pub fn shared_failing<R, D>(error: StoreError) -> Arc<dyn ResourceRepository<Record = R, Draft = D>>
where
    R: Clone + Send + Sync + 'static,
    D: Send + Sync + 'static,
{
    Arc::new(StubResourceRepository::failing(error))
}

#[async_trait]
impl<R, D> ResourceRepository for StubResourceRepository<R, D>
where
    R: Clone + Send + Sync + 'static,
    D: Send + Sync + 'static,
{
    type Record = R;
    type Draft = D;

    async fn list(&self) -> Result<Vec<R>, StoreError> {
        check(&self.error)?;
        Ok(self.rows.clone())
    }

    async fn create(&self, _draft: D) -> Result<R, StoreError> {
        self.echo()
    }

    async fn update(&self, _id: Uuid, _draft: D) -> Result<R, StoreError> {
        self.echo()
    }

    async fn delete(&self, _id: Uuid) -> Result<(), StoreError> {
        check(&self.error)
    }
}

#[derive(Default)]
pub struct StubHeroRepository {
    hero: Mutex<Option<HeroData>>,
    error: Option<StoreError>,
}

impl StubHeroRepository {
    pub fn with_hero(hero: HeroData) -> Self {
        Self {
            hero: Mutex::new(Some(hero)),
            error: None,
        }
    }

    pub fn failing(error: StoreError) -> Self {
        Self {
            hero: Mutex::new(None),
            error: Some(error),
        }
    }
}

#[async_trait]
impl HeroRepository for StubHeroRepository {
    async fn get(&self) -> Result<Option<HeroData>, StoreError> {
        check(&self.error)?;
        Ok(self.hero.lock().unwrap().clone())
    }

    async fn update(&self, id: Uuid, draft: HeroDraft) -> Result<HeroData, StoreError> {
        check(&self.error)?;
        let mut slot = self.hero.lock().unwrap();
        if slot.is_none() {
            return Err(StoreError::NotFound);
        }

        let updated = HeroData {
            id,
            greeting: draft.greeting,
            name: draft.name,
            title: draft.title,
            tagline: draft.tagline,
            description: draft.description,
            profile_image: draft.profile_image,
            phone: draft.phone,
            email: draft.email,
            address: draft.address,
            resume_url: draft.resume_url,
            social_links: draft.social_links,
            skills: draft.skills,
            my_story: draft.my_story,
            marketing_philosophy: draft.marketing_philosophy,
            marketing_approach: draft.marketing_approach,
            unique_traits: draft.unique_traits,
            updated_at: Utc::now(),
        };
        *slot = Some(updated.clone());
        Ok(updated)
    }

    async fn probe(&self) -> Result<Option<Uuid>, StoreError> {
        check(&self.error)?;
        Ok(self.hero.lock().unwrap().as_ref().map(|h| h.id))
    }
}

#[derive(Default)]
pub struct StubBlogRepository {
    posts: Mutex<Vec<BlogPost>>,
    error: Option<StoreError>,
}

impl StubBlogRepository {
    pub fn with_posts(posts: Vec<BlogPost>) -> Self {
        Self {
            posts: Mutex::new(posts),
            error: None,
        }
    }

    pub fn failing(error: StoreError) -> Self {
        Self {
            posts: Mutex::default(),
            error: Some(error),
        }
    }
}

fn post_from_draft(id: Uuid, draft: BlogDraft) -> BlogPost {
    BlogPost {
        id,
        title: draft.title,
        slug: draft.slug,
        excerpt: draft.excerpt,
        category: draft.category,
        cover_image: draft.cover_image,
        published: draft.published,
        content: draft.content,
        published_at: draft.published_at,
    }
}

#[async_trait]
impl ResourceRepository for StubBlogRepository {
    type Record = BlogPost;
    type Draft = BlogDraft;

    async fn list(&self) -> Result<Vec<BlogPost>, StoreError> {
        check(&self.error)?;
        Ok(self.posts.lock().unwrap().clone())
    }

    async fn create(&self, draft: BlogDraft) -> Result<BlogPost, StoreError> {
        check(&self.error)?;
        let mut posts = self.posts.lock().unwrap();
        if posts.iter().any(|p| p.slug == draft.slug) {
            return Err(StoreError::Conflict(draft.slug));
        }
        let post = post_from_draft(Uuid::new_v4(), draft);
        posts.push(post.clone());
        Ok(post)
    }

    async fn update(&self, id: Uuid, draft: BlogDraft) -> Result<BlogPost, StoreError> {
        check(&self.error)?;
        let mut posts = self.posts.lock().unwrap();
        let slot = posts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(StoreError::NotFound)?;
        *slot = post_from_draft(id, draft);
        Ok(slot.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        check(&self.error)?;
        let mut posts = self.posts.lock().unwrap();
        let before = posts.len();
        posts.retain(|p| p.id != id);
        if posts.len() == before {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }
}

#[async_trait]
impl BlogRepository for StubBlogRepository {
    async fn find_by_slug(&self, slug: &str) -> Result<Option<BlogPost>, StoreError> {
        check(&self.error)?;
        Ok(self
            .posts
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.slug == slug)
            .cloned())
    }
}

#[derive(Default)]
pub struct StubMessageRepository {
    messages: Mutex<Vec<Message>>,
    error: Option<StoreError>,
}

impl StubMessageRepository {
    pub fn with_messages(messages: Vec<Message>) -> Self {
        Self {
            messages: Mutex::new(messages),
            error: None,
        }
    }

    pub fn failing(error: StoreError) -> Self {
        Self {
            messages: Mutex::default(),
            error: Some(error),
        }
    }
}

#[async_trait]
impl MessageRepository for StubMessageRepository {
    async fn list(&self) -> Result<Vec<Message>, StoreError> {
        check(&self.error)?;
        Ok(self.messages.lock().unwrap().clone())
    }

    async fn create(&self, draft: MessageDraft) -> Result<Message, StoreError> {
        check(&self.error)?;
        let message = Message {
            id: Uuid::new_v4(),
            name: draft.name,
            email: draft.email,
            subject: draft.subject,
            message: draft.message,
            created_at: Utc::now(),
            is_read: false,
        };
        self.messages.lock().unwrap().push(message.clone());
        Ok(message)
    }

    async fn set_read(&self, id: Uuid, is_read: bool) -> Result<Message, StoreError> {
        check(&self.error)?;
        let mut messages = self.messages.lock().unwrap();
        let message = messages
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or(StoreError::NotFound)?;
        message.is_read = is_read;
        Ok(message.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        check(&self.error)?;
        let mut messages = self.messages.lock().unwrap();
        let before = messages.len();
        messages.retain(|m| m.id != id);
        if messages.len() == before {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }
}

/// Skill rows kept in insertion order. `failing()` fails every call.
#[derive(Default)]
pub struct InMemorySkillRepository {
    rows: Mutex<Vec<SkillCategoryRow>>,
    broken: bool,
}

impl InMemorySkillRepository {
    pub fn with_categories(categories: Vec<SkillCategory>) -> Self {
        Self {
            rows: Mutex::new(categories.into_iter().map(new_row).collect()),
            broken: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            rows: Mutex::default(),
            broken: true,
        }
    }

    pub fn categories(&self) -> Vec<String> {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .map(|r| r.category.clone())
            .collect()
    }

    fn check(&self) -> Result<(), StoreError> {
        if self.broken {
            return Err(StoreError::Database("connection refused".to_string()));
        }
        Ok(())
    }
}

fn new_row(category: SkillCategory) -> SkillCategoryRow {
    SkillCategoryRow {
        id: Uuid::new_v4(),
        category: category.category,
        items: category.items,
        created_at: Utc::now(),
    }
}

#[async_trait]
impl SkillCategoryRepository for InMemorySkillRepository {
    async fn list(&self) -> Result<Vec<SkillCategoryRow>, StoreError> {
        self.check()?;
        let mut rows = self.rows.lock().unwrap().clone();
        rows.sort_by(|a, b| a.category.cmp(&b.category));
        Ok(rows)
    }

    async fn insert(&self, category: SkillCategory) -> Result<SkillCategoryRow, StoreError> {
        self.check()?;
        let mut rows = self.rows.lock().unwrap();
        if rows.iter().any(|r| r.category == category.category) {
            return Err(StoreError::Conflict(category.category));
        }
        let row = new_row(category);
        rows.push(row.clone());
        Ok(row)
    }

    async fn update_items(
        &self,
        category: &SkillCategory,
    ) -> Result<Option<SkillCategoryRow>, StoreError> {
        self.check()?;
        let mut rows = self.rows.lock().unwrap();
        Ok(rows
            .iter_mut()
            .find(|r| r.category == category.category)
            .map(|row| {
                row.items = category.items.clone();
                row.clone()
            }))
    }

    async fn delete_by_category(&self, category: &str) -> Result<(), StoreError> {
        self.check()?;
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|r| r.category != category);
        if rows.len() == before {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }
}

/// Fetcher with one canned result per section.
#[derive(Debug, Clone)]
pub struct StubResourceFetcher {
    pub hero: Result<HeroData, FetchError>,
    pub education: Result<Vec<EducationEntry>, FetchError>,
    pub experience: Result<Vec<ExperienceEntry>, FetchError>,
    pub projects: Result<Vec<Project>, FetchError>,
    pub services: Result<Vec<Service>, FetchError>,
    pub skills: Result<Vec<SkillCategory>, FetchError>,
    pub testimonials: Result<Vec<Testimonial>, FetchError>,
    pub blog_posts: Result<Vec<BlogPost>, FetchError>,
}

impl StubResourceFetcher {
    pub fn populated() -> Self {
        Self {
            hero: Ok(fixtures::hero()),
            education: Ok(vec![fixtures::education()]),
            experience: Ok(vec![fixtures::experience()]),
            projects: Ok(vec![fixtures::project()]),
            services: Ok(vec![fixtures::service()]),
            skills: Ok(vec![SkillCategory::new(
                "social media",
                vec![SkillItem::new("Meta Ads", 85)],
            )]),
            testimonials: Ok(vec![fixtures::testimonial()]),
            blog_posts: Ok(vec![fixtures::blog_post("growing-on-tiktok")]),
        }
    }

    pub fn all_failing() -> Self {
        let down = || FetchError::Transport("connection refused".to_string());
        Self {
            hero: Err(down()),
            education: Err(down()),
            experience: Err(down()),
            projects: Err(down()),
            services: Err(down()),
            skills: Err(down()),
            testimonials: Err(down()),
            blog_posts: Err(down()),
        }
    }
}

#[async_trait]
impl ResourceFetcher for StubResourceFetcher {
    async fn hero(&self) -> Result<HeroData, FetchError> {
        self.hero.clone()
    }

    async fn education(&self) -> Result<Vec<EducationEntry>, FetchError> {
        self.education.clone()
    }

    async fn experience(&self) -> Result<Vec<ExperienceEntry>, FetchError> {
        self.experience.clone()
    }

    async fn projects(&self) -> Result<Vec<Project>, FetchError> {
        self.projects.clone()
    }

    async fn services(&self) -> Result<Vec<Service>, FetchError> {
        self.services.clone()
    }

    async fn skills(&self) -> Result<Vec<SkillCategory>, FetchError> {
        self.skills.clone()
    }

    async fn testimonials(&self) -> Result<Vec<Testimonial>, FetchError> {
        self.testimonials.clone()
    }

    async fn blog_posts(&self) -> Result<Vec<BlogPost>, FetchError> {
        self.blog_posts.clone()
    }
}
