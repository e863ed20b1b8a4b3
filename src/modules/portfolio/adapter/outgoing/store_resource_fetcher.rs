use async_trait::async_trait;
use std::sync::Arc;

use crate::blog::application::ports::BlogRepository;
use crate::blog::domain::BlogPost;
use crate::education::application::ports::EducationRepository;
use crate::education::domain::EducationEntry;
use crate::experience::application::ports::ExperienceRepository;
use crate::experience::domain::ExperienceEntry;
use crate::hero::application::ports::outgoing::HeroRepository;
use crate::hero::domain::HeroData;
use crate::portfolio::application::ports::ResourceFetcher;
use crate::project::application::ports::ProjectRepository;
use crate::project::domain::Project;
use crate::service::application::ports::ServiceRepository;
use crate::service::domain::Service;
use crate::shared::store::StoreError;
use crate::shared::upstream::FetchError;
use crate::skill::application::ports::SkillCategoryRepository;
use crate::skill::domain::SkillCategory;
use crate::testimonial::application::ports::TestimonialRepository;
use crate::testimonial::domain::Testimonial;

/// Status the same read would have produced over HTTP.
fn rejected(err: StoreError) -> FetchError {
    let status = match err {
        StoreError::NotFound => 404,
        StoreError::Conflict(_) => 409,
        StoreError::Database(_) => 500,
    };
    FetchError::Rejected {
        status,
        message: err.to_string(),
    }
}

/// Reads every section straight from this process's repositories.
#[derive(Clone)]
pub struct StoreResourceFetcher {
    pub hero: Arc<dyn HeroRepository>,
    pub education: Arc<EducationRepository>,
    pub experience: Arc<ExperienceRepository>,
    pub projects: Arc<ProjectRepository>,
    pub services: Arc<ServiceRepository>,
    pub skills: Arc<dyn SkillCategoryRepository>,
    pub testimonials: Arc<TestimonialRepository>,
    pub blog: Arc<dyn BlogRepository>,
}

#[async_trait]
impl ResourceFetcher for StoreResourceFetcher {
    async fn hero(&self) -> Result<HeroData, FetchError> {
        self.hero
            .get()
            .await
            .map_err(rejected)?
            .ok_or_else(|| rejected(StoreError::NotFound))
    }

    async fn education(&self) -> Result<Vec<EducationEntry>, FetchError> {
        self.education.list().await.map_err(rejected)
    }

    async fn experience(&self) -> Result<Vec<ExperienceEntry>, FetchError> {
        self.experience.list().await.map_err(rejected)
    }

    async fn projects(&self) -> Result<Vec<Project>, FetchError> {
        self.projects.list().await.map_err(rejected)
    }

    async fn services(&self) -> Result<Vec<Service>, FetchError> {
        self.services.list().await.map_err(rejected)
    }

    async fn skills(&self) -> Result<Vec<SkillCategory>, FetchError> {
        let rows = self.skills.list().await.map_err(rejected)?;
        Ok(rows.into_iter().map(SkillCategory::from).collect())
    }

    async fn testimonials(&self) -> Result<Vec<Testimonial>, FetchError> {
        self.testimonials.list().await.map_err(rejected)
    }

    async fn blog_posts(&self) -> Result<Vec<BlogPost>, FetchError> {
        self.blog.list().await.map_err(rejected)
    }
}
