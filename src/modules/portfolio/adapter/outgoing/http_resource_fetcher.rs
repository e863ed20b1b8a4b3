use async_trait::async_trait;

use crate::blog::domain::BlogPost;
use crate::education::domain::EducationEntry;
use crate::experience::domain::ExperienceEntry;
use crate::hero::domain::HeroData;
use crate::portfolio::application::ports::ResourceFetcher;
use crate::portfolio::domain::ResourceKind;
use crate::project::domain::Project;
use crate::service::domain::Service;
use crate::shared::upstream::{ApiClient, FetchError};
use crate::skill::domain::SkillCategory;
use crate::testimonial::domain::Testimonial;

/// Reads every section from the public list endpoints of another deployment.
#[derive(Debug, Clone)]
pub struct HttpResourceFetcher {
    client: ApiClient,
}

impl HttpResourceFetcher {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ResourceFetcher for HttpResourceFetcher {
    async fn hero(&self) -> Result<HeroData, FetchError> {
        self.client.get_data(ResourceKind::Hero.path()).await
    }

    async fn education(&self) -> Result<Vec<EducationEntry>, FetchError> {
        self.client.get_data(ResourceKind::Education.path()).await
    }

    async fn experience(&self) -> Result<Vec<ExperienceEntry>, FetchError> {
        self.client.get_data(ResourceKind::Experience.path()).await
    }

    async fn projects(&self) -> Result<Vec<Project>, FetchError> {
        self.client.get_data(ResourceKind::Projects.path()).await
    }

    async fn services(&self) -> Result<Vec<Service>, FetchError> {
        self.client.get_data(ResourceKind::Services.path()).await
    }

    async fn skills(&self) -> Result<Vec<SkillCategory>, FetchError> {
        self.client.get_data(ResourceKind::Skills.path()).await
    }

    async fn testimonials(&self) -> Result<Vec<Testimonial>, FetchError> {
        self.client.get_data(ResourceKind::Testimonials.path()).await
    }

    async fn blog_posts(&self) -> Result<Vec<BlogPost>, FetchError> {
        self.client.get_data(ResourceKind::BlogPosts.path()).await
    }
}
