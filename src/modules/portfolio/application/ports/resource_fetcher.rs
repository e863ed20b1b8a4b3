use async_trait::async_trait;

use crate::blog::domain::BlogPost;
use crate::education::domain::EducationEntry;
use crate::experience::domain::ExperienceEntry;
use crate::hero::domain::HeroData;
use crate::project::domain::Project;
use crate::service::domain::Service;
use crate::shared::upstream::FetchError;
use crate::skill::domain::SkillCategory;
use crate::testimonial::domain::Testimonial;

/// Source of every section the portfolio view is built from. Each method
/// is one independent list read.
#[async_trait]
pub trait ResourceFetcher: Send + Sync {
    async fn hero(&self) -> Result<HeroData, FetchError>;

    async fn education(&self) -> Result<Vec<EducationEntry>, FetchError>;

    async fn experience(&self) -> Result<Vec<ExperienceEntry>, FetchError>;

    async fn projects(&self) -> Result<Vec<Project>, FetchError>;

    async fn services(&self) -> Result<Vec<Service>, FetchError>;

    /// Raw `{category, items}` rows; flattening is the aggregator's job.
    async fn skills(&self) -> Result<Vec<SkillCategory>, FetchError>;

    async fn testimonials(&self) -> Result<Vec<Testimonial>, FetchError>;

    async fn blog_posts(&self) -> Result<Vec<BlogPost>, FetchError>;
}
