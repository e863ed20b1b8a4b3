use actix_web::web;
use std::sync::Arc;

use crate::blog::application::ports::BlogRepository;
use crate::contact::application::ports::MessageRepository;
use crate::education::application::ports::EducationRepository;
use crate::education::domain::{EducationDraft, EducationEntry};
use crate::experience::application::ports::ExperienceRepository;
use crate::experience::domain::{ExperienceDraft, ExperienceEntry};
use crate::hero::application::ports::outgoing::HeroRepository;
use crate::portfolio::adapter::outgoing::StoreResourceFetcher;
use crate::portfolio::application::ports::ResourceFetcher;
use crate::portfolio::application::services::PortfolioAggregator;
use crate::portfolio::application::FailureReporting;
use crate::project::application::ports::ProjectRepository;
use crate::project::domain::{Project, ProjectDraft};
use crate::service::application::ports::ServiceRepository;
use crate::service::domain::{Service, ServiceDraft};
use crate::shared::store::ResourceRepository;
use crate::skill::adapter::outgoing::RepositorySkillStore;
use crate::skill::application::ports::SkillCategoryRepository;
use crate::skill::application::services::SkillReconciler;
use crate::testimonial::application::ports::TestimonialRepository;
use crate::testimonial::domain::{Testimonial, TestimonialDraft};
use crate::tests::support::stubs::*;
use crate::AppState;

/// Every port starts as an empty stub. Unless a fetcher is given, the
/// aggregator reads the same stubs the CRUD handlers use, and the reconciler
/// always writes through the skill repository.
pub struct TestAppStateBuilder {
    hero: Arc<dyn HeroRepository>,
    education: Arc<EducationRepository>,
    experience: Arc<ExperienceRepository>,
    projects: Arc<ProjectRepository>,
    services: Arc<ServiceRepository>,
    testimonials: Arc<TestimonialRepository>,
    skills: Arc<dyn SkillCategoryRepository>,
    blog: Arc<dyn BlogRepository>,
    messages: Arc<dyn MessageRepository>,
    fetcher: Option<Arc<dyn ResourceFetcher>>,
    failure_reporting: FailureReporting,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            hero: Arc::new(StubHeroRepository::default()),
            education: Arc::new(StubResourceRepository::<EducationEntry, EducationDraft>::default()),
            experience: Arc::new(
                StubResourceRepository::<ExperienceEntry, ExperienceDraft>::default(),
            ),
            projects: Arc::new(StubResourceRepository::<Project, ProjectDraft>::default()),
            services: Arc::new(StubResourceRepository::<Service, ServiceDraft>::default()),
            testimonials: Arc::new(
                StubResourceRepository::<Testimonial, TestimonialDraft>::default(),
            ),
            skills: Arc::new(InMemorySkillRepository::default()),
            blog: Arc::new(StubBlogRepository::default()),
            messages: Arc::new(StubMessageRepository::default()),
            fetcher: None,
            failure_reporting: FailureReporting::Silent,
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_hero(mut self, repo: impl HeroRepository + 'static) -> Self {
        self.hero = Arc::new(repo);
        self
    }

    pub fn with_education(
        mut self,
        repo: impl ResourceRepository<Record = EducationEntry, Draft = EducationDraft> + 'static,
    ) -> Self {
        self.education = Arc::new(repo);
        self
    }

    pub fn with_experience(
        mut self,
        repo: impl ResourceRepository<Record = ExperienceEntry, Draft = ExperienceDraft> + 'static,
    ) -> Self {
        self.experience = Arc::new(repo);
        self
    }

    pub fn with_projects(
        mut self,
        repo: impl ResourceRepository<Record = Project, Draft = ProjectDraft> + 'static,
    ) -> Self {
        self.projects = Arc::new(repo);
        self
    }

    pub fn with_services(
        mut self,
        repo: impl ResourceRepository<Record = Service, Draft = ServiceDraft> + 'static,
    ) -> Self {
        self.services = Arc::new(repo);
        self
    }

    pub fn with_testimonials(
        mut self,
        repo: impl ResourceRepository<Record = Testimonial, Draft = TestimonialDraft> + 'static,
    ) -> Self {
        self.testimonials = Arc::new(repo);
        self
    }

    /// Takes the `Arc` so the test can keep inspecting the rows.
    pub fn with_skills(mut self, repo: Arc<dyn SkillCategoryRepository>) -> Self {
        self.skills = repo;
        self
    }

    pub fn with_blog(mut self, repo: impl BlogRepository + 'static) -> Self {
        self.blog = Arc::new(repo);
        self
    }

    pub fn with_messages(mut self, repo: impl MessageRepository + 'static) -> Self {
        self.messages = Arc::new(repo);
        self
    }

    pub fn with_fetcher(mut self, fetcher: impl ResourceFetcher + 'static) -> Self {
        self.fetcher = Some(Arc::new(fetcher));
        self
    }

    pub fn with_failure_reporting(mut self, mode: FailureReporting) -> Self {
        self.failure_reporting = mode;
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        let fetcher = self.fetcher.unwrap_or_else(|| {
            Arc::new(StoreResourceFetcher {
                hero: self.hero.clone(),
                education: self.education.clone(),
                experience: self.experience.clone(),
                projects: self.projects.clone(),
                services: self.services.clone(),
                skills: self.skills.clone(),
                testimonials: self.testimonials.clone(),
                blog: self.blog.clone(),
            })
        });
        let skill_store = Arc::new(RepositorySkillStore::new(self.skills.clone()));

        web::Data::new(AppState {
            hero: self.hero,
            education: self.education,
            experience: self.experience,
            projects: self.projects,
            services: self.services,
            testimonials: self.testimonials,
            skills: self.skills,
            blog: self.blog,
            messages: self.messages,
            aggregator: Arc::new(PortfolioAggregator::new(fetcher)),
            reconciler: Arc::new(SkillReconciler::new(skill_store)),
            failure_reporting: self.failure_reporting,
        })
    }
}
