pub mod api;
pub mod config;
pub mod health;
pub mod modules;
pub mod shared;
pub use modules::{
    auth, blog, contact, education, experience, hero, portfolio, project, service, skill,
    testimonial,
};

use crate::auth::adapter::outgoing::jwt::JwtTokenVerifier;
use crate::auth::application::ports::outgoing::TokenVerifier;
use crate::blog::adapter::outgoing::BlogRepositoryPostgres;
use crate::blog::application::ports::BlogRepository;
use crate::config::{AppConfig, ContentSource};
use crate::contact::adapter::outgoing::MessageRepositoryPostgres;
use crate::contact::application::ports::MessageRepository;
use crate::education::adapter::outgoing::EducationRepositoryPostgres;
use crate::education::application::ports::EducationRepository;
use crate::experience::adapter::outgoing::ExperienceRepositoryPostgres;
use crate::experience::application::ports::ExperienceRepository;
use crate::hero::adapter::outgoing::HeroRepositoryPostgres;
use crate::hero::application::ports::outgoing::HeroRepository;
use crate::portfolio::adapter::outgoing::{HttpResourceFetcher, StoreResourceFetcher};
use crate::portfolio::application::ports::ResourceFetcher;
use crate::portfolio::application::services::PortfolioAggregator;
use crate::portfolio::application::FailureReporting;
use crate::project::adapter::outgoing::ProjectRepositoryPostgres;
use crate::project::application::ports::ProjectRepository;
use crate::service::adapter::outgoing::ServiceRepositoryPostgres;
use crate::service::application::ports::ServiceRepository;
use crate::shared::maintenance::{maintenance_gate, MaintenanceMode};
use crate::shared::upstream::ApiClient;
use crate::skill::adapter::outgoing::{HttpSkillStore, RepositorySkillStore, SkillRepositoryPostgres};
use crate::skill::application::ports::{SkillCategoryRepository, SkillStore};
use crate::skill::application::services::SkillReconciler;
use crate::testimonial::adapter::outgoing::TestimonialRepositoryPostgres;
use crate::testimonial::application::ports::TestimonialRepository;

use actix_web::{middleware::from_fn, web, App, HttpServer};
use anyhow::Context;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub hero: Arc<dyn HeroRepository>,
    pub education: Arc<EducationRepository>,
    pub experience: Arc<ExperienceRepository>,
    pub projects: Arc<ProjectRepository>,
    pub services: Arc<ServiceRepository>,
    pub testimonials: Arc<TestimonialRepository>,
    pub skills: Arc<dyn SkillCategoryRepository>,
    pub blog: Arc<dyn BlogRepository>,
    pub messages: Arc<dyn MessageRepository>,
    pub aggregator: Arc<PortfolioAggregator>,
    pub reconciler: Arc<SkillReconciler>,
    pub failure_reporting: FailureReporting,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    let config = AppConfig::from_env()?;
    let server_url = config.server_url();
    info!("Environment: {}, binding {}", config.environment, server_url);

    // Database connection
    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(20)
        .min_connections(2)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .context("Failed to connect to database")?;

    if config.run_migrations {
        info!("Running pending migrations");
        Migrator::up(&conn, None)
            .await
            .context("Failed to run migrations")?;
    }

    let db_arc = Arc::new(conn);

    // Repositories
    let hero: Arc<dyn HeroRepository> = Arc::new(HeroRepositoryPostgres::new(Arc::clone(&db_arc)));
    let education: Arc<EducationRepository> =
        Arc::new(EducationRepositoryPostgres::new(Arc::clone(&db_arc)));
    let experience: Arc<ExperienceRepository> =
        Arc::new(ExperienceRepositoryPostgres::new(Arc::clone(&db_arc)));
    let projects: Arc<ProjectRepository> =
        Arc::new(ProjectRepositoryPostgres::new(Arc::clone(&db_arc)));
    let services: Arc<ServiceRepository> =
        Arc::new(ServiceRepositoryPostgres::new(Arc::clone(&db_arc)));
    let testimonials: Arc<TestimonialRepository> =
        Arc::new(TestimonialRepositoryPostgres::new(Arc::clone(&db_arc)));
    let skills: Arc<dyn SkillCategoryRepository> =
        Arc::new(SkillRepositoryPostgres::new(Arc::clone(&db_arc)));
    let blog: Arc<dyn BlogRepository> = Arc::new(BlogRepositoryPostgres::new(Arc::clone(&db_arc)));
    let messages: Arc<dyn MessageRepository> =
        Arc::new(MessageRepositoryPostgres::new(Arc::clone(&db_arc)));

    // Aggregation and skill sync read either this process or another deployment
    let (fetcher, skill_store): (Arc<dyn ResourceFetcher>, Arc<dyn SkillStore>) =
        match &config.content_source {
            ContentSource::InProcess => (
                Arc::new(StoreResourceFetcher {
                    hero: hero.clone(),
                    education: education.clone(),
                    experience: experience.clone(),
                    projects: projects.clone(),
                    services: services.clone(),
                    skills: skills.clone(),
                    testimonials: testimonials.clone(),
                    blog: blog.clone(),
                }),
                Arc::new(RepositorySkillStore::new(skills.clone())),
            ),
            ContentSource::Upstream {
                base_url,
                token,
                timeout,
            } => {
                info!("Content source: {}", base_url);
                let client = ApiClient::new(base_url.clone(), token.clone(), *timeout)
                    .context("Failed to build content source client")?;
                (
                    Arc::new(HttpResourceFetcher::new(client.clone())),
                    Arc::new(HttpSkillStore::new(client)),
                )
            }
        };

    let state = AppState {
        hero,
        education,
        experience,
        projects,
        services,
        testimonials,
        skills,
        blog,
        messages,
        aggregator: Arc::new(PortfolioAggregator::new(fetcher)),
        reconciler: Arc::new(SkillReconciler::new(skill_store)),
        failure_reporting: config.failure_reporting,
    };

    let token_verifier: Arc<dyn TokenVerifier + Send + Sync> =
        Arc::new(JwtTokenVerifier::new(config.jwt.clone()));
    let maintenance = MaintenanceMode {
        enabled: config.maintenance_mode,
    };
    if maintenance.enabled {
        tracing::warn!("Maintenance mode is ON");
    }

    // Clone db_arc for use in HttpServer closure
    let db_for_server = Arc::clone(&db_arc);

    HttpServer::new(move || {
        App::new()
            .wrap(from_fn(maintenance_gate))
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_verifier)))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(web::Data::new(maintenance))
            .app_data(shared::api::custom_json_config())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", api::openapi::ApiDoc::openapi()),
            )
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await?;

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    cfg.service(crate::health::ping);
    cfg.service(crate::shared::maintenance::maintenance_status);
    // Aggregation
    cfg.service(crate::portfolio::adapter::incoming::web::routes::get_portfolio_handler);
    cfg.service(crate::portfolio::adapter::incoming::web::routes::list_icons_handler);
    // Hero
    cfg.service(crate::hero::adapter::incoming::web::routes::get_hero_handler);
    cfg.service(crate::hero::adapter::incoming::web::routes::update_hero_handler);
    // Education
    cfg.service(crate::education::adapter::incoming::web::routes::list_education_handler);
    cfg.service(crate::education::adapter::incoming::web::routes::create_education_handler);
    cfg.service(crate::education::adapter::incoming::web::routes::update_education_handler);
    cfg.service(crate::education::adapter::incoming::web::routes::delete_education_handler);
    // Experience
    cfg.service(crate::experience::adapter::incoming::web::routes::list_experience_handler);
    cfg.service(crate::experience::adapter::incoming::web::routes::create_experience_handler);
    cfg.service(crate::experience::adapter::incoming::web::routes::update_experience_handler);
    cfg.service(crate::experience::adapter::incoming::web::routes::delete_experience_handler);
    // Project
    cfg.service(crate::project::adapter::incoming::web::routes::list_projects_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::create_project_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::update_project_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::delete_project_handler);
    // Service
    cfg.service(crate::service::adapter::incoming::web::routes::list_services_handler);
    cfg.service(crate::service::adapter::incoming::web::routes::create_service_handler);
    cfg.service(crate::service::adapter::incoming::web::routes::update_service_handler);
    cfg.service(crate::service::adapter::incoming::web::routes::delete_service_handler);
    // Testimonial
    cfg.service(crate::testimonial::adapter::incoming::web::routes::list_testimonials_handler);
    cfg.service(crate::testimonial::adapter::incoming::web::routes::create_testimonial_handler);
    cfg.service(crate::testimonial::adapter::incoming::web::routes::update_testimonial_handler);
    cfg.service(crate::testimonial::adapter::incoming::web::routes::delete_testimonial_handler);
    // Skills (grouped and sync before the list so the literal paths win)
    cfg.service(crate::skill::adapter::incoming::web::routes::grouped_skills_handler);
    cfg.service(crate::skill::adapter::incoming::web::routes::sync_skills_handler);
    cfg.service(crate::skill::adapter::incoming::web::routes::list_skills_handler);
    cfg.service(crate::skill::adapter::incoming::web::routes::create_skill_category_handler);
    cfg.service(crate::skill::adapter::incoming::web::routes::upsert_skill_category_handler);
    cfg.service(crate::skill::adapter::incoming::web::routes::delete_skill_category_handler);
    // Blog (writes before the slug lookup)
    cfg.service(crate::blog::adapter::incoming::web::routes::list_blog_handler);
    cfg.service(crate::blog::adapter::incoming::web::routes::create_blog_handler);
    cfg.service(crate::blog::adapter::incoming::web::routes::update_blog_handler);
    cfg.service(crate::blog::adapter::incoming::web::routes::delete_blog_handler);
    cfg.service(crate::blog::adapter::incoming::web::routes::get_blog_by_slug_handler);
    // Contact
    cfg.service(crate::contact::adapter::incoming::web::routes::list_messages_handler);
    cfg.service(crate::contact::adapter::incoming::web::routes::create_message_handler);
    cfg.service(crate::contact::adapter::incoming::web::routes::mark_message_read_handler);
    cfg.service(crate::contact::adapter::incoming::web::routes::delete_message_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
    }
}
