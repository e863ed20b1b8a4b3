use crate::api::schemas::{
    AckResponse, ErrorDetail, ErrorResponse, PortfolioResponse, SuccessResponse,
};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::blog::domain::BlogPost;
use crate::contact::adapter::incoming::web::routes::MarkReadRequest;
use crate::contact::domain::{Message, MessageDraft};
use crate::education::domain::EducationEntry;
use crate::experience::domain::ExperienceEntry;
use crate::hero::domain::{ApproachStep, HeroData, SocialLinks, UniqueTrait};
use crate::portfolio::domain::{PortfolioView, ResourceFailure, ResourceKind};
use crate::project::domain::Project;
use crate::service::domain::Service;
use crate::shared::api::crud::DeleteRequest;
use crate::skill::adapter::incoming::web::routes::{DeleteCategoryRequest, SyncSkillsRequest};
use crate::skill::application::services::{CategoryFailure, ReconcileReport, SyncOperation};
use crate::skill::domain::{
    CategorizedSkill, GroupedSkills, SkillCategory, SkillCategoryRow, SkillItem,
};
use crate::testimonial::domain::Testimonial;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio CMS API",
        version = "1.0.0",
        description = "Public portfolio content and its admin endpoints",
        contact(
            name = "API Support",
            email = "support@example.com"
        )
    ),
    paths(
        // Aggregation
        crate::portfolio::adapter::incoming::web::routes::get_portfolio_handler,
        crate::portfolio::adapter::incoming::web::routes::list_icons_handler,

        // Content
        crate::hero::adapter::incoming::web::routes::get_hero_handler,
        crate::education::adapter::incoming::web::routes::list_education_handler,
        crate::experience::adapter::incoming::web::routes::list_experience_handler,
        crate::project::adapter::incoming::web::routes::list_projects_handler,
        crate::service::adapter::incoming::web::routes::list_services_handler,
        crate::testimonial::adapter::incoming::web::routes::list_testimonials_handler,
        crate::blog::adapter::incoming::web::routes::list_blog_handler,
        crate::blog::adapter::incoming::web::routes::get_blog_by_slug_handler,

        // Skills
        crate::skill::adapter::incoming::web::routes::list_skills_handler,
        crate::skill::adapter::incoming::web::routes::grouped_skills_handler,
        crate::skill::adapter::incoming::web::routes::create_skill_category_handler,
        crate::skill::adapter::incoming::web::routes::upsert_skill_category_handler,
        crate::skill::adapter::incoming::web::routes::delete_skill_category_handler,
        crate::skill::adapter::incoming::web::routes::sync_skills_handler,

        // Contact
        crate::contact::adapter::incoming::web::routes::list_messages_handler,
        crate::contact::adapter::incoming::web::routes::create_message_handler,
        crate::contact::adapter::incoming::web::routes::mark_message_read_handler,
        crate::contact::adapter::incoming::web::routes::delete_message_handler,
    ),
    components(
        schemas(
            // Response wrappers
            SuccessResponse<HeroData>,
            AckResponse,
            PortfolioResponse,
            ErrorResponse,
            ErrorDetail,

            // Aggregation
            PortfolioView,
            ResourceFailure,
            ResourceKind,

            // Content
            HeroData,
            SocialLinks,
            ApproachStep,
            UniqueTrait,
            EducationEntry,
            ExperienceEntry,
            Project,
            Service,
            Testimonial,
            BlogPost,

            // Skills
            SkillItem,
            SkillCategory,
            SkillCategoryRow,
            CategorizedSkill,
            GroupedSkills,
            DeleteCategoryRequest,
            SyncSkillsRequest,
            ReconcileReport,
            CategoryFailure,
            SyncOperation,

            // Contact
            Message,
            MessageDraft,
            MarkReadRequest,
            DeleteRequest
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "portfolio", description = "Aggregated public view"),
        (name = "content", description = "Hero and list sections"),
        (name = "skills", description = "Skill categories and tree sync"),
        (name = "contact", description = "Contact form and inbox"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Admin token from the identity provider"))
                        .build(),
                ),
            )
        }
    }
}
