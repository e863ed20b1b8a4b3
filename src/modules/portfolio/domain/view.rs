use serde::{ser::SerializeMap, Serialize, Serializer};
use utoipa::ToSchema;

use crate::blog::domain::BlogPost;
use crate::education::domain::EducationEntry;
use crate::experience::domain::ExperienceEntry;
use crate::hero::domain::HeroData;
use crate::portfolio::domain::ResourceKind;
use crate::project::domain::Project;
use crate::service::domain::Service;
use crate::skill::domain::CategorizedSkill;
use crate::testimonial::domain::Testimonial;

/// Everything the public site renders, gathered in one object.
///
/// A section that could not be loaded is empty: `[]` for lists and `{}` for
/// the hero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioView {
    #[serde(serialize_with = "hero_or_empty")]
    #[schema(value_type = Object)]
    pub hero: Option<HeroData>,
    pub education: Vec<EducationEntry>,
    pub experience: Vec<ExperienceEntry>,
    pub projects: Vec<Project>,
    pub services: Vec<Service>,
    /// Every skill, tagged with its category.
    pub skills: Vec<CategorizedSkill>,
    pub testimonials: Vec<Testimonial>,
    pub blog_posts: Vec<BlogPost>,
}

fn hero_or_empty<S: Serializer>(hero: &Option<HeroData>, serializer: S) -> Result<S::Ok, S::Error> {
    match hero {
        Some(hero) => hero.serialize(serializer),
        None => serializer.serialize_map(Some(0))?.end(),
    }
}

/// A section replaced by its empty fallback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ResourceFailure {
    pub resource: ResourceKind,
    /// `transport`, `rejected` or `malformed`.
    pub kind: String,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PortfolioOutcome {
    pub view: PortfolioView,
    pub failures: Vec<ResourceFailure>,
}
