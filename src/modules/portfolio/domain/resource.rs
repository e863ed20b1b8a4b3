use serde::Serialize;
use utoipa::ToSchema;

/// The sections gathered into one portfolio view, in fetch order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum ResourceKind {
    Hero,
    Education,
    Experience,
    Projects,
    Services,
    Skills,
    Testimonials,
    BlogPosts,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 8] = [
        ResourceKind::Hero,
        ResourceKind::Education,
        ResourceKind::Experience,
        ResourceKind::Projects,
        ResourceKind::Services,
        ResourceKind::Skills,
        ResourceKind::Testimonials,
        ResourceKind::BlogPosts,
    ];

    /// List endpoint serving this section.
    pub fn path(self) -> &'static str {
        match self {
            ResourceKind::Hero => "/api/hero",
            ResourceKind::Education => "/api/education",
            ResourceKind::Experience => "/api/experience",
            ResourceKind::Projects => "/api/project",
            ResourceKind::Services => "/api/service",
            ResourceKind::Skills => "/api/skilltool",
            ResourceKind::Testimonials => "/api/testimonial",
            ResourceKind::BlogPosts => "/api/blog",
        }
    }

    /// Field name in the aggregated view.
    pub fn field(self) -> &'static str {
        match self {
            ResourceKind::Hero => "hero",
            ResourceKind::Education => "education",
            ResourceKind::Experience => "experience",
            ResourceKind::Projects => "projects",
            ResourceKind::Services => "services",
            ResourceKind::Skills => "skills",
            ResourceKind::Testimonials => "testimonials",
            ResourceKind::BlogPosts => "blogPosts",
        }
    }
}
