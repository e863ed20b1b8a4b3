use serde::Serialize;
use utoipa::ToSchema;

/// Icons the site knows how to render. Content rows store the icon as a plain
/// name; drafts are canonicalized against this set and blank names take the
/// section's fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ToSchema)]
pub enum Icon {
    Target,
    TrendingUp,
    Users,
    Megaphone,
    BarChart3,
    PenTool,
    Search,
    Mail,
    Camera,
    Video,
    Globe,
    Lightbulb,
    Palette,
    Share2,
    MessageCircle,
    Rocket,
    Heart,
    Sparkles,
    Star,
    Zap,
}

impl Icon {
    pub const ALL: [Icon; 20] = [
        Icon::Target,
        Icon::TrendingUp,
        Icon::Users,
        Icon::Megaphone,
        Icon::BarChart3,
        Icon::PenTool,
        Icon::Search,
        Icon::Mail,
        Icon::Camera,
        Icon::Video,
        Icon::Globe,
        Icon::Lightbulb,
        Icon::Palette,
        Icon::Share2,
        Icon::MessageCircle,
        Icon::Rocket,
        Icon::Heart,
        Icon::Sparkles,
        Icon::Star,
        Icon::Zap,
    ];

    /// Fallback for service cards.
    pub const SERVICE_DEFAULT: Icon = Icon::Target;

    /// Fallback for the hero's unique traits.
    pub const TRAIT_DEFAULT: Icon = Icon::Sparkles;

    pub fn name(self) -> &'static str {
        match self {
            Icon::Target => "Target",
            Icon::TrendingUp => "TrendingUp",
            Icon::Users => "Users",
            Icon::Megaphone => "Megaphone",
            Icon::BarChart3 => "BarChart3",
            Icon::PenTool => "PenTool",
            Icon::Search => "Search",
            Icon::Mail => "Mail",
            Icon::Camera => "Camera",
            Icon::Video => "Video",
            Icon::Globe => "Globe",
            Icon::Lightbulb => "Lightbulb",
            Icon::Palette => "Palette",
            Icon::Share2 => "Share2",
            Icon::MessageCircle => "MessageCircle",
            Icon::Rocket => "Rocket",
            Icon::Heart => "Heart",
            Icon::Sparkles => "Sparkles",
            Icon::Star => "Star",
            Icon::Zap => "Zap",
        }
    }

    /// Case-insensitive lookup by name.
    pub fn parse(name: &str) -> Option<Icon> {
        let name = name.trim();
        Icon::ALL
            .into_iter()
            .find(|icon| icon.name().eq_ignore_ascii_case(name))
    }

    /// Known names are rewritten to their canonical spelling; anything else is
    /// kept as typed so the renderer can fall back.
    pub fn canonicalize(name: String) -> String {
        match Icon::parse(&name) {
            Some(icon) => icon.name().to_string(),
            None => name.trim().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_ignores_case_and_whitespace() {
        assert_eq!(Icon::parse(" trendingup "), Some(Icon::TrendingUp));
        assert_eq!(Icon::parse("HEART"), Some(Icon::Heart));
    }

    #[test]
    fn canonicalize_rewrites_known_and_keeps_unknown() {
        assert_eq!(Icon::canonicalize("megaphone".into()), "Megaphone");
        assert_eq!(Icon::canonicalize(" Custom ".into()), "Custom");
    }
}
