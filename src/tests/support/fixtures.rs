use chrono::{TimeZone, Utc};
use indexmap::IndexMap;
use uuid::Uuid;

use crate::blog::domain::BlogPost;
use crate::contact::domain::Message;
use crate::education::domain::EducationEntry;
use crate::experience::domain::ExperienceEntry;
use crate::hero::domain::{ApproachStep, HeroData, SocialLinks, UniqueTrait};
use crate::project::domain::Project;
use crate::service::domain::Service;
use crate::testimonial::domain::Testimonial;

pub fn hero() -> HeroData {
    HeroData {
        id: Uuid::new_v4(),
        greeting: "Hello, I'm".to_string(),
        name: "Kyle Prasetyo".to_string(),
        title: "Digital Marketer".to_string(),
        tagline: "Growth through stories".to_string(),
        description: "I help brands grow on social.".to_string(),
        profile_image: "https://cdn.example.com/kyle.png".to_string(),
        phone: None,
        email: Some("kyle@example.com".to_string()),
        address: Some("Jakarta".to_string()),
        resume_url: None,
        social_links: SocialLinks {
            instagram: "https://instagram.com/kyle".to_string(),
            ..Default::default()
        },
        skills: vec!["Meta Ads".to_string(), "SEO".to_string()],
        my_story: None,
        marketing_philosophy: None,
        marketing_approach: vec![ApproachStep {
            step: "01".to_string(),
            title: "Research".to_string(),
            desc: "Know the audience.".to_string(),
        }],
        unique_traits: vec![UniqueTrait {
            icon: "Target".to_string(),
            title: "Focused".to_string(),
            desc: "One goal at a time.".to_string(),
        }],
        updated_at: Utc::now(),
    }
}

pub fn education() -> EducationEntry {
    EducationEntry {
        id: Uuid::new_v4(),
        school: "Universitas Indonesia".to_string(),
        degree: "B.A. Communication".to_string(),
        start_year: "2014".to_string(),
        end_year: "2018".to_string(),
        honors: vec!["Cum Laude".to_string()],
    }
}

pub fn experience() -> ExperienceEntry {
    ExperienceEntry {
        id: Uuid::new_v4(),
        company: "Kopi Kenangan".to_string(),
        role: "Digital Marketing Lead".to_string(),
        start_date: "2021-03-01".to_string(),
        end_date: None,
        currently_working: true,
        description: "Paid social and content.".to_string(),
        highlights: vec![],
        platform_tools: vec!["Meta Ads".to_string()],
    }
}

pub fn project() -> Project {
    let mut metrics = IndexMap::new();
    metrics.insert("reach".to_string(), "2M".to_string());
    Project {
        id: Uuid::new_v4(),
        title: "Ramadan Campaign".to_string(),
        category: "Social".to_string(),
        description: "Seasonal campaign".to_string(),
        image: "https://cdn.example.com/ramadan.png".to_string(),
        link: None,
        details: "Ran for four weeks.".to_string(),
        metrics,
        deliverables: vec!["12 reels".to_string()],
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

pub fn service() -> Service {
    Service {
        id: Uuid::new_v4(),
        title: "Social Media Management".to_string(),
        description: "Monthly content calendar".to_string(),
        icon: "Megaphone".to_string(),
        deliverables: vec![],
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

pub fn testimonial() -> Testimonial {
    Testimonial {
        id: Uuid::new_v4(),
        name: "Dewi".to_string(),
        role: "Founder".to_string(),
        company: "Batik Co".to_string(),
        content: "Sales doubled.".to_string(),
        image: String::new(),
        created_at: Utc::now(),
    }
}

pub fn blog_post(slug: &str) -> BlogPost {
    BlogPost {
        id: Uuid::new_v4(),
        title: "Growing on TikTok".to_string(),
        slug: slug.to_string(),
        excerpt: "Short-form first.".to_string(),
        category: "Social".to_string(),
        cover_image: String::new(),
        published: true,
        content: "<p>Post often.</p>".to_string(),
        published_at: Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).single(),
    }
}

pub fn message(is_read: bool) -> Message {
    Message {
        id: Uuid::new_v4(),
        name: "Rina".to_string(),
        email: "rina@example.com".to_string(),
        subject: "Collaboration".to_string(),
        message: "Let's talk.".to_string(),
        created_at: Utc::now(),
        is_read,
    }
}
