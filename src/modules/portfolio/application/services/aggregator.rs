use std::fmt;
use std::sync::Arc;

use crate::portfolio::application::ports::ResourceFetcher;
use crate::portfolio::domain::{PortfolioOutcome, PortfolioView, ResourceFailure, ResourceKind};
use crate::shared::upstream::FetchError;
use crate::skill::domain::flatten;

/// Builds the public portfolio view from eight independent reads.
///
/// All reads run concurrently and are awaited to completion. A read that
/// fails for any reason leaves its section empty and is recorded in
/// [`PortfolioOutcome::failures`]; aggregation itself never fails.
pub struct PortfolioAggregator {
    fetcher: Arc<dyn ResourceFetcher>,
}

impl fmt::Debug for PortfolioAggregator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PortfolioAggregator")
            .field("fetcher", &"<dyn ResourceFetcher>")
            .finish()
    }
}

fn settle<T>(
    kind: ResourceKind,
    result: Result<T, FetchError>,
    failures: &mut Vec<ResourceFailure>,
) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::warn!(
                "Portfolio section '{}' fell back to empty ({}): {}",
                kind.field(),
                err.kind(),
                err
            );
            failures.push(ResourceFailure {
                resource: kind,
                kind: err.kind().to_string(),
                message: err.to_string(),
            });
            None
        }
    }
}

impl PortfolioAggregator {
    pub fn new(fetcher: Arc<dyn ResourceFetcher>) -> Self {
        Self { fetcher }
    }

    pub async fn aggregate(&self) -> PortfolioOutcome {
        let f = &self.fetcher;
        let (hero, education, experience, projects, services, skills, testimonials, blog_posts) = futures::join!(
            f.hero(),
            f.education(),
            f.experience(),
            f.projects(),
            f.services(),
            f.skills(),
            f.testimonials(),
            f.blog_posts(),
        );

        let mut failures = Vec::new();
        let view = PortfolioView {
            hero: settle(ResourceKind::Hero, hero, &mut failures),
            education: settle(ResourceKind::Education, education, &mut failures).unwrap_or_default(),
            experience: settle(ResourceKind::Experience, experience, &mut failures)
                .unwrap_or_default(),
            projects: settle(ResourceKind::Projects, projects, &mut failures).unwrap_or_default(),
            services: settle(ResourceKind::Services, services, &mut failures).unwrap_or_default(),
            skills: settle(ResourceKind::Skills, skills, &mut failures)
                .map(|rows| flatten(&rows))
                .unwrap_or_default(),
            testimonials: settle(ResourceKind::Testimonials, testimonials, &mut failures)
                .unwrap_or_default(),
            blog_posts: settle(ResourceKind::BlogPosts, blog_posts, &mut failures)
                .unwrap_or_default(),
        };

        PortfolioOutcome { view, failures }
    }
}
