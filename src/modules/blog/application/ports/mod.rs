use async_trait::async_trait;

use crate::blog::domain::{BlogDraft, BlogPost};
use crate::shared::store::{ResourceRepository, StoreError};

/// Blog posts are plain resources plus a public lookup by slug.
#[async_trait]
pub trait BlogRepository: ResourceRepository<Record = BlogPost, Draft = BlogDraft> {
    async fn find_by_slug(&self, slug: &str) -> Result<Option<BlogPost>, StoreError>;
}
