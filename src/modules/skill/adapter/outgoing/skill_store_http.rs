use async_trait::async_trait;
use serde::Serialize;

use crate::shared::upstream::{ApiClient, FetchError};
use crate::skill::application::ports::{SkillStore, SkillStoreError};
use crate::skill::domain::SkillCategory;

#[derive(Serialize)]
struct DeleteCategoryBody<'a> {
    category: &'a str,
}

/// Skill store that talks to the `/api/skilltool` endpoints of another
/// deployment. Writes need an admin token on the client.
#[derive(Debug, Clone)]
pub struct HttpSkillStore {
    client: ApiClient,
}

impl HttpSkillStore {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SkillStore for HttpSkillStore {
    async fn snapshot(&self) -> Result<Vec<SkillCategory>, SkillStoreError> {
        Ok(self.client.get_data("/api/skilltool").await?)
    }

    async fn delete_category(&self, category: &str) -> Result<(), SkillStoreError> {
        match self
            .client
            .post_json("/api/skilltool/delete", &DeleteCategoryBody { category })
            .await
        {
            Ok(()) | Err(FetchError::Rejected { status: 404, .. }) => Ok(()),
            Err(err) => Err(err.into()),
        }
    }

    async fn upsert_category(&self, category: SkillCategory) -> Result<(), SkillStoreError> {
        self.client
            .post_json("/api/skilltool/update", &category)
            .await?;
        Ok(())
    }
}
