use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::project::adapter::outgoing::sea_orm_entity::{self, ActiveModel, Column, Entity};
use crate::project::domain::{Project, ProjectDraft};
use crate::shared::store::{from_json, to_json, ResourceRepository, StoreError};

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct ProjectRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProjectRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ResourceRepository for ProjectRepositoryPostgres {
    type Record = Project;
    type Draft = ProjectDraft;

    async fn list(&self) -> Result<Vec<Project>, StoreError> {
        Entity::find()
            .order_by_desc(Column::CreatedAt)
            .all(&*self.db)
            .await?
            .into_iter()
            .map(model_to_project)
            .collect()
    }

    async fn create(&self, draft: ProjectDraft) -> Result<Project, StoreError> {
        let now = Utc::now().fixed_offset();

        let mut model = draft_to_active(draft)?;
        model.id = Set(Uuid::new_v4());
        model.created_at = Set(now);
        model.updated_at = Set(now);

        let created = model.insert(&*self.db).await?;
        model_to_project(created)
    }

    async fn update(&self, id: Uuid, draft: ProjectDraft) -> Result<Project, StoreError> {
        let mut model = draft_to_active(draft)?;
        model.updated_at = Set(Utc::now().fixed_offset());

        let updated = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(id))
            .exec_with_returning(&*self.db)
            .await?
            .into_iter()
            .next()
            .ok_or(StoreError::NotFound)?;

        model_to_project(updated)
    }

    async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        let result = Entity::delete_by_id(id).exec(&*self.db).await?;
        if result.rows_affected == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn draft_to_active(draft: ProjectDraft) -> Result<ActiveModel, StoreError> {
    Ok(ActiveModel {
        title: Set(draft.title),
        category: Set(draft.category),
        description: Set(draft.description),
        image: Set(draft.image),
        link: Set(draft.link),
        details: Set(draft.details),
        metrics: Set(to_json(&draft.metrics.unwrap_or_default())?),
        deliverables: Set(to_json(&draft.deliverables)?),
        ..Default::default()
    })
}

fn model_to_project(model: sea_orm_entity::Model) -> Result<Project, StoreError> {
    // Rows created before metrics were mandatory carry JSON null.
    let metrics = if model.metrics.is_null() {
        Default::default()
    } else {
        from_json(model.metrics)?
    };

    Ok(Project {
        id: model.id,
        title: model.title,
        category: model.category,
        description: model.description,
        image: model.image,
        link: model.link,
        details: model.details,
        metrics,
        deliverables: from_json(model.deliverables)?,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    })
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase};

    fn model(id: Uuid, metrics: serde_json::Value) -> sea_orm_entity::Model {
        let now = Utc::now().fixed_offset();
        sea_orm_entity::Model {
            id,
            title: "Ramadan Campaign".to_string(),
            category: "Paid Social".to_string(),
            description: "Seasonal push".to_string(),
            image: "https://cdn.example.com/ramadan.png".to_string(),
            link: None,
            details: "<p>Full story</p>".to_string(),
            metrics,
            deliverables: serde_json::json!(["Media plan"]),
            created_at: now,
            updated_at: now,
        }
    }

    fn draft() -> ProjectDraft {
        let mut metrics = IndexMap::new();
        metrics.insert("ROAS".to_string(), "4.2x".to_string());

        ProjectDraft {
            title: "Ramadan Campaign".to_string(),
            category: "Paid Social".to_string(),
            description: "Seasonal push".to_string(),
            image: "https://cdn.example.com/ramadan.png".to_string(),
            link: None,
            details: "<p>Full story</p>".to_string(),
            metrics: Some(metrics),
            deliverables: vec!["Media plan".to_string()],
        }
    }

    #[tokio::test]
    async fn create_returns_row_with_metrics_in_order() {
        let id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model(
                id,
                serde_json::json!({ "ROAS": "4.2x", "CTR": "3.1%" }),
            )]])
            .into_connection();

        let repo = ProjectRepositoryPostgres::new(Arc::new(db));
        let created = repo.create(draft()).await.unwrap();

        assert_eq!(created.id, id);
        let keys: Vec<_> = created.metrics.keys().cloned().collect();
        assert_eq!(keys, vec!["ROAS", "CTR"]);
    }

    #[test]
    fn written_metrics_keep_admin_order() {
        let mut draft = draft();
        let mut metrics = IndexMap::new();
        metrics.insert("ROAS".to_string(), "4.2x".to_string());
        metrics.insert("CTR".to_string(), "3.1%".to_string());
        metrics.insert("CPA".to_string(), "-38%".to_string());
        draft.metrics = Some(metrics);

        let active = draft_to_active(draft).unwrap();
        let column = active.metrics.into_value().unwrap();
        let sea_orm::Value::Json(Some(json)) = column else {
            panic!("metrics should bind as json, got {column:?}");
        };

        let keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["ROAS", "CTR", "CPA"]);
    }

    #[tokio::test]
    async fn null_metrics_column_reads_as_empty_map() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model(Uuid::new_v4(), serde_json::Value::Null)]])
            .into_connection();

        let repo = ProjectRepositoryPostgres::new(Arc::new(db));
        let rows = repo.list().await.unwrap();

        assert!(rows[0].metrics.is_empty());
    }

    #[tokio::test]
    async fn update_failure_is_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Custom("connection timeout".to_string())])
            .into_connection();

        let repo = ProjectRepositoryPostgres::new(Arc::new(db));
        let result = repo.update(Uuid::new_v4(), draft()).await;

        assert!(matches!(result, Err(StoreError::Database(_))));
    }
}
