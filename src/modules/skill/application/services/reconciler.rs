use serde::Serialize;
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;
use utoipa::ToSchema;

use crate::skill::application::ports::{SkillStore, SkillStoreError};
use crate::skill::domain::{SkillCategory, SkillTree};

/// ========================= Plan =========================
///
/// Writes needed to make storage match the admin's tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncPlan {
    /// Stored names, verbatim, in snapshot order.
    pub deletes: Vec<String>,
    /// Non-empty tree categories in insertion order.
    pub upserts: Vec<SkillCategory>,
    /// Tree categories without items. Neither written nor deleted.
    pub skipped_empty: Vec<String>,
}

/// Diffs the tree against the stored snapshot. Names are compared
/// case-insensitively; tree keys are already lower-case. A stored row whose
/// name is not in key form is deleted before its key is upserted; the upsert
/// conflicts on the exact name only.
pub fn plan(tree: &SkillTree, snapshot: &[SkillCategory]) -> SyncPlan {
    let mut plan = SyncPlan::default();

    let mut seen = HashSet::new();
    for stored in snapshot {
        let replaced = match tree.get(&stored.category) {
            None => true,
            Some(items) => !items.is_empty() && !is_key_form(&stored.category),
        };
        if replaced && seen.insert(stored.category.as_str()) {
            plan.deletes.push(stored.category.clone());
        }
    }

    for (category, items) in tree.categories() {
        if items.is_empty() {
            plan.skipped_empty.push(category.to_string());
        } else {
            plan.upserts
                .push(SkillCategory::new(category, items.to_vec()));
        }
    }

    plan
}

fn is_key_form(name: &str) -> bool {
    name == name.trim().to_lowercase()
}

/// ========================= Report =========================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SyncOperation {
    Delete,
    Upsert,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct CategoryFailure {
    pub category: String,
    pub operation: SyncOperation,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct ReconcileReport {
    pub deleted: Vec<String>,
    pub upserted: Vec<String>,
    pub skipped: Vec<String>,
    pub failed: Vec<CategoryFailure>,
}

impl ReconcileReport {
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReconcileError {
    #[error("could not read stored skills: {0}")]
    Snapshot(SkillStoreError),
}

/// ========================= Reconciler =========================
///
/// Re-reads the stored rows, then deletes and upserts one category at a time.
/// Not transactional: a failed write is recorded and the rest still run.
pub struct SkillReconciler {
    store: Arc<dyn SkillStore>,
}

impl fmt::Debug for SkillReconciler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SkillReconciler")
            .field("store", &"<dyn SkillStore>")
            .finish()
    }
}

impl SkillReconciler {
    pub fn new(store: Arc<dyn SkillStore>) -> Self {
        Self { store }
    }

    pub async fn reconcile(&self, tree: &SkillTree) -> Result<ReconcileReport, ReconcileError> {
        // 1. Fresh snapshot; without it nothing is written.
        let snapshot = self
            .store
            .snapshot()
            .await
            .map_err(ReconcileError::Snapshot)?;

        let SyncPlan {
            deletes,
            upserts,
            skipped_empty,
        } = plan(tree, &snapshot);

        let mut report = ReconcileReport {
            skipped: skipped_empty,
            ..Default::default()
        };

        // 2. Deletes, in snapshot order.
        for category in deletes {
            match self.store.delete_category(&category).await {
                Ok(()) => report.deleted.push(category),
                Err(err) => {
                    tracing::warn!("Failed to delete skill category '{}': {}", category, err);
                    report.failed.push(CategoryFailure {
                        category,
                        operation: SyncOperation::Delete,
                        message: err.to_string(),
                    });
                }
            }
        }

        // 3. Upserts, in tree order.
        for category in upserts {
            let name = category.category.clone();
            match self.store.upsert_category(category).await {
                Ok(()) => report.upserted.push(name),
                Err(err) => {
                    tracing::warn!("Failed to save skill category '{}': {}", name, err);
                    report.failed.push(CategoryFailure {
                        category: name,
                        operation: SyncOperation::Upsert,
                        message: err.to_string(),
                    });
                }
            }
        }

        tracing::info!(
            "Skill sync finished: {} deleted, {} upserted, {} skipped, {} failed",
            report.deleted.len(),
            report.upserted.len(),
            report.skipped.len(),
            report.failed.len()
        );

        Ok(report)
    }
}
