pub mod reconciler;

pub use reconciler::{
    plan, CategoryFailure, ReconcileError, ReconcileReport, SkillReconciler, SyncOperation,
    SyncPlan,
};
