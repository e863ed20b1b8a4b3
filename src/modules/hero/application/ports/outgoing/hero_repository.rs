use async_trait::async_trait;
use uuid::Uuid;

use crate::hero::domain::{HeroData, HeroDraft};
use crate::shared::store::StoreError;

/// The hero row is a singleton seeded by migration; it is only ever read
/// and overwritten.
#[async_trait]
pub trait HeroRepository: Send + Sync {
    async fn get(&self) -> Result<Option<HeroData>, StoreError>;

    async fn update(&self, id: Uuid, draft: HeroDraft) -> Result<HeroData, StoreError>;

    /// Cheapest possible round trip, used to keep the database awake.
    async fn probe(&self) -> Result<Option<Uuid>, StoreError>;
}
