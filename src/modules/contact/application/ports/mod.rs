use async_trait::async_trait;
use uuid::Uuid;

use crate::contact::domain::{Message, MessageDraft};
use crate::shared::store::StoreError;

/// Inbox of the public contact form. Messages are never edited, only
/// flagged read or unread and eventually deleted.
#[async_trait]
pub trait MessageRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Message>, StoreError>;

    async fn create(&self, draft: MessageDraft) -> Result<Message, StoreError>;

    async fn set_read(&self, id: Uuid, is_read: bool) -> Result<Message, StoreError>;

    async fn delete(&self, id: Uuid) -> Result<(), StoreError>;
}
