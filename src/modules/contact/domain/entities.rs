use chrono::{DateTime, Utc};
use email_address::EmailAddress;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::shared::api::{non_empty, FieldError, Normalize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Message {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub is_read: bool,
}

/// What a visitor submits through the contact form.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, ToSchema)]
pub struct MessageDraft {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl Normalize for MessageDraft {
    fn normalize(self) -> Result<Self, FieldError> {
        let email = self.email.trim().to_string();
        if !EmailAddress::is_valid(&email) {
            return Err(FieldError::new("email", "must be a valid email address"));
        }

        Ok(Self {
            name: non_empty("name", self.name)?,
            email,
            subject: non_empty("subject", self.subject)?,
            message: non_empty("message", self.message)?,
        })
    }
}
