use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use dixm_core::{Entity, MessageId};

/// A customer inquiry as stored in the contact log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub id: MessageId,
    pub name: String,
    pub email: String,
    pub message: String,
    /// Service-assigned at insertion.
    pub timestamp: DateTime<Utc>,
}

impl ContactMessage {
    pub fn from_new(id: MessageId, timestamp: DateTime<Utc>, new: NewContactMessage) -> Self {
        Self {
            id,
            name: new.name,
            email: new.email,
            message: new.message,
            timestamp,
        }
    }
}

impl Entity for ContactMessage {
    type Id = MessageId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// Caller-supplied message fields.
///
/// No format checks happen here: empty strings and malformed emails are
/// accepted as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl NewContactMessage {
    pub fn new(name: impl Into<String>, email: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }
}
