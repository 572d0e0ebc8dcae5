//! User entity.
//!
//! Stored in the `user` collection. Users own no relationships; sessions
//! and messages point at them by id.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::record::{EntryId, Record};

/// Represents a user account in the chat system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Collection id (None until saved)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EntryId>,

    /// Display name
    pub name: String,

    /// Email address
    pub email: String,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl Default for User {
    fn default() -> Self {
        let now = Utc::now();
        Self {
            id: None,
            name: String::new(),
            email: String::new(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// Partial update for a user.
#[derive(Debug, Clone, Default)]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Record for User {
    type Patch = UserPatch;

    fn id(&self) -> Option<EntryId> {
        self.id
    }

    fn set_id(&mut self, id: Option<EntryId>) {
        self.id = id;
    }

    fn merge(&mut self, patch: UserPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(created_at) = patch.created_at {
            self.created_at = created_at;
        }
        if let Some(updated_at) = patch.updated_at {
            self.updated_at = updated_at;
        }
    }

    fn to_patch(&self) -> UserPatch {
        UserPatch {
            name: Some(self.name.clone()),
            email: Some(self.email.clone()),
            created_at: Some(self.created_at),
            updated_at: Some(self.updated_at),
        }
    }
}
