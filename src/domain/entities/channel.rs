//! Channel entity.
//!
//! Stored in the `channel` collection. A channel keeps the ids of the
//! messages sent to it, in arrival order, and the ids of its members.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::record::{EntryId, Record};

/// Represents a channel in the chat system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Channel {
    /// Collection id (None until saved)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EntryId>,

    /// Channel name (required to create)
    pub name: String,

    /// Owning user id (required to create)
    pub owner_user_id: Option<EntryId>,

    /// Ids of messages sent to the channel, oldest first
    #[serde(default)]
    pub message_ids: Vec<EntryId>,

    /// Member user ids, seeded with the owner
    #[serde(default)]
    pub user_ids: Vec<EntryId>,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl Channel {
    /// Check if a user is a member of this channel.
    pub fn has_member(&self, user_id: EntryId) -> bool {
        self.user_ids.contains(&user_id)
    }

    /// Check if a user owns this channel.
    pub fn is_owned_by(&self, user_id: EntryId) -> bool {
        self.owner_user_id == Some(user_id)
    }
}

impl Default for Channel {
    fn default() -> Self {
        let now = Utc::now();
        Self {
            id: None,
            name: String::new(),
            owner_user_id: None,
            message_ids: Vec::new(),
            user_ids: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// Partial update for a channel.
#[derive(Debug, Clone, Default)]
pub struct ChannelPatch {
    pub name: Option<String>,
    pub owner_user_id: Option<Option<EntryId>>,
    pub message_ids: Option<Vec<EntryId>>,
    pub user_ids: Option<Vec<EntryId>>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Record for Channel {
    type Patch = ChannelPatch;

    fn id(&self) -> Option<EntryId> {
        self.id
    }

    fn set_id(&mut self, id: Option<EntryId>) {
        self.id = id;
    }

    fn merge(&mut self, patch: ChannelPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(owner_user_id) = patch.owner_user_id {
            self.owner_user_id = owner_user_id;
        }
        if let Some(message_ids) = patch.message_ids {
            self.message_ids = message_ids;
        }
        if let Some(user_ids) = patch.user_ids {
            self.user_ids = user_ids;
        }
        if let Some(created_at) = patch.created_at {
            self.created_at = created_at;
        }
        if let Some(updated_at) = patch.updated_at {
            self.updated_at = updated_at;
        }
    }

    fn to_patch(&self) -> ChannelPatch {
        ChannelPatch {
            name: Some(self.name.clone()),
            owner_user_id: Some(self.owner_user_id),
            message_ids: Some(self.message_ids.clone()),
            user_ids: Some(self.user_ids.clone()),
            created_at: Some(self.created_at),
            updated_at: Some(self.updated_at),
        }
    }
}
