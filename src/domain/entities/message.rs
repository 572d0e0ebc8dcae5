//! Message entity.
//!
//! Stored in the `message` collection. Comments are messages too: a comment
//! carries the id of its parent in `parent_id`, and the parent lists its
//! direct children in `message_ids`. Each comment is an independent row.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::record::{EntryId, Record};

/// Represents a message or a comment on a message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Collection id (None until saved)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EntryId>,

    /// Author user id
    pub user_id: Option<EntryId>,

    /// Message content
    pub content: String,

    /// User ids that liked this message, no duplicates
    #[serde(default)]
    pub likes: Vec<EntryId>,

    /// Ids of direct child comments, oldest first
    #[serde(default)]
    pub message_ids: Vec<EntryId>,

    /// Parent message id (None for root messages)
    #[serde(default)]
    pub parent_id: Option<EntryId>,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl Message {
    /// Check if this message is a comment on another message.
    pub fn is_comment(&self) -> bool {
        self.parent_id.is_some()
    }

    /// Check if a user has liked this message.
    pub fn is_liked_by(&self, user_id: EntryId) -> bool {
        self.likes.contains(&user_id)
    }

    /// Number of likes.
    pub fn like_count(&self) -> usize {
        self.likes.len()
    }
}

impl Default for Message {
    fn default() -> Self {
        let now = Utc::now();
        Self {
            id: None,
            user_id: None,
            content: String::new(),
            likes: Vec::new(),
            message_ids: Vec::new(),
            parent_id: None,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Partial update for a message.
#[derive(Debug, Clone, Default)]
pub struct MessagePatch {
    pub user_id: Option<Option<EntryId>>,
    pub content: Option<String>,
    pub likes: Option<Vec<EntryId>>,
    pub message_ids: Option<Vec<EntryId>>,
    pub parent_id: Option<Option<EntryId>>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Record for Message {
    type Patch = MessagePatch;

    fn id(&self) -> Option<EntryId> {
        self.id
    }

    fn set_id(&mut self, id: Option<EntryId>) {
        self.id = id;
    }

    fn merge(&mut self, patch: MessagePatch) {
        if let Some(user_id) = patch.user_id {
            self.user_id = user_id;
        }
        if let Some(content) = patch.content {
            self.content = content;
        }
        if let Some(likes) = patch.likes {
            self.likes = likes;
        }
        if let Some(message_ids) = patch.message_ids {
            self.message_ids = message_ids;
        }
        if let Some(parent_id) = patch.parent_id {
            self.parent_id = parent_id;
        }
        if let Some(created_at) = patch.created_at {
            self.created_at = created_at;
        }
        if let Some(updated_at) = patch.updated_at {
            self.updated_at = updated_at;
        }
    }

    fn to_patch(&self) -> MessagePatch {
        MessagePatch {
            user_id: Some(self.user_id),
            content: Some(self.content.clone()),
            likes: Some(self.likes.clone()),
            message_ids: Some(self.message_ids.clone()),
            parent_id: Some(self.parent_id),
            created_at: Some(self.created_at),
            updated_at: Some(self.updated_at),
        }
    }
}
