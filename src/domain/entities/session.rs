//! User Session entity.
//!
//! Stored in the `session` collection. A session is valid while its
//! `expires_at` lies strictly in the future. A user may hold many sessions.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::record::{EntryId, Record};

/// Represents a login session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Collection id (None until saved)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EntryId>,

    /// User this session belongs to
    pub user_id: Option<EntryId>,

    /// Opaque session token
    pub token: String,

    /// When this session expires
    pub expires_at: DateTime<Utc>,

    /// When the session was created
    pub created_at: DateTime<Utc>,

    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl Session {
    /// Check if the session is valid at the given instant.
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at > now
    }

    /// Check if the session had expired before the given instant.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at < now
    }

    /// Time left before expiry, zero once expired.
    pub fn remaining(&self, now: DateTime<Utc>) -> Duration {
        (self.expires_at - now).max(Duration::zero())
    }
}

/// Fields accepted when building a new session.
///
/// Missing token and expiry are filled in by the session factory.
#[derive(Debug, Clone, Default)]
pub struct CreateSession {
    pub user_id: Option<EntryId>,
    pub token: Option<String>,
    pub expires_at: Option<DateTime<Utc>>,
}

/// Partial update for a session.
#[derive(Debug, Clone, Default)]
pub struct SessionPatch {
    pub user_id: Option<Option<EntryId>>,
    pub token: Option<String>,
    pub expires_at: Option<DateTime<Utc>>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Record for Session {
    type Patch = SessionPatch;

    fn id(&self) -> Option<EntryId> {
        self.id
    }

    fn set_id(&mut self, id: Option<EntryId>) {
        self.id = id;
    }

    fn merge(&mut self, patch: SessionPatch) {
        if let Some(user_id) = patch.user_id {
            self.user_id = user_id;
        }
        if let Some(token) = patch.token {
            self.token = token;
        }
        if let Some(expires_at) = patch.expires_at {
            self.expires_at = expires_at;
        }
        if let Some(created_at) = patch.created_at {
            self.created_at = created_at;
        }
        if let Some(updated_at) = patch.updated_at {
            self.updated_at = updated_at;
        }
    }

    fn to_patch(&self) -> SessionPatch {
        SessionPatch {
            user_id: Some(self.user_id),
            token: Some(self.token.clone()),
            expires_at: Some(self.expires_at),
            created_at: Some(self.created_at),
            updated_at: Some(self.updated_at),
        }
    }
}
