//! Session model.
//!
//! Sessions use a sliding expiry: lookups made through a live session push
//! its `expires_at` forward by the configured TTL before scanning.

use std::ops::{Deref, DerefMut};
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};

use super::Model;
use crate::application::dto::LoginRequest;
use crate::domain::{CreateSession, EntryId, Session, SessionPatch, User};
use crate::infrastructure::Collection;
use crate::shared::error::AppError;
use crate::shared::token::generate_token;
use crate::shared::validation::validate;

/// Live session bound to the session and user collections
#[derive(Debug, Clone)]
pub struct SessionModel {
    record: Session,
    sessions: Arc<Collection<Session>>,
    users: Arc<Collection<User>>,
    ttl: Duration,
}

impl SessionModel {
    /// Build a new unsaved session.
    ///
    /// A missing token is generated and a missing expiry is set to now + TTL.
    pub fn new(
        data: CreateSession,
        sessions: Arc<Collection<Session>>,
        users: Arc<Collection<User>>,
        ttl: Duration,
    ) -> Self {
        let now = Utc::now();
        let record = Session {
            id: None,
            user_id: data.user_id,
            token: data.token.unwrap_or_else(generate_token),
            expires_at: data.expires_at.unwrap_or_else(|| expiry_after(now, ttl)),
            created_at: now,
            updated_at: now,
        };
        Self::bind(record, sessions, users, ttl)
    }

    /// Wrap an existing session record as is
    pub fn bind(
        record: Session,
        sessions: Arc<Collection<Session>>,
        users: Arc<Collection<User>>,
        ttl: Duration,
    ) -> Self {
        Self {
            record,
            sessions,
            users,
            ttl,
        }
    }

    /// Configured time-to-live
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Push the expiry of this session to now + TTL and persist it
    pub fn update_expired(&mut self) {
        let now = Utc::now();
        let expires_at = expiry_after(now, self.ttl);
        self.record.expires_at = expires_at;
        self.record.updated_at = now;

        if let Some(id) = self.record.id {
            self.sessions.update(
                id,
                SessionPatch {
                    expires_at: Some(expires_at),
                    updated_at: Some(now),
                    ..Default::default()
                },
            );
        }
    }

    /// Check if the session has not expired yet
    pub fn is_valid(&self) -> bool {
        self.is_valid_at(Utc::now())
    }

    /// Check validity against a caller-supplied instant
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        self.record.is_valid_at(now)
    }

    /// Find the session holding `token`, refreshing this session first
    pub fn by_token(&mut self, token: &str) -> Option<Session> {
        self.update_expired();
        self.sessions.find(|session| session.token == token)
    }

    /// Delete every session that expired before now.
    ///
    /// Returns the removed ids.
    pub fn remove_expired(&self) -> Vec<EntryId> {
        Self::remove_expired_in(&self.sessions)
    }

    /// Delete every session in `sessions` that expired before now.
    ///
    /// Returns the removed ids.
    pub fn remove_expired_in(sessions: &Collection<Session>) -> Vec<EntryId> {
        let now = Utc::now();
        let removed = sessions.remove_where(|session| session.is_expired_at(now));
        if !removed.is_empty() {
            tracing::info!(count = removed.len(), "Expired sessions removed");
        }
        removed
    }

    /// Most recently created session of `user_id`, refreshing this session first
    pub fn by_user_id(&mut self, user_id: EntryId) -> Option<Session> {
        self.update_expired();
        self.sessions
            .filter(|session| session.user_id == Some(user_id))
            .into_iter()
            .max_by_key(|session| (session.created_at, session.id))
    }

    /// Open a new session for `user_id`.
    ///
    /// Reuses this session's token when it has one. Other sessions of the
    /// user stay untouched.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` when `user_id` is 0.
    pub fn login(&self, user_id: EntryId) -> Result<SessionModel, AppError> {
        validate(&LoginRequest { user_id })?;

        let now = Utc::now();
        let token = if self.record.token.is_empty() {
            generate_token()
        } else {
            self.record.token.clone()
        };

        let stored = self.sessions.add(Session {
            id: None,
            user_id: Some(user_id),
            token,
            expires_at: expiry_after(now, self.ttl),
            created_at: now,
            updated_at: now,
        });

        tracing::info!(session_id = ?stored.id, user_id, "Session opened");
        Ok(Self::bind(
            stored,
            Arc::clone(&self.sessions),
            Arc::clone(&self.users),
            self.ttl,
        ))
    }

    /// Close this session.
    ///
    /// Clears the id on the working copy and returns whether a row was removed.
    pub fn logout(&mut self) -> bool {
        let Some(id) = self.record.id.take() else {
            return false;
        };
        let removed = self.sessions.remove(id);
        tracing::info!(session_id = id, user_id = ?self.record.user_id, removed, "Session closed");
        removed
    }

    /// User this session belongs to
    pub fn user(&self) -> Option<User> {
        self.record.user_id.and_then(|id| self.users.get_by_id(id))
    }

    /// Unwrap the working copy
    pub fn into_record(self) -> Session {
        self.record
    }
}

/// `now + ttl`, saturating at the latest representable instant
fn expiry_after(now: DateTime<Utc>, ttl: Duration) -> DateTime<Utc> {
    now.checked_add_signed(ttl).unwrap_or(DateTime::<Utc>::MAX_UTC)
}

impl Model for SessionModel {
    type Record = Session;

    fn store(&self) -> &Arc<Collection<Session>> {
        &self.sessions
    }

    fn record(&self) -> &Session {
        &self.record
    }

    fn record_mut(&mut self) -> &mut Session {
        &mut self.record
    }
}

impl Deref for SessionModel {
    type Target = Session;

    fn deref(&self) -> &Session {
        &self.record
    }
}

impl DerefMut for SessionModel {
    fn deref_mut(&mut self) -> &mut Session {
        &mut self.record
    }
}
