//! Model factory.
//!
//! Resolves the entity collections from a [`StoreRegistry`] once and hands
//! them to every model it builds.

use std::sync::Arc;

use chrono::Duration;

use super::{ChannelModel, MessageModel, SessionModel, UserModel};
use crate::domain::{Channel, CreateSession, Message, Session, User};
use crate::infrastructure::{Collection, StoreRegistry};
use crate::shared::error::AppError;

/// Collection name for users
pub const USER_COLLECTION: &str = "user";
/// Collection name for channels
pub const CHANNEL_COLLECTION: &str = "channel";
/// Collection name for messages and comments
pub const MESSAGE_COLLECTION: &str = "message";
/// Collection name for sessions
pub const SESSION_COLLECTION: &str = "session";

/// Builds entity models bound to shared collections
#[derive(Debug, Clone)]
pub struct Models {
    users: Arc<Collection<User>>,
    channels: Arc<Collection<Channel>>,
    messages: Arc<Collection<Message>>,
    sessions: Arc<Collection<Session>>,
    session_ttl: Duration,
}

impl Models {
    /// Resolve the entity collections from `registry`.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Configuration` if one of the names is already
    /// bound to another record type.
    pub fn new(registry: &StoreRegistry, session_ttl: Duration) -> Result<Self, AppError> {
        Ok(Self {
            users: registry.collection(USER_COLLECTION)?,
            channels: registry.collection(CHANNEL_COLLECTION)?,
            messages: registry.collection(MESSAGE_COLLECTION)?,
            sessions: registry.collection(SESSION_COLLECTION)?,
            session_ttl,
        })
    }

    /// Build a user model
    pub fn user(&self, data: User) -> UserModel {
        UserModel::new(data, Arc::clone(&self.users))
    }

    /// Build a channel model
    pub fn channel(&self, data: Channel) -> ChannelModel {
        ChannelModel::new(data, Arc::clone(&self.channels), Arc::clone(&self.messages))
    }

    /// Build a message model
    pub fn message(&self, data: Message) -> MessageModel {
        MessageModel::new(data, Arc::clone(&self.messages))
    }

    /// Build a new session model with a token and expiry filled in
    pub fn session(&self, data: CreateSession) -> SessionModel {
        SessionModel::new(
            data,
            Arc::clone(&self.sessions),
            Arc::clone(&self.users),
            self.session_ttl,
        )
    }

    /// Wrap an existing session record
    pub fn bind_session(&self, session: Session) -> SessionModel {
        SessionModel::bind(
            session,
            Arc::clone(&self.sessions),
            Arc::clone(&self.users),
            self.session_ttl,
        )
    }

    /// User collection handle
    pub fn users(&self) -> &Arc<Collection<User>> {
        &self.users
    }

    /// Channel collection handle
    pub fn channels(&self) -> &Arc<Collection<Channel>> {
        &self.channels
    }

    /// Message collection handle
    pub fn messages(&self) -> &Arc<Collection<Message>> {
        &self.messages
    }

    /// Session collection handle
    pub fn sessions(&self) -> &Arc<Collection<Session>> {
        &self.sessions
    }

    /// Session time-to-live
    pub fn session_ttl(&self) -> Duration {
        self.session_ttl
    }
}
