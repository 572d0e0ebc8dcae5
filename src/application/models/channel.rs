//! Channel model.
//!
//! Channels reference messages by id only. `send` persists the message in
//! the message collection and appends its id to the channel row inside the
//! channel collection's lock.

use std::ops::{Deref, DerefMut};
use std::sync::Arc;

use chrono::Utc;

use super::{MessageModel, Model};
use crate::application::dto::CreateChannelRequest;
use crate::domain::{Channel, EntryId, Message};
use crate::infrastructure::Collection;
use crate::shared::error::AppError;
use crate::shared::validation::validate;

/// Live channel bound to the channel and message collections
#[derive(Debug, Clone)]
pub struct ChannelModel {
    record: Channel,
    channels: Arc<Collection<Channel>>,
    messages: Arc<Collection<Message>>,
}

impl ChannelModel {
    /// Wrap `data`, stamping fresh timestamps when it is unsaved
    pub fn new(
        mut data: Channel,
        channels: Arc<Collection<Channel>>,
        messages: Arc<Collection<Message>>,
    ) -> Self {
        if data.id.is_none() {
            let now = Utc::now();
            data.created_at = now;
            data.updated_at = now;
        }
        Self {
            record: data,
            channels,
            messages,
        }
    }

    /// Create and persist a channel owned by `user_id`.
    ///
    /// The owner becomes the first member and the message list starts empty.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` when `name` is empty or `user_id` is 0.
    pub fn create(&mut self, name: &str, user_id: EntryId) -> Result<Channel, AppError> {
        validate(&CreateChannelRequest {
            name: name.to_string(),
            owner_user_id: user_id,
        })?;

        let now = Utc::now();
        self.record.name = name.to_string();
        self.record.owner_user_id = Some(user_id);
        self.record.message_ids = Vec::new();
        self.record.user_ids = vec![user_id];
        self.record.created_at = now;
        self.record.updated_at = now;

        let created = self.channels.add(self.record.clone());
        self.record = created.clone();

        tracing::debug!(channel_id = ?created.id, owner_user_id = user_id, "Channel created");
        Ok(created)
    }

    /// Send a message to this channel.
    ///
    /// An unsaved message is saved first. Its id is appended to
    /// `message_ids` and the channel row is updated.
    ///
    /// # Errors
    ///
    /// Returns `AppError::State` when the channel itself is unsaved.
    pub fn send(&mut self, message: &mut MessageModel) -> Result<(), AppError> {
        let channel_id = self.record.id.ok_or_else(|| AppError::unsaved("send to"))?;

        if message.id.is_none() {
            message.save();
        }
        let Some(message_id) = message.id else {
            return Err(AppError::unsaved("send"));
        };

        let now = Utc::now();
        let appended = self.channels.modify(channel_id, |row| {
            row.message_ids.push(message_id);
            row.updated_at = now;
        });

        match appended {
            Some(((), row)) => {
                self.record.message_ids = row.message_ids;
                self.record.updated_at = row.updated_at;
            }
            None => {
                tracing::warn!(channel_id, message_id, "Channel row missing, send kept on working copy");
                self.record.message_ids.push(message_id);
                self.record.updated_at = now;
            }
        }

        tracing::debug!(channel_id, message_id, "Message sent");
        Ok(())
    }

    /// All channels owned by `owner_user_id`
    pub fn get_all_channels_by_user_id(&self, owner_user_id: EntryId) -> Vec<Channel> {
        self.channels.filter(|channel| channel.is_owned_by(owner_user_id))
    }

    /// Messages sent to this channel, in send order.
    ///
    /// Ids whose message no longer exists are skipped.
    pub fn get_messages(&self) -> Vec<Message> {
        self.messages.resolve(&self.record.message_ids)
    }

    /// Unwrap the working copy
    pub fn into_record(self) -> Channel {
        self.record
    }
}

impl Model for ChannelModel {
    type Record = Channel;

    fn store(&self) -> &Arc<Collection<Channel>> {
        &self.channels
    }

    fn record(&self) -> &Channel {
        &self.record
    }

    fn record_mut(&mut self) -> &mut Channel {
        &mut self.record
    }
}

impl Deref for ChannelModel {
    type Target = Channel;

    fn deref(&self) -> &Channel {
        &self.record
    }
}

impl DerefMut for ChannelModel {
    fn deref_mut(&mut self) -> &mut Channel {
        &mut self.record
    }
}
