//! Message model.
//!
//! Comments are regular rows of the message collection. A comment points at
//! its parent through `parent_id`; the parent lists direct children in
//! `message_ids`. Like-set and child-list changes are applied to the stored
//! row under the collection lock, then copied back to the working copy.

use std::ops::{Deref, DerefMut};
use std::sync::Arc;

use chrono::{DateTime, Utc};

use super::Model;
use crate::application::dto::{CommentRequest, LikeRequest, UnlikeRequest};
use crate::domain::{EntryId, Message};
use crate::infrastructure::Collection;
use crate::shared::error::AppError;
use crate::shared::validation::validate;

/// Live message bound to the message collection
#[derive(Debug, Clone)]
pub struct MessageModel {
    record: Message,
    messages: Arc<Collection<Message>>,
}

impl MessageModel {
    /// Wrap `data`, stamping fresh timestamps when it is unsaved
    pub fn new(mut data: Message, messages: Arc<Collection<Message>>) -> Self {
        if data.id.is_none() {
            let now = Utc::now();
            data.created_at = now;
            data.updated_at = now;
        }
        Self {
            record: data,
            messages,
        }
    }

    /// All messages written by `user_id`
    pub fn by_user_id(&self, user_id: EntryId) -> Vec<Message> {
        self.messages.filter(|message| message.user_id == Some(user_id))
    }

    /// All direct comments on `parent_id`
    pub fn by_parent_id(&self, parent_id: EntryId) -> Vec<Message> {
        self.messages.filter(|message| message.parent_id == Some(parent_id))
    }

    /// Add `user_id` to the likes.
    ///
    /// Returns `false` when the user already liked this message.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` when `user_id` is 0.
    pub fn like(&mut self, user_id: EntryId) -> Result<bool, AppError> {
        validate(&LikeRequest { user_id })?;

        Ok(self.apply(|message, now| {
            if message.likes.contains(&user_id) {
                return false;
            }
            message.likes.push(user_id);
            message.updated_at = now;
            true
        }))
    }

    /// Remove `user_id` from the likes.
    ///
    /// Returns `false` when the user had not liked this message.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` when `user_id` is 0.
    pub fn unlike(&mut self, user_id: EntryId) -> Result<bool, AppError> {
        validate(&UnlikeRequest { user_id })?;

        Ok(self.apply(|message, now| {
            if !message.likes.contains(&user_id) {
                return false;
            }
            message.likes.retain(|id| *id != user_id);
            message.updated_at = now;
            true
        }))
    }

    /// Comment on this message.
    ///
    /// The comment is stored as a new row with `parent_id` set to this
    /// message, and its id is appended to this message's `message_ids`.
    /// Comments can be commented on in turn.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` when `data.content` is empty and
    /// `AppError::State` when this message is unsaved.
    pub fn comment(&mut self, data: Message) -> Result<Message, AppError> {
        validate(&CommentRequest {
            content: data.content.clone(),
        })?;
        let parent_id = self.record.id.ok_or_else(|| AppError::unsaved("comment on"))?;

        let now = Utc::now();
        let comment = self.messages.add(Message {
            id: None,
            parent_id: Some(parent_id),
            created_at: now,
            updated_at: now,
            ..data
        });

        if let Some(comment_id) = comment.id {
            self.apply(|message, now| {
                message.message_ids.push(comment_id);
                message.updated_at = now;
                true
            });
            tracing::debug!(parent_id, comment_id, "Comment added");
        }

        Ok(comment)
    }

    /// Direct comments on this message, oldest first.
    ///
    /// Nested replies are not included; ids with no row are skipped.
    pub fn get_comments(&self) -> Vec<Message> {
        self.messages.resolve(&self.record.message_ids)
    }

    /// Unwrap the working copy
    pub fn into_record(self) -> Message {
        self.record
    }

    /// Apply `change` to the stored row and mirror the result locally.
    ///
    /// Unsaved messages, or messages whose row has vanished, only change the
    /// working copy.
    fn apply(&mut self, change: impl Fn(&mut Message, DateTime<Utc>) -> bool) -> bool {
        let now = Utc::now();

        if let Some(id) = self.record.id {
            match self.messages.modify(id, |row| change(row, now)) {
                Some((changed, row)) => {
                    self.record.likes = row.likes;
                    self.record.message_ids = row.message_ids;
                    self.record.updated_at = row.updated_at;
                    return changed;
                }
                None => {
                    tracing::warn!(message_id = id, "Message row missing, change kept on working copy");
                }
            }
        }

        change(&mut self.record, now)
    }
}

impl Model for MessageModel {
    type Record = Message;

    fn store(&self) -> &Arc<Collection<Message>> {
        &self.messages
    }

    fn record(&self) -> &Message {
        &self.record
    }

    fn record_mut(&mut self) -> &mut Message {
        &mut self.record
    }
}

impl Deref for MessageModel {
    type Target = Message;

    fn deref(&self) -> &Message {
        &self.record
    }
}

impl DerefMut for MessageModel {
    fn deref_mut(&mut self) -> &mut Message {
        &mut self.record
    }
}
