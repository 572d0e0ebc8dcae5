//! Request DTOs
//!
//! Required-field checks for the entity operations that take caller input.

use validator::Validate;

use crate::domain::EntryId;

/// Create channel request
#[derive(Debug, Validate)]
pub struct CreateChannelRequest {
    #[validate(length(min = 1, message = "Channel name is required to create a channel"))]
    pub name: String,

    #[validate(range(min = 1, message = "User ID is required to create a channel"))]
    pub owner_user_id: EntryId,
}

/// Comment request
#[derive(Debug, Validate)]
pub struct CommentRequest {
    #[validate(length(min = 1, message = "Message content is required to comment"))]
    pub content: String,
}

/// Like request
#[derive(Debug, Validate)]
pub struct LikeRequest {
    #[validate(range(min = 1, message = "User ID is required to like a message"))]
    pub user_id: EntryId,
}

/// Unlike request
#[derive(Debug, Validate)]
pub struct UnlikeRequest {
    #[validate(range(min = 1, message = "User ID is required to unlike a message"))]
    pub user_id: EntryId,
}

/// Login request
#[derive(Debug, Validate)]
pub struct LoginRequest {
    #[validate(range(min = 1, message = "User ID is required to create a session"))]
    pub user_id: EntryId,
}
