//! Entity Models
//!
//! Live entities: a working copy plus the collection handles its operations
//! need.
//!
//! - **UserModel**: lookup by id and email
//! - **ChannelModel**: creation, message dispatch, owned channels
//! - **MessageModel**: likes and threaded comments
//! - **SessionModel**: login, logout, sliding expiry, expired-session sweep

mod model;
mod factory;
mod user;
mod channel;
mod message;
mod session;

pub use model::Model;
pub use factory::{
    Models, CHANNEL_COLLECTION, MESSAGE_COLLECTION, SESSION_COLLECTION, USER_COLLECTION,
};
pub use user::UserModel;
pub use channel::ChannelModel;
pub use message::MessageModel;
pub use session::SessionModel;
