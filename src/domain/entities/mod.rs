//! # Domain Entities
//!
//! Core domain entities held by the entity store.
//!
//! - **User**: User account (name, email)
//! - **Channel**: A named channel with an owner, members and sent message ids
//! - **Message**: A message or comment, with likes and child comment ids
//! - **Session**: A login session with a token and an expiry
//!
//! Every entity implements [`Record`](crate::domain::Record) and comes with a
//! patch type used for shallow merges.

mod user;
mod channel;
mod message;
mod session;

pub use user::{User, UserPatch};
pub use channel::{Channel, ChannelPatch};
pub use message::{Message, MessagePatch};
pub use session::{CreateSession, Session, SessionPatch};
