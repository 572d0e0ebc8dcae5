//! # Domain Layer
//!
//! Entities and the record contract the entity store is built on.
//!
//! ## Structure
//!
//! - **record**: the `Record` trait and the `EntryId` type
//! - **entities**: User, Channel, Message, Session and their patch types
//!
//! ## Design Principles
//!
//! - No dependencies on infrastructure or application layers
//! - Entities are plain values; relationships are stored as id lists

pub mod entities;
pub mod record;

// Re-export commonly used types
pub use entities::*;
pub use record::{EntryId, Record};
