//! Session Token Generation
//!
//! Opaque tokens in the form `uuid.uuid`; they carry no user data.

use uuid::Uuid;

/// Generate a new opaque session token
pub fn generate_token() -> String {
    format!("{}.{}", Uuid::new_v4().simple(), Uuid::new_v4().simple())
}
