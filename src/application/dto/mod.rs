//! Data Transfer Objects
//!
//! Input structures validated before an entity operation writes anything.

pub mod request;

pub use request::*;
