//! Application Layer
//!
//! Entity models built on the entity store, and the request DTOs they
//! validate.

pub mod dto;
pub mod models;
