//! Infrastructure Layer
//!
//! Storage implementations backing the application layer.

pub mod store;

pub use store::{Collection, StoreRegistry};
