//! Entry Store
//!
//! In-memory collections keyed by an auto-incrementing id, and the registry
//! that hands them out by name.

mod collection;
mod registry;

pub use collection::Collection;
pub use registry::StoreRegistry;
