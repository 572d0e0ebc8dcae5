//! Named collection registry.
//!
//! Hands out one shared [`Collection`] per name, creating it on first use.
//! The registry is owned by the composition point and passed to whatever
//! needs collection handles.

use std::any::Any;
use std::sync::Arc;

use dashmap::DashMap;

use super::Collection;
use crate::domain::Record;
use crate::shared::error::AppError;

type AnyCollection = Arc<dyn Any + Send + Sync>;

/// Registry of named collections
#[derive(Default)]
pub struct StoreRegistry {
    collections: DashMap<String, AnyCollection>,
}

impl StoreRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the collection registered under `name`, creating it if needed.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Configuration` when `name` is empty or when the
    /// name is already bound to a collection of another record type.
    pub fn collection<T: Record>(&self, name: &str) -> Result<Arc<Collection<T>>, AppError> {
        if name.is_empty() {
            return Err(AppError::Configuration("Store name is required".into()));
        }

        let handle = Arc::clone(
            self.collections
                .entry(name.to_string())
                .or_insert_with(|| {
                    tracing::debug!(collection = %name, "Collection created");
                    Arc::new(Collection::<T>::new(name)) as AnyCollection
                })
                .value(),
        );

        handle.downcast::<Collection<T>>().map_err(|_| {
            AppError::Configuration(format!(
                "Store '{}' already holds a different record type",
                name
            ))
        })
    }

    /// Check if a collection exists under `name`
    pub fn contains(&self, name: &str) -> bool {
        self.collections.contains_key(name)
    }

    /// Names of all registered collections, sorted
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.collections.iter().map(|e| e.key().clone()).collect();
        names.sort();
        names
    }
}

impl std::fmt::Debug for StoreRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreRegistry")
            .field("collections", &self.names())
            .finish()
    }
}
