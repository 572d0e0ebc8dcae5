//! # Chat Store Library
//!
//! This crate provides the in-memory entity store of a chat application:
//! - Named collections with monotonically increasing ids
//! - Users, channels, messages with threaded comments, and sessions
//! - Sliding session expiry and an expired-session sweep
//!
//! ## Architecture
//!
//! The crate follows Clean Architecture principles:
//!
//! - **Domain Layer**: Entities and the record contract
//! - **Application Layer**: Entity models and request DTOs
//! - **Infrastructure Layer**: In-memory collections and their registry
//!
//! ## Module Structure
//!
//! ```text
//! chat_store/
//! +-- config/         Configuration management
//! +-- domain/         Entities and the Record trait
//! +-- application/    Entity models and DTOs
//! +-- infrastructure/ Collections and the store registry
//! +-- shared/         Common utilities (errors, validation, tokens)
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use chat_store::application::models::{Model, Models};
//! use chat_store::domain::{Channel, Message};
//! use chat_store::infrastructure::StoreRegistry;
//!
//! let registry = StoreRegistry::new();
//! let models = Models::new(&registry, chrono::Duration::minutes(60))?;
//!
//! let mut channel = models.channel(Channel::default());
//! channel.create("general", 1)?;
//! let mut hello = models.message(Message { user_id: Some(1), content: "Hello!".into(), ..Default::default() });
//! channel.send(&mut hello)?;
//! ```

// Configuration module
pub mod config;

// Domain layer - Entities and record contract
pub mod domain;

// Application layer - Entity models
pub mod application;

// Infrastructure layer - In-memory storage
pub mod infrastructure;

// Shared utilities
pub mod shared;

// Application startup and state management
pub mod startup;

// Telemetry and observability
pub mod telemetry;
