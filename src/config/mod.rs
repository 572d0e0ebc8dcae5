//! # Configuration Module
//!
//! Session lifetime and sweep settings for the entity store.
//!
//! Sources, lowest priority first:
//! - Built-in defaults (60 minute TTL, 60 second sweep)
//! - `config/default.toml`, then `config/{RUN_ENV}.toml`
//! - `APP__`-prefixed environment variables, e.g. `APP__SESSION__TTL_MINUTES`
//! - `SESSION_TTL_MINUTES` as a shortcut for the session TTL
//!
//! A `.env` file is read first when present. Out-of-range values are
//! rejected at load time.

mod settings;

pub use settings::*;
