//! Application settings and configuration structures.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Root configuration structure containing all application settings.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Session lifetime and sweeping
    pub session: SessionSettings,

    /// Current environment (development, staging, production)
    pub environment: String,
}

/// Session configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionSettings {
    /// Session time-to-live in minutes
    pub ttl_minutes: i64,

    /// Interval between expired-session sweeps in seconds
    pub sweep_interval_secs: u64,
}

/// Default session time-to-live in minutes
pub const DEFAULT_SESSION_TTL_MINUTES: i64 = 60;

/// Longest accepted session time-to-live in minutes (one year)
pub const MAX_SESSION_TTL_MINUTES: i64 = 365 * 24 * 60;

/// Default sweep interval in seconds
pub const DEFAULT_SWEEP_INTERVAL_SECS: u64 = 60;

impl Settings {
    /// Load settings from environment variables and configuration files.
    ///
    /// The loading order is:
    /// 1. Built-in defaults
    /// 2. config/default.toml (base configuration)
    /// 3. config/{RUN_ENV}.toml (environment-specific overrides)
    /// 4. Environment variables (highest priority)
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if configuration cannot be loaded or parsed,
    /// or if a session setting is not positive.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        // Determine the running environment
        let environment = std::env::var("RUN_ENV").unwrap_or_else(|_| "development".into());

        Config::builder()
            .set_default("environment", environment.clone())?
            .set_default("session.ttl_minutes", DEFAULT_SESSION_TTL_MINUTES)?
            .set_default("session.sweep_interval_secs", DEFAULT_SWEEP_INTERVAL_SECS)?
            // Load from config files
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // APP__SESSION__TTL_MINUTES=30 -> session.ttl_minutes = 30
            .add_source(
                Environment::default()
                    .prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option(
                "session.ttl_minutes",
                std::env::var("SESSION_TTL_MINUTES").ok(),
            )?
            .build()?
            .try_deserialize()
            .and_then(|settings: Self| settings.validated())
    }

    /// Check value ranges after deserialization.
    pub fn validated(self) -> Result<Self, ConfigError> {
        if self.session.ttl_minutes <= 0 {
            return Err(ConfigError::Message(format!(
                "Session TTL must be positive. Current value: {} minutes",
                self.session.ttl_minutes
            )));
        }
        if self.session.ttl_minutes > MAX_SESSION_TTL_MINUTES {
            return Err(ConfigError::Message(format!(
                "Session TTL must not exceed {} minutes. Current value: {} minutes",
                MAX_SESSION_TTL_MINUTES, self.session.ttl_minutes
            )));
        }
        if self.session.sweep_interval_secs == 0 {
            return Err(ConfigError::Message(
                "Session sweep interval must be at least 1 second".into(),
            ));
        }
        Ok(self)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            session: SessionSettings::default(),
            environment: "development".into(),
        }
    }
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            ttl_minutes: DEFAULT_SESSION_TTL_MINUTES,
            sweep_interval_secs: DEFAULT_SWEEP_INTERVAL_SECS,
        }
    }
}

impl SessionSettings {
    /// Session time-to-live as a duration.
    ///
    /// Values outside `1..=MAX_SESSION_TTL_MINUTES` are clamped; `validated`
    /// rejects them before this is reached.
    pub fn ttl(&self) -> chrono::Duration {
        chrono::Duration::minutes(self.ttl_minutes.clamp(1, MAX_SESSION_TTL_MINUTES))
    }

    /// Sweep interval as a duration.
    pub fn sweep_interval(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.sweep_interval_secs)
    }
}
