//! Application Startup
//!
//! Composition point: owns the store registry, the model factory and the
//! background sweep of expired sessions.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;

use crate::application::models::{Models, SessionModel};
use crate::config::Settings;
use crate::domain::{EntryId, Session};
use crate::infrastructure::{Collection, StoreRegistry};

/// Application state shared with callers
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<StoreRegistry>,
    pub models: Arc<Models>,
    pub settings: Arc<Settings>,
}

/// Periodically removes expired sessions
pub struct SessionSweeper {
    sessions: Arc<Collection<Session>>,
    interval: Duration,
}

impl SessionSweeper {
    /// Create a sweeper over the session collection of `models`
    pub fn new(models: &Models, interval: Duration) -> Self {
        Self {
            sessions: Arc::clone(models.sessions()),
            interval,
        }
    }

    /// Run one sweep, returning the removed session ids
    pub fn sweep(&self) -> Vec<EntryId> {
        SessionModel::remove_expired_in(&self.sessions)
    }

    /// Sweep on every tick until the task is dropped
    pub async fn run(self) {
        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            let removed = self.sweep();
            tracing::debug!(removed = removed.len(), "Session sweep finished");
        }
    }
}

/// Application instance
pub struct Application {
    state: AppState,
    sweeper: SessionSweeper,
}

impl Application {
    /// Build the application from settings
    pub fn build(settings: Settings) -> Result<Self> {
        let registry = Arc::new(StoreRegistry::new());
        let models = Arc::new(Models::new(&registry, settings.session.ttl())?);
        tracing::info!(collections = ?registry.names(), "Entity store ready");

        let sweeper = SessionSweeper::new(&models, settings.session.sweep_interval());

        let state = AppState {
            registry,
            models,
            settings: Arc::new(settings),
        };

        Ok(Self { state, sweeper })
    }

    /// Shared application state
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Run the session sweeper until Ctrl-C
    pub async fn run_until_stopped(self) -> Result<()> {
        let sweeper = tokio::spawn(self.sweeper.run());

        tokio::signal::ctrl_c().await?;
        tracing::info!("Shutdown signal received");

        sweeper.abort();
        Ok(())
    }
}
