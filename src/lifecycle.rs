//! Two-phase application lifecycle.
//!
//! `start` runs before the first request is served; `stop` must run on every
//! exit path out of the running phase, whether serving ended normally or
//! with an error.

use std::sync::Arc;

use tracing::info;

use crate::config::Settings;
use crate::error::{LifecycleError, Result};
use crate::metrics;

/// Lifecycle states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleState {
    /// Not started yet, or stopped after running.
    Stopped,
    /// Startup completed; requests may be served.
    Running,
}

/// Startup/shutdown pair bound to the application's running state.
#[derive(Debug)]
pub struct Lifecycle {
    settings: Arc<Settings>,
    state: LifecycleState,
}

impl Lifecycle {
    /// Create a lifecycle in the stopped state.
    pub fn new(settings: Arc<Settings>) -> Self {
        Self {
            settings,
            state: LifecycleState::Stopped,
        }
    }

    /// Current state.
    pub fn state(&self) -> LifecycleState {
        self.state
    }

    /// Transition stopped -> running.
    ///
    /// Any failure here propagates as an application-startup fault and the
    /// running state is never entered.
    pub async fn start(&mut self) -> Result<()> {
        if self.state == LifecycleState::Running {
            return Err(LifecycleError::AlreadyRunning.into());
        }

        info!(
            "Starting {} (env={})",
            self.settings.app_name, self.settings.env
        );

        // Acquire external resources here (database pools, clients, caches).
        // Example: db::connect(&self.settings).await?

        self.state = LifecycleState::Running;
        metrics::inc_startups();
        Ok(())
    }

    /// Transition running -> stopped. No-op when not running.
    pub async fn stop(&mut self) {
        if self.state != LifecycleState::Running {
            return;
        }

        info!("Stopping {}", self.settings.app_name);

        // Release external resources here.
        // Example: db.disconnect().await

        self.state = LifecycleState::Stopped;
        metrics::inc_shutdowns();
    }
}
