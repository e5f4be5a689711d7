use std::sync::Arc;
use std::time::Duration;

use services::{Clock, RunnerConfig, TrialRunner};
use trial_core::model::Catalog;

pub trait UiApp: Send + Sync {
    fn catalog(&self) -> Arc<Catalog>;
    fn clock(&self) -> Clock;
    fn runner_config(&self) -> RunnerConfig;
}

#[derive(Clone)]
pub struct AppContext {
    catalog: Arc<Catalog>,
    clock: Clock,
    config: RunnerConfig,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            catalog: app.catalog(),
            clock: app.clock(),
            config: app.runner_config(),
        }
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<Catalog> {
        Arc::clone(&self.catalog)
    }

    #[must_use]
    pub fn feedback_delay(&self) -> Duration {
        self.config.feedback_delay
    }

    /// Fresh state container for the experiment screens.
    #[must_use]
    pub fn new_runner(&self) -> TrialRunner {
        TrialRunner::new(self.catalog(), self.clock, self.config)
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self {
            catalog: Arc::new(Catalog::builtin()),
            clock: Clock::default_clock(),
            config: RunnerConfig::default(),
        }
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
