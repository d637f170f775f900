use crate::domain::BotConfig;
use crate::ports::{TemplateStore, TrackerConnector};

/// Application context holding dependencies for webhook handling.
pub struct AppContext<S: TemplateStore, C: TrackerConnector> {
    config: BotConfig,
    templates: S,
    tracker: C,
}

impl<S: TemplateStore, C: TrackerConnector> AppContext<S, C> {
    /// Create a new application context.
    pub fn new(config: BotConfig, templates: S, tracker: C) -> Self {
        Self { config, templates, tracker }
    }

    pub fn config(&self) -> &BotConfig {
        &self.config
    }

    /// Get a reference to the template store.
    pub fn templates(&self) -> &S {
        &self.templates
    }

    /// Get a reference to the tracker connector.
    pub fn tracker(&self) -> &C {
        &self.tracker
    }
}
