//! taigabot: create Taiga user stories and tasks from JSON templates on webhook calls.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

use std::net::SocketAddr;
use std::path::Path;

use adapters::{FilesystemTemplateStore, HttpTaigaConnector};
use app::AppContext;
use app::commands::{PayloadMerger, handle_webhook};

pub use app::commands::{CreatedUserStory, StoryBuilder, WebhookResponse};
pub use domain::{AppError, BotConfig, MergedDocument};

/// Build the production context from configuration.
pub fn context(config: BotConfig) -> AppContext<FilesystemTemplateStore, HttpTaigaConnector> {
    let templates = FilesystemTemplateStore::new(config.templates.base_dir.clone());
    let tracker = HttpTaigaConnector::new(config.taiga.clone());
    AppContext::new(config, templates, tracker)
}

/// Serve the webhook over HTTP until the process is stopped.
pub fn serve(config_path: Option<&Path>, bind: Option<SocketAddr>) -> Result<(), AppError> {
    let mut config = app::config::load_config(config_path)?;
    if let Some(bind) = bind {
        config.server.bind = bind;
    }

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(app::server::serve(context(config)))
}

/// Run a payload file through the webhook pipeline as a POST request.
///
/// Failures of the pipeline are reported in the returned response, like the
/// webhook does; only configuration and payload-file errors are returned as `Err`.
pub fn invoke(config_path: Option<&Path>, payload_path: &Path) -> Result<WebhookResponse, AppError> {
    let config = app::config::load_config(config_path)?;
    let body = std::fs::read(payload_path).map_err(|e| {
        AppError::InvalidPayload(format!("cannot read {}: {}", payload_path.display(), e))
    })?;

    Ok(handle_webhook(&context(config), "POST", &body))
}

/// Merge a payload file with its template without contacting Taiga.
pub fn render(config_path: Option<&Path>, payload_path: &Path) -> Result<MergedDocument, AppError> {
    let config = app::config::load_config(config_path)?;
    let content = std::fs::read_to_string(payload_path).map_err(|e| {
        AppError::InvalidPayload(format!("cannot read {}: {}", payload_path.display(), e))
    })?;
    let payload: serde_json::Value = serde_json::from_str(&content).map_err(|e| {
        AppError::InvalidPayload(format!("{} is not valid JSON: {}", payload_path.display(), e))
    })?;

    let templates = FilesystemTemplateStore::new(config.templates.base_dir);
    PayloadMerger::new(&templates).parse_payload(Some(&payload))
}
