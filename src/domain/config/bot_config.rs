//! Bot configuration domain models.

use std::net::SocketAddr;
use std::path::PathBuf;

use serde::Deserialize;
use url::Url;

use super::Credentials;
use crate::domain::AppError;

/// Process-wide configuration, loaded once at start and shared read-only.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BotConfig {
    /// Taiga API configuration.
    #[serde(default)]
    pub taiga: TaigaApiConfig,
    /// Template store configuration.
    #[serde(default)]
    pub templates: TemplateConfig,
    /// Webhook server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Account used to authenticate against Taiga. Never read from the TOML file.
    #[serde(skip)]
    pub credentials: Option<Credentials>,
}

impl BotConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.taiga.validate()?;
        self.server.validate()?;
        Ok(())
    }

    pub fn with_credentials(mut self, credentials: Option<Credentials>) -> Self {
        self.credentials = credentials;
        self
    }
}

/// Taiga API configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TaigaApiConfig {
    /// Explicit API root. Takes precedence over the `TAIGA_DOMAIN` host.
    #[serde(default)]
    pub api_url: Option<Url>,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// Verify the server certificate.
    #[serde(default = "default_true")]
    pub tls_verify: bool,
}

impl Default for TaigaApiConfig {
    fn default() -> Self {
        Self { api_url: None, timeout_secs: default_timeout(), tls_verify: default_true() }
    }
}

impl TaigaApiConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.timeout_secs == 0 {
            return Err(AppError::config_error("taiga.timeout_secs must be greater than 0"));
        }
        Ok(())
    }

    /// Resolve the API root for the given host.
    ///
    /// A bare host such as `tree.taiga.io` is treated as `https://tree.taiga.io`.
    pub fn api_root(&self, host: &str) -> Result<Url, AppError> {
        if let Some(url) = &self.api_url {
            return Ok(url.clone());
        }

        let host = host.trim().trim_end_matches('/');
        let candidate =
            if host.contains("://") { host.to_string() } else { format!("https://{host}") };

        Url::parse(&candidate)
            .map_err(|e| AppError::config_error(format!("Invalid Taiga domain '{host}': {e}")))
    }
}

/// Template store configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TemplateConfig {
    /// Directory holding the JSON templates. Filenames are resolved against it.
    #[serde(default = "default_base_dir")]
    pub base_dir: PathBuf,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self { base_dir: default_base_dir() }
    }
}

/// Webhook server configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    /// Socket address the server listens on.
    #[serde(default = "default_bind")]
    pub bind: SocketAddr,
    /// Route serving the webhook.
    #[serde(default = "default_path")]
    pub path: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { bind: default_bind(), path: default_path() }
    }
}

impl ServerConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if !self.path.starts_with('/') {
            return Err(AppError::config_error(format!(
                "server.path must start with '/', got '{}'",
                self.path
            )));
        }
        Ok(())
    }
}

fn default_timeout() -> u64 {
    30
}

fn default_true() -> bool {
    true
}

fn default_base_dir() -> PathBuf {
    PathBuf::from("user_stories")
}

fn default_bind() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 8080))
}

fn default_path() -> String {
    "/".to_string()
}
