//! Bot configuration loading from `taigabot.toml` and the process environment.

use std::path::Path;

use crate::domain::config;
use crate::domain::{AppError, BotConfig, Credentials};

/// Configuration file read from the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "taigabot.toml";

/// Environment variable naming an explicit configuration file.
pub const CONFIG_PATH_ENV: &str = "TAIGABOT_CONFIG";

/// Load configuration and read credentials from the process environment.
pub fn load_config(path: Option<&Path>) -> Result<BotConfig, AppError> {
    load_config_with(path, |key| std::env::var(key).ok())
}

/// Load configuration with an explicit variable lookup.
///
/// An explicit `path` must exist. Without one, `taigabot.toml` is used when
/// present and defaults apply otherwise.
pub fn load_config_with<F>(path: Option<&Path>, lookup: F) -> Result<BotConfig, AppError>
where
    F: Fn(&str) -> Option<String>,
{
    let config = match path {
        Some(path) => read_config(path)?,
        None if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
            read_config(Path::new(DEFAULT_CONFIG_FILE))?
        }
        None => BotConfig::default(),
    };

    Ok(config.with_credentials(Credentials::from_lookup(lookup)))
}

fn read_config(path: &Path) -> Result<BotConfig, AppError> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        AppError::config_error(format!("Failed to read config {}: {}", path.display(), e))
    })?;
    config::parse_config_content(&content)
}
