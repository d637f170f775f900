//! Pure parse/validate for bot configuration (`taigabot.toml`).

use crate::domain::{AppError, BotConfig};

/// Parse and validate bot configuration from TOML content.
pub fn parse_config_content(content: &str) -> Result<BotConfig, AppError> {
    let config: BotConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}
