pub mod bot_config;
pub mod credentials;
pub mod parse;

pub use bot_config::{BotConfig, ServerConfig, TaigaApiConfig, TemplateConfig};
pub use credentials::{
    Credentials, TAIGA_DOMAIN_ENV, TAIGABOT_ACCOUNT_ENV, TAIGABOT_PASSWORD_ENV,
};
pub use parse::parse_config_content;
