//! File- and environment-backed configuration loading.
//!
//! Pure schema/model parsing lives in `domain::config`.

mod load_config;

pub use load_config::{CONFIG_PATH_ENV, DEFAULT_CONFIG_FILE, load_config, load_config_with};
