//! Template store port definition.

use serde_json::Value;

use crate::domain::AppError;

/// Port for reading JSON story templates.
///
/// Implementations must reject filenames that escape the store's root.
pub trait TemplateStore {
    /// Load and parse a template. Every call reads from storage; nothing is cached.
    fn load_template(&self, filename: &str) -> Result<Value, AppError>;
}
