use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use serde_json::Value;

use crate::domain::AppError;
use crate::ports::TemplateStore;

/// In-memory template store counting every load.
#[derive(Clone, Debug, Default)]
pub struct MockTemplateStore {
    templates: Arc<Mutex<HashMap<String, String>>>,
    loads: Arc<Mutex<usize>>,
}

impl MockTemplateStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_template(self, filename: &str, content: &str) -> Self {
        self.templates.lock().unwrap().insert(filename.to_string(), content.to_string());
        self
    }

    pub fn load_count(&self) -> usize {
        *self.loads.lock().unwrap()
    }
}

impl TemplateStore for MockTemplateStore {
    fn load_template(&self, filename: &str) -> Result<Value, AppError> {
        *self.loads.lock().unwrap() += 1;
        let templates = self.templates.lock().unwrap();
        let content = templates
            .get(filename)
            .ok_or_else(|| AppError::TemplateNotFound { filename: filename.to_string() })?;
        serde_json::from_str(content).map_err(|e| AppError::MalformedTemplate {
            filename: filename.to_string(),
            details: e.to_string(),
        })
    }
}
