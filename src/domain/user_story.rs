//! Story and task documents as described by templates and payload overrides.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::AppError;

/// Key marking a template that holds several user stories.
pub const USER_STORIES_KEY: &str = "user_stories";

/// A user story to create, with its optional tasks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UserStory {
    pub project_slug: String,
    pub subject: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Username of the member to assign.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    /// Slug of the user story status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tasks: Vec<Task>,
}

impl UserStory {
    /// Build a story from merged template fields, rejecting unknown keys and wrong types.
    pub fn from_fields(fields: Map<String, Value>) -> Result<Self, AppError> {
        serde_json::from_value(Value::Object(fields))
            .map_err(|e| AppError::InvalidUserStory(e.to_string()))
    }
}

/// A task attached to a user story.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Task {
    pub subject: String,
    /// Position of the task inside its user story.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

/// Raw template content, split by shape.
#[derive(Debug, Clone, PartialEq)]
pub enum TemplateDocument {
    Single(Map<String, Value>),
    Multiple(Vec<Map<String, Value>>),
}

impl TemplateDocument {
    /// Classify a parsed template. The shape depends only on the presence of `user_stories`.
    pub fn from_value(filename: &str, value: Value) -> Result<Self, AppError> {
        let malformed = |details: &str| AppError::MalformedTemplate {
            filename: filename.to_string(),
            details: details.to_string(),
        };

        let Value::Object(mut root) = value else {
            return Err(malformed("expected a JSON object at the top level"));
        };

        let Some(stories) = root.remove(USER_STORIES_KEY) else {
            return Ok(TemplateDocument::Single(root));
        };

        let Value::Array(stories) = stories else {
            return Err(malformed("'user_stories' must be an array"));
        };

        stories
            .into_iter()
            .map(|story| match story {
                Value::Object(fields) => Ok(fields),
                _ => Err(malformed("every entry of 'user_stories' must be an object")),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(TemplateDocument::Multiple)
    }
}

/// Template after override merge, validation and substitution.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MergedDocument {
    Multiple { user_stories: Vec<UserStory> },
    Single(UserStory),
}

impl MergedDocument {
    /// Stories in creation order.
    pub fn user_stories(&self) -> &[UserStory] {
        match self {
            MergedDocument::Multiple { user_stories } => user_stories,
            MergedDocument::Single(story) => std::slice::from_ref(story),
        }
    }
}
