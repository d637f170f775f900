//! Merge a stored template with per-request overrides and substitutions.

use serde_json::{Map, Value};

use crate::domain::{
    AppError, MergedDocument, RequestPayload, TemplateDocument, UserStory, format_strings_in_map,
};
use crate::ports::TemplateStore;

/// Turns webhook payloads into merged story documents.
pub struct PayloadMerger<'a, S: TemplateStore> {
    templates: &'a S,
}

impl<'a, S: TemplateStore> PayloadMerger<'a, S> {
    pub fn new(templates: &'a S) -> Self {
        Self { templates }
    }

    /// Load the template named by `filename` and apply `data` and `string_replacement`.
    ///
    /// Payload validation happens before the template is read.
    pub fn parse_payload(&self, payload: Option<&Value>) -> Result<MergedDocument, AppError> {
        let payload = RequestPayload::from_json(payload)?;
        let template = self.templates.load_template(&payload.filename)?;

        match TemplateDocument::from_value(&payload.filename, template)? {
            TemplateDocument::Multiple(stories) => {
                let user_stories = stories
                    .into_iter()
                    .map(|story| parse_single_user_story(story, &payload))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(MergedDocument::Multiple { user_stories })
            }
            TemplateDocument::Single(story) => {
                parse_single_user_story(story, &payload).map(MergedDocument::Single)
            }
        }
    }
}

fn parse_single_user_story(
    mut story: Map<String, Value>,
    payload: &RequestPayload,
) -> Result<UserStory, AppError> {
    if let Some(data) = &payload.data {
        for (key, value) in data {
            story.insert(key.clone(), value.clone());
        }
    }

    assert_parameter(&story, "project_slug")?;
    assert_parameter(&story, "subject")?;

    if let Some(replacements) = &payload.string_replacement {
        format_strings_in_map(&mut story, replacements);
    }

    UserStory::from_fields(story)
}

fn assert_parameter(story: &Map<String, Value>, parameter: &str) -> Result<(), AppError> {
    if story.contains_key(parameter) {
        return Ok(());
    }
    Err(AppError::missing_parameters(format!(
        "Missing '{parameter}' attribute in User Story. Modify the template or send \
         'data.{parameter}' in the HTTP payload"
    )))
}
