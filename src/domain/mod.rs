pub mod config;
pub mod error;
pub mod parameters;
pub mod payload;
pub mod project;
pub mod safe_format;
pub mod user_story;

pub use config::{BotConfig, Credentials, ServerConfig, TaigaApiConfig, TemplateConfig};
pub use error::AppError;
pub use parameters::{
    TaskParameters, UserStoryParameters, build_task_parameters, build_user_story_parameters,
};
pub use payload::RequestPayload;
pub use project::{CreatedItem, Member, Project, UserStoryStatus};
pub use safe_format::{format_strings_in_map, safe_format};
pub use user_story::{MergedDocument, Task, TemplateDocument, USER_STORIES_KEY, UserStory};
