pub mod build_user_story;
pub mod parse_payload;
pub mod webhook;

pub use build_user_story::{CreatedUserStory, StoryBuilder};
pub use parse_payload::PayloadMerger;
pub use webhook::{SUCCESS_BODY, WebhookResponse, handle_webhook};
