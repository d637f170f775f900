//! Webhook entry point: validates the request and runs the full pipeline.

use serde_json::Value;
use tracing::{error, info};

use super::build_user_story::StoryBuilder;
use super::parse_payload::PayloadMerger;
use crate::app::AppContext;
use crate::ports::{TemplateStore, TrackerConnector};

pub const SUCCESS_BODY: &str = "User Story created";

/// Status and plain-text body returned to the webhook caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookResponse {
    pub status: u16,
    pub body: String,
}

impl WebhookResponse {
    fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    pub fn is_success(&self) -> bool {
        self.status == 200
    }
}

/// Handle one webhook invocation.
///
/// A body that is not valid JSON is treated as an absent payload.
pub fn handle_webhook<S, C>(ctx: &AppContext<S, C>, method: &str, body: &[u8]) -> WebhookResponse
where
    S: TemplateStore,
    C: TrackerConnector,
{
    if method != "POST" {
        return WebhookResponse::new(405, format!("Invalid method {method}"));
    }

    let Some(credentials) = &ctx.config().credentials else {
        return WebhookResponse::new(403, "Unable to retrieve credentials for Taigabot");
    };

    let tracker = match ctx.tracker().connect(credentials) {
        Ok(tracker) => tracker,
        Err(err) => {
            error!(error = %err, "Taiga authentication failed");
            return WebhookResponse::new(500, "Unable to authenticate into Taiga");
        }
    };

    let payload = serde_json::from_slice::<Value>(body).ok();
    let document = match PayloadMerger::new(ctx.templates()).parse_payload(payload.as_ref()) {
        Ok(document) => document,
        Err(err) => return WebhookResponse::new(err.status_code(), err.to_string()),
    };

    match StoryBuilder::new(tracker.as_ref()).build_user_story(&document) {
        Ok(created) => {
            info!(count = created.len(), "webhook processed");
            WebhookResponse::new(200, SUCCESS_BODY)
        }
        Err(err) => WebhookResponse::new(400, err.to_string()),
    }
}
