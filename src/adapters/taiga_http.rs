//! Taiga REST API client implementation using reqwest.

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use crate::domain::{
    AppError, CreatedItem, Credentials, Project, TaigaApiConfig, TaskParameters,
    UserStoryParameters,
};
use crate::ports::{TrackerClient, TrackerConnector};

const DEFAULT_STATUS_MESSAGE: &str = "Taiga API request failed";

/// Opens [`HttpTaigaClient`] sessions with the configured transport settings.
#[derive(Debug, Clone)]
pub struct HttpTaigaConnector {
    config: TaigaApiConfig,
}

impl HttpTaigaConnector {
    pub fn new(config: TaigaApiConfig) -> Self {
        Self { config }
    }
}

impl TrackerConnector for HttpTaigaConnector {
    fn connect(&self, credentials: &Credentials) -> Result<Box<dyn TrackerClient>, AppError> {
        let client = HttpTaigaClient::authenticate(&self.config, credentials)?;
        Ok(Box::new(client))
    }
}

/// Authenticated HTTP session against a Taiga instance.
///
/// Every call performs a single request; failures are reported, never retried.
#[derive(Clone)]
pub struct HttpTaigaClient {
    api_root: Url,
    auth_token: String,
    client: Client,
}

impl std::fmt::Debug for HttpTaigaClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTaigaClient")
            .field("api_root", &self.api_root)
            .field("auth_token", &"[REDACTED]")
            .finish()
    }
}

#[derive(Debug, Serialize)]
struct AuthRequest<'a> {
    #[serde(rename = "type")]
    auth_type: &'static str,
    username: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
struct AuthResponse {
    auth_token: String,
}

#[derive(Debug, Serialize)]
struct NewUserStory<'a> {
    project: i64,
    #[serde(flatten)]
    parameters: &'a UserStoryParameters,
}

#[derive(Debug, Serialize)]
struct NewTask<'a> {
    project: i64,
    user_story: i64,
    #[serde(flatten)]
    parameters: &'a TaskParameters,
}

impl HttpTaigaClient {
    /// Log in with the "normal" auth type and keep the returned token.
    pub fn authenticate(
        config: &TaigaApiConfig,
        credentials: &Credentials,
    ) -> Result<Self, AppError> {
        let api_root = config.api_root(&credentials.host)?;
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .danger_accept_invalid_certs(!config.tls_verify)
            .build()
            .map_err(|e| {
                AppError::config_error(format!("Failed to create HTTP client: {}", e))
            })?;

        let request = AuthRequest {
            auth_type: "normal",
            username: &credentials.username,
            password: &credentials.password,
        };
        let response = client
            .post(endpoint(&api_root, "auth")?)
            .json(&request)
            .send()
            .map_err(|e| AppError::Authentication(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(AppError::Authentication(format!(
                "{} ({})",
                error_message(&body),
                status.as_u16()
            )));
        }

        let auth: AuthResponse = response
            .json()
            .map_err(|e| AppError::Authentication(format!("Failed to parse response: {}", e)))?;

        debug!(api_root = %api_root, username = %credentials.username, "authenticated into Taiga");
        Ok(Self { api_root, auth_token: auth.auth_token, client })
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request.bearer_auth(&self.auth_token)
    }

    fn send(&self, request: RequestBuilder) -> Result<Response, AppError> {
        self.authorized(request)
            .send()
            .map_err(|e| AppError::TrackerTransport(format!("HTTP request failed: {}", e)))
    }
}

impl TrackerClient for HttpTaigaClient {
    fn project_by_slug(&self, slug: &str) -> Result<Project, AppError> {
        let url = endpoint(&self.api_root, "projects/by_slug")?;
        let response = self.send(self.client.get(url).query(&[("slug", slug)]))?;

        match response.status() {
            StatusCode::NOT_FOUND | StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                Err(AppError::ProjectNotFound(slug.to_string()))
            }
            _ => parse_success(response),
        }
    }

    fn create_user_story(
        &self,
        project: &Project,
        parameters: &UserStoryParameters,
    ) -> Result<CreatedItem, AppError> {
        let url = endpoint(&self.api_root, "userstories")?;
        let body = NewUserStory { project: project.id, parameters };
        parse_success(self.send(self.client.post(url).json(&body))?)
    }

    fn create_task(
        &self,
        project: &Project,
        user_story: &CreatedItem,
        parameters: &TaskParameters,
    ) -> Result<CreatedItem, AppError> {
        let url = endpoint(&self.api_root, "tasks")?;
        let body = NewTask { project: project.id, user_story: user_story.id, parameters };
        parse_success(self.send(self.client.post(url).json(&body))?)
    }
}

/// `{api_root}/api/v1/{path}`, keeping any path prefix of the root.
fn endpoint(api_root: &Url, path: &str) -> Result<Url, AppError> {
    let raw = format!("{}/api/v1/{}", api_root.as_str().trim_end_matches('/'), path);
    Url::parse(&raw).map_err(|e| AppError::config_error(format!("Invalid Taiga URL '{raw}': {e}")))
}

fn parse_success<T: DeserializeOwned>(response: Response) -> Result<T, AppError> {
    let status = response.status();
    let body = response.text().unwrap_or_default();

    if !status.is_success() {
        return Err(AppError::TrackerApi { status: status.as_u16(), details: error_message(&body) });
    }

    serde_json::from_str(&body)
        .map_err(|e| AppError::TrackerTransport(format!("Failed to parse response: {}", e)))
}

/// Taiga reports errors as `{"_error_message": ...}` or `{"detail": ...}`.
fn error_message(body: &str) -> String {
    let parsed = serde_json::from_str::<serde_json::Value>(body).ok();
    let message = parsed.as_ref().and_then(|value| {
        ["_error_message", "detail"]
            .iter()
            .find_map(|key| value.get(key).and_then(|message| message.as_str()))
    });

    match message {
        Some(message) => message.to_string(),
        None if !body.trim().is_empty() => body.trim().to_string(),
        None => DEFAULT_STATUS_MESSAGE.to_string(),
    }
}
