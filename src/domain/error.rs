use std::io;

use thiserror::Error;

/// Library-wide error type for taigabot operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// Required information is absent from the payload or the merged story.
    #[error("{0}")]
    MissingParameters(String),

    /// Payload is present but one of its sections has the wrong shape.
    #[error("Invalid payload: {0}")]
    InvalidPayload(String),

    /// Template file does not exist in the template directory.
    #[error("File '{filename}' not found")]
    TemplateNotFound { filename: String },

    /// Template file exists but cannot be read.
    #[error("Permission error on file '{filename}'")]
    TemplatePermission { filename: String },

    /// Template filename resolves outside the template directory.
    #[error("Template '{0}' is outside the template directory")]
    TemplatePathOutsideBase(String),

    /// Template file is not valid JSON.
    #[error("Malformed template '{filename}': {details}")]
    MalformedTemplate { filename: String, details: String },

    /// Merged story does not match the User Story structure.
    #[error("Invalid User Story: {0}")]
    InvalidUserStory(String),

    /// Project lookup failed on the tracker.
    #[error("Project \"{0}\" not found or unauthorized.")]
    ProjectNotFound(String),

    /// Tracker rejected the credentials.
    #[error("Unable to authenticate into Taiga: {0}")]
    Authentication(String),

    /// Tracker call failed with a non-success status.
    #[error("Taiga API error ({status}): {details}")]
    TrackerApi { status: u16, details: String },

    /// Tracker could not be reached or answered with an unreadable body.
    #[error("Taiga request failed: {0}")]
    TrackerTransport(String),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub fn missing_parameters<S: Into<String>>(message: S) -> Self {
        AppError::MissingParameters(message.into())
    }

    /// HTTP status reported by the webhook entry point for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            AppError::MissingParameters(_)
            | AppError::InvalidPayload(_)
            | AppError::TemplatePathOutsideBase(_)
            | AppError::InvalidUserStory(_)
            | AppError::ProjectNotFound(_)
            | AppError::TrackerApi { .. }
            | AppError::TrackerTransport(_) => 400,
            AppError::TemplateNotFound { .. } => 404,
            AppError::TemplatePermission { .. } => 403,
            AppError::MalformedTemplate { .. } => 422,
            AppError::Authentication(_)
            | AppError::Io(_)
            | AppError::Configuration(_)
            | AppError::TomlParseError(_) => 500,
        }
    }
}
