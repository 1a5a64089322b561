//! Error types for the rdkdler application.

use thiserror::Error;

use crate::transcode::TranscodeError;

/// Main error type for the application.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration value for '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    #[error("Missing required configuration: {0}")]
    MissingConfig(String),

    // Precondition failures raised before any I/O
    #[error("Validation failed: {0}")]
    Validation(String),

    // radiko API errors
    #[error("HTTP error code: {status}")]
    Http { status: u16, body: String },

    #[error("{detail}")]
    Response { detail: String },

    // Download errors
    #[error("Download failed: {source}")]
    Download {
        #[source]
        source: TranscodeError,
    },

    #[error(transparent)]
    Transcode(#[from] TranscodeError),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Transport errors
    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    // URL parsing errors
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Build a response-contract error.
    pub fn response(detail: impl Into<String>) -> Self {
        Error::Response {
            detail: detail.into(),
        }
    }

    /// HTTP status carried by this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Http { status, .. } => Some(*status),
            Error::Request(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Process exit code for this error category.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Config(_)
            | Error::ConfigValidation { .. }
            | Error::MissingConfig(_)
            | Error::Validation(_)
            | Error::TomlParse(_) => exit_codes::CONFIG_ERROR,
            Error::Http { .. } | Error::Response { .. } | Error::Request(_) | Error::Json(_) => {
                exit_codes::API_ERROR
            }
            Error::Download { .. } | Error::Transcode(_) => exit_codes::DOWNLOAD_ERROR,
            _ => exit_codes::UNEXPECTED_ERROR,
        }
    }
}

/// Process exit codes.
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const API_ERROR: i32 = 2;
    pub const CONFIG_ERROR: i32 = 3;
    pub const DOWNLOAD_ERROR: i32 = 4;
    pub const UNEXPECTED_ERROR: i32 = 5;
}
