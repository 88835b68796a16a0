//! Error types for registry access

use thiserror::Error;

/// Result type for registry operations
pub type Result<T> = std::result::Result<T, RegistryError>;

/// Errors raised while talking to the schema registry
#[derive(Error, Debug)]
pub enum RegistryError {
    /// Connection, DNS or timeout failure. Never retried.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected status code: {status} for {url}")]
    Status { status: u16, url: String },

    #[error("failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid subject: {subject}")]
    MalformedSubject { subject: String },

    #[error("no versions registered for schema id {id}")]
    NoVersions { id: i64 },

    #[error("environment variable {var} is not set")]
    MissingEnv { var: &'static str },

    #[error("credentials cannot be used as an HTTP header")]
    InvalidCredentials,
}

impl RegistryError {
    /// HTTP status code, when the registry answered with a non-200 response
    pub fn status(&self) -> Option<u16> {
        match self {
            RegistryError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
