use thiserror::Error;

/// Main error type for the session and data-access layer
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Storage error for key '{key}': {source}")]
    Storage {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Request failed with HTTP {status}: {status_text}")]
    RequestFailed { status: u16, status_text: String },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Query encoding error: {0}")]
    Query(String),
}

impl ClientError {
    pub fn storage(key: &str, source: std::io::Error) -> Self {
        Self::Storage {
            key: key.to_string(),
            source,
        }
    }

    /// HTTP status carried by a `RequestFailed` error
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::RequestFailed { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_builder() {
            return Self::Config(err.to_string());
        }
        // Anything else from reqwest means no usable response reached us
        Self::Transport(err.to_string())
    }
}

impl From<serde_urlencoded::ser::Error> for ClientError {
    fn from(err: serde_urlencoded::ser::Error) -> Self {
        Self::Query(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
