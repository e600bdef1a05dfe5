use thiserror::Error;

/// Failure talking to the goal endpoints.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected status {status}")]
    Status { status: u16, error: Option<String> },
    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("invalid url: {0}")]
    Url(String),
}

impl ClientError {
    pub fn status(status: u16, error: Option<String>) -> Self {
        Self::Status {
            status,
            error: error.filter(|message| !message.is_empty()),
        }
    }

    /// Error text the server attached to a non-2xx response, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Status { error, .. } => error.as_deref(),
            _ => None,
        }
    }
}

pub type ApiResult<T> = Result<T, ClientError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WidgetError {
    #[error("modal is already open")]
    AlreadyOpen,
    #[error("modal is not open")]
    NotOpen,
    #[error("form is already submitting")]
    AlreadySubmitting,
    #[error("form is not submitting")]
    NotSubmitting,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid base url {value:?}: {reason}")]
    InvalidBaseUrl { value: String, reason: String },
    #[error("invalid toast delay {0:?}")]
    InvalidToastDelay(String),
}
