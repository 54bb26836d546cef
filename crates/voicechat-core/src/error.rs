use thiserror::Error;

/// Failure of a round trip to either endpoint
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChatError {
    #[error("request failed: {0}")]
    Network(String),

    #[error("server returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("invalid response: {0}")]
    Decode(String),

    #[error("failed to encode request: {0}")]
    Encode(String),
}

impl From<serde_json::Error> for ChatError {
    fn from(err: serde_json::Error) -> Self {
        ChatError::Decode(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpeechError {
    #[error("speech recognition is not supported")]
    Unsupported,

    #[error("speech recognition failed to start: {0}")]
    Start(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}
