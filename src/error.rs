use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Reply sent when the agent service answers with a non-success status.
pub const STATUS_ERROR_TEXT: &str = "Error connecting to the agent service.";

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid activity: {0}")]
    InvalidActivity(String),

    #[error("Connector error: {0}")]
    Connector(String),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Address parse error: {0}")]
    AddrParse(#[from] std::net::AddrParseError),
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn invalid_activity(msg: impl Into<String>) -> Self {
        Self::InvalidActivity(msg.into())
    }

    pub fn connector(msg: impl Into<String>) -> Self {
        Self::Connector(msg.into())
    }
}

/// Failure of a single call to the remote agent service.
///
/// Every variant is terminal for the current turn and maps to exactly one
/// user-facing reply through [`RelayError::user_message`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RelayError {
    /// The request never produced a readable response: connect failure,
    /// timeout, or a broken body stream.
    #[error("{0}")]
    Transport(String),

    /// The agent answered with a non-success status. The body is discarded.
    #[error("agent service returned status {0}")]
    Status(u16),

    /// A success response whose body is not `{"response": "<text>"}`.
    #[error("malformed agent response: {0}")]
    Decode(String),
}

impl RelayError {
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::Status(_) => STATUS_ERROR_TEXT.to_string(),
            other => format!("An error occurred: {other}"),
        }
    }
}

impl From<reqwest::Error> for RelayError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}
