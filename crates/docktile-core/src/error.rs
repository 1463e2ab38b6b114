use std::fmt;
use std::time::Duration;

/// Failure of a single data-source fetch. Never fatal: the list widget keeps
/// its last rendered state and hands this back to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    Cancelled,
    Timeout(Duration),
    Connection(String),
    Api(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cancelled => write!(f, "Fetch cancelled"),
            Self::Timeout(after) => write!(f, "Fetch timed out after {}ms", after.as_millis()),
            Self::Connection(msg) => write!(f, "Connection failed: {msg}"),
            Self::Api(msg) => write!(f, "API error: {msg}"),
        }
    }
}

impl std::error::Error for FetchError {}

impl From<bollard::errors::Error> for FetchError {
    fn from(err: bollard::errors::Error) -> Self {
        use bollard::errors::Error;

        match err {
            Error::DockerResponseServerError { message, .. } => Self::Api(message),
            Error::IOError { .. } => Self::Connection(err.to_string()),
            Error::RequestTimeoutError => Self::Timeout(Duration::ZERO),
            other => Self::Api(other.to_string()),
        }
    }
}
