use std::fmt;

use async_trait::async_trait;

use super::types::Resource;

/// Errors that can occur while fetching the photo list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// No connectivity, timeout, or a transport fault while sending or reading.
    Network(String),
    /// Server answered, but with a non-success status or a body of the wrong shape.
    Protocol(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Network(msg) => write!(f, "network error: {msg}"),
            FetchError::Protocol(msg) => write!(f, "protocol error: {msg}"),
        }
    }
}

impl std::error::Error for FetchError {}

/// Something the fetch controller can pull the photo list from.
#[async_trait]
pub trait ResourceSource: Send + Sync {
    /// Returns the name of the source, for logging.
    fn name(&self) -> &str;

    /// Fetches the full list. An empty list is a success.
    async fn fetch_resources(&self) -> Result<Vec<Resource>, FetchError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_the_error_kind() {
        assert_eq!(
            FetchError::Network("connection refused".to_string()).to_string(),
            "network error: connection refused"
        );
        assert_eq!(
            FetchError::Protocol("HTTP 500".to_string()).to_string(),
            "protocol error: HTTP 500"
        );
    }
}
