use std::fmt;

use async_trait::async_trait;

use super::types::User;

/// Errors that can occur while fetching users.
#[derive(Debug)]
pub enum SourceError {
    /// Source misconfigured (bad URL, zero results requested).
    Config(String),
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// API returned a non-success status.
    Api { status: u16, message: String },
    /// The payload didn't match the expected shape.
    Parse(String),
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceError::Config(msg) => write!(f, "config error: {msg}"),
            SourceError::Network(msg) => write!(f, "network error: {msg}"),
            SourceError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            SourceError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for SourceError {}

/// Supplies the initial batch of user records.
#[async_trait]
pub trait UserSource: Send + Sync {
    /// Returns the name of the source, for logging.
    fn name(&self) -> &str;

    /// Fetches users in the order the source returns them.
    async fn fetch_users(&self) -> Result<Vec<User>, SourceError>;
}
