//! Error types for sazed-mcp.
//!
//! Each concern gets its own error enum; [`Error`] unifies them for the
//! command layer.

use std::path::PathBuf;

use thiserror::Error;

/// Convenience result alias using the crate-wide [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Startup configuration failure.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Failure while talking to the remote agent service.
    #[error(transparent)]
    Agent(#[from] AgentError),

    /// Command execution failure.
    #[error(transparent)]
    Command(#[from] CommandError),
}

/// Errors raised while loading [`AgentSettings`](crate::agent::AgentSettings).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required setting is absent or empty.
    #[error("missing required setting `{var}` (set it in the environment or a .env file)")]
    Missing {
        /// Variable name as documented (lowercase).
        var: &'static str,
    },

    /// The agent URL is not an absolute http(s) URL.
    #[error("invalid agent_url `{url}`: expected an http:// or https:// URL")]
    InvalidUrl {
        /// The rejected value.
        url: String,
    },

    /// An explicitly requested `.env` file could not be read or parsed.
    #[error("failed to read env file {}: {source}", path.display())]
    EnvFile {
        /// Path of the env file.
        path: PathBuf,
        /// Underlying dotenvy error.
        #[source]
        source: dotenvy::Error,
    },
}

/// Errors raised by the chat forwarder.
#[derive(Debug, Error)]
pub enum AgentError {
    /// The request did not complete within the configured timeout.
    #[error("agent request timed out after {secs}s")]
    Timeout {
        /// Timeout in seconds.
        secs: u64,
    },

    /// Connection or other transport-level failure.
    #[error("agent request failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// The agent answered with a non-success HTTP status.
    #[error("agent returned HTTP {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body text (may be empty).
        body: String,
    },

    /// The response body was not the expected JSON shape.
    #[error("failed to parse agent response: {0}")]
    ResponseParse(String),

    /// The response JSON had no `response` field.
    #[error("agent response is missing the `response` field")]
    MissingResponse,
}

/// Errors raised by CLI command execution.
#[derive(Debug, Error)]
pub enum CommandError {
    /// Generic execution failure with context.
    #[error("{0}")]
    ExecutionFailed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_message_names_variable() {
        let err = ConfigError::Missing { var: "agent_url" };
        assert!(err.to_string().contains("agent_url"));
    }

    #[test]
    fn test_status_message_includes_body() {
        let err = AgentError::Status {
            status: 503,
            body: "overloaded".to_string(),
        };
        assert_eq!(err.to_string(), "agent returned HTTP 503: overloaded");
    }

    #[test]
    fn test_transparent_wrapping() {
        let err: Error = AgentError::MissingResponse.into();
        assert_eq!(
            err.to_string(),
            "agent response is missing the `response` field"
        );
    }
}
