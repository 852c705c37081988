//! Wire types for the agent service's `/chat` endpoint.

use serde::Serialize;
use serde_json::Value;

use crate::error::AgentError;

/// Session identifier sent with every request.
///
/// Constant for the process lifetime and across restarts so the agent
/// service keeps one conversation context for the desktop client.
pub const SESSION_ID: &str = "mcp-claude-desktop";

/// Request body for `POST /chat`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChatRequest<'a> {
    /// User message, forwarded verbatim.
    pub message: &'a str,
    /// Conversation correlation id.
    pub session_id: &'a str,
}

impl<'a> ChatRequest<'a> {
    /// Creates a request for `message` under the fixed [`SESSION_ID`].
    #[must_use]
    pub const fn new(message: &'a str) -> Self {
        Self {
            message,
            session_id: SESSION_ID,
        }
    }
}

/// Extracts the `response` string from a `/chat` response body.
///
/// All other fields are ignored.
///
/// # Errors
///
/// Returns [`AgentError::ResponseParse`] if the body is not JSON or the
/// field is not a string, and [`AgentError::MissingResponse`] if the body
/// has no `response` field.
pub fn extract_response(body: &str) -> Result<String, AgentError> {
    let value: Value =
        serde_json::from_str(body).map_err(|e| AgentError::ResponseParse(e.to_string()))?;

    match value.get("response") {
        Some(Value::String(text)) => Ok(text.clone()),
        Some(other) => Err(AgentError::ResponseParse(format!(
            "`response` is not a string: {other}"
        ))),
        None => Err(AgentError::MissingResponse),
    }
}
