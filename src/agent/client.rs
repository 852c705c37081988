//! HTTP client for the remote agent service.
//!
//! Each [`AgentClient::chat`] call builds its own `reqwest` client and drops
//! it on return; nothing is pooled across calls.

use tracing::{debug, warn};

use crate::agent::config::AgentSettings;
use crate::agent::message::{ChatRequest, extract_response};
use crate::error::AgentError;

/// Header carrying the agent API key.
pub const API_KEY_HEADER: &str = "X-API-Key";

/// Forwards chat messages to the agent service.
#[derive(Debug, Clone)]
pub struct AgentClient {
    settings: AgentSettings,
}

impl AgentClient {
    /// Creates a client for the given settings.
    #[must_use]
    pub const fn new(settings: AgentSettings) -> Self {
        Self { settings }
    }

    /// Returns the settings this client was built with.
    #[must_use]
    pub const fn settings(&self) -> &AgentSettings {
        &self.settings
    }

    /// Sends `message` to `POST {base_url}/chat` and returns the agent's reply.
    ///
    /// Issues exactly one request; there are no retries and redirects are
    /// not followed, so a 3xx is reported as [`AgentError::Status`].
    ///
    /// # Errors
    ///
    /// - [`AgentError::Timeout`] if the request exceeds the configured timeout
    /// - [`AgentError::Transport`] on connection failures
    /// - [`AgentError::Status`] for a non-2xx response
    /// - [`AgentError::ResponseParse`] / [`AgentError::MissingResponse`] if
    ///   the body lacks a string `response` field
    pub async fn chat(&self, message: &str) -> Result<String, AgentError> {
        let url = self.settings.chat_url();
        debug!(%url, message_len = message.len(), "forwarding message to agent");

        let http = reqwest::Client::builder()
            .timeout(self.settings.timeout)
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(AgentError::Transport)?;

        let response = http
            .post(&url)
            .header(API_KEY_HEADER, &self.settings.api_key)
            .json(&ChatRequest::new(message))
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| self.classify(e))?;

        if !status.is_success() {
            warn!(status = status.as_u16(), "agent returned an error status");
            return Err(AgentError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let reply = extract_response(&body).inspect_err(|e| {
            warn!(error = %e, "unexpected agent response body");
        })?;
        debug!(reply_len = reply.len(), "agent replied");
        Ok(reply)
    }

    fn classify(&self, err: reqwest::Error) -> AgentError {
        if err.is_timeout() {
            warn!(secs = self.settings.timeout.as_secs(), "agent request timed out");
            AgentError::Timeout {
                secs: self.settings.timeout.as_secs(),
            }
        } else {
            warn!(error = %err, "agent request failed");
            AgentError::Transport(err)
        }
    }
}
