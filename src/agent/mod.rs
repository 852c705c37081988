//! Client side of the Sazed agent service.
//!
//! Loads connection settings once at startup and forwards chat messages to
//! the service's `/chat` endpoint.
//!
//! # Architecture
//!
//! ```text
//! AgentSettings::load (env + .env)
//!   ↓
//! AgentClient::chat(message)
//!   ↓ POST {agent_url}/chat  (X-API-Key, {"message", "session_id"})
//! {"response": "..."} → String
//! ```

pub mod client;
pub mod config;
pub mod message;

// Re-export key types
pub use client::AgentClient;
pub use config::AgentSettings;
pub use message::{ChatRequest, SESSION_ID};
