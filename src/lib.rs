//! # sazed-mcp
//!
//! MCP (Model Context Protocol) adapter for the Sazed personal agent.
//!
//! Exposes one tool, `ask_sazed`, over stdio. Each invocation forwards the
//! message to the agent service's `POST /chat` endpoint with a fixed session
//! id and returns the agent's textual reply.
//!
//! ## Configuration
//!
//! | Variable        | Description                          |
//! |-----------------|--------------------------------------|
//! | `agent_url`     | Base URL of the agent service        |
//! | `agent_api_key` | Sent as the `X-API-Key` header       |
//!
//! Both are required and may come from the environment or a `.env` file.

pub mod agent;
pub mod cli;
pub mod error;
pub mod mcp;

pub use agent::{AgentClient, AgentSettings, SESSION_ID};
pub use error::{AgentError, CommandError, ConfigError, Error, Result};
pub use mcp::{SazedMcpServer, serve_stdio};
