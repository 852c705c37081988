//! MCP (Model Context Protocol) server for sazed-mcp.
//!
//! Exposes the Sazed agent's chat endpoint as a single MCP tool so a desktop
//! assistant can delegate personal-context questions to it.
//!
//! # Architecture
//!
//! ```text
//! MCP Client (desktop assistant)
//!   ↓ ask_sazed(message)      [stdio JSON-RPC]
//! SazedMcpServer (ToolRouter lookup)
//!   ↓
//! AgentClient::chat()
//!   ↓ POST {agent_url}/chat
//! reply text → CallToolResult → MCP Client
//! ```

pub mod params;
pub mod server;
pub mod transport;

pub use params::AskParams;
pub use server::{ASK_TOOL_NAME, SazedMcpServer};
pub use transport::serve_stdio;
