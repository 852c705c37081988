//! CLI layer for sazed-mcp.
//!
//! Provides the command-line interface using clap: serve the MCP tool over
//! stdio, or send a one-off message to the agent.

pub mod commands;
pub mod parser;

pub use commands::execute;
pub use parser::{Cli, Commands};
