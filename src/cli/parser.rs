//! Command-line argument parsing.
//!
//! Defines the CLI structure using clap derive macros.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// sazed-mcp: MCP bridge to the Sazed personal agent.
///
/// Without a subcommand, serves the `ask_sazed` tool over stdio.
#[derive(Parser, Debug)]
#[command(name = "sazed-mcp")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to a .env file with `agent_url` and `agent_api_key`.
    ///
    /// Defaults to `.env` in the current directory when present.
    #[arg(short, long, env = "SAZED_ENV_FILE", global = true)]
    pub env_file: Option<PathBuf>,

    /// Enable verbose (debug) logging on stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Serve the MCP tool over stdio (default).
    Serve,

    /// Send a single message to the agent and print the reply.
    #[command(after_help = r#"Examples:
  sazed-mcp ask "what's on my calendar today?"
  sazed-mcp --env-file ~/.config/sazed.env ask "any new email?"
"#)]
    Ask {
        /// Message to send.
        message: String,
    },
}

impl Cli {
    /// Returns the command to run, defaulting to [`Commands::Serve`].
    #[must_use]
    pub fn resolved_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Serve)
    }
}
