//! Command implementations.
//!
//! Settings are loaded before any runtime is started so a misconfigured
//! process exits without serving anything.

use crate::agent::{AgentClient, AgentSettings};
use crate::cli::parser::{Cli, Commands};
use crate::error::{CommandError, Result};
use crate::mcp::{SazedMcpServer, serve_stdio};

/// Executes the parsed CLI command.
///
/// # Returns
///
/// Text to print on stdout (empty for `serve`).
///
/// # Errors
///
/// Returns a configuration error if the settings cannot be loaded, or the
/// underlying agent/transport error if the command fails.
pub fn execute(cli: &Cli) -> Result<String> {
    let settings = AgentSettings::load(cli.env_file.as_deref())?;
    tracing::info!(agent = %settings.base_url, "loaded agent settings");
    let client = AgentClient::new(settings);

    match cli.resolved_command() {
        Commands::Serve => cmd_serve(client),
        Commands::Ask { message } => cmd_ask(&client, &message),
    }
}

fn runtime() -> Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|e| {
            CommandError::ExecutionFailed(format!("Failed to create async runtime: {e}")).into()
        })
}

fn cmd_serve(client: AgentClient) -> Result<String> {
    let server = SazedMcpServer::new(client);

    runtime()?
        .block_on(serve_stdio(server))
        .map_err(|e| CommandError::ExecutionFailed(format!("MCP server error: {e}")))?;

    Ok(String::new())
}

fn cmd_ask(client: &AgentClient, message: &str) -> Result<String> {
    let reply = runtime()?.block_on(client.chat(message))?;
    Ok(reply)
}
