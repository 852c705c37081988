//! MCP stdio transport.

use rmcp::ServiceExt;
use rmcp::transport::io::stdio;
use tracing::info;

use super::server::SazedMcpServer;

/// Starts the MCP server with stdio transport.
///
/// The server reads JSON-RPC messages from stdin and writes responses to
/// stdout until the host closes the stream.
///
/// # Errors
///
/// Returns an error if the server fails to start or encounters a runtime error.
pub async fn serve_stdio(server: SazedMcpServer) -> anyhow::Result<()> {
    info!(agent = %server.client().settings().base_url, "serving MCP over stdio");
    let service = server.serve(stdio()).await.inspect_err(|e| {
        tracing::error!("MCP serve error: {e:?}");
    })?;
    let reason = service.waiting().await?;
    info!(?reason, "MCP session closed");
    Ok(())
}
