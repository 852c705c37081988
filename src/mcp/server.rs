//! MCP server implementation for sazed-mcp.
//!
//! Registers a single tool, `ask_sazed`, that forwards its `message`
//! argument to the agent service through [`AgentClient`].

use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo, Tool,
};
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};
use tracing::{info, warn};

use crate::agent::AgentClient;

use super::params::AskParams;

/// Name under which the forwarder is registered.
pub const ASK_TOOL_NAME: &str = "ask_sazed";

/// Sazed MCP server.
///
/// Cheap to clone; all clones share one [`AgentClient`].
#[derive(Clone)]
pub struct SazedMcpServer {
    tool_router: ToolRouter<Self>,
    client: Arc<AgentClient>,
}

#[tool_router]
impl SazedMcpServer {
    /// Forward a message to the Sazed agent and return its reply.
    #[tool(
        name = "ask_sazed",
        description = "Send a message to Sazed, your personal AI agent. Sazed has access to your calendar, tasks, email, knowledge base, and persistent memory. Use this for anything requiring personal context or integrations."
    )]
    async fn ask_sazed(
        &self,
        Parameters(params): Parameters<AskParams>,
    ) -> Result<CallToolResult, McpError> {
        Ok(self.ask(&params.message).await)
    }
}

#[tool_handler]
impl ServerHandler for SazedMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "sazed".to_string(),
                title: Some("Sazed MCP Server".to_string()),
                version: env!("CARGO_PKG_VERSION").to_string(),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Sazed: a personal AI agent with access to calendar, tasks, email, knowledge \
                 base, and persistent memory. Use the `ask_sazed` tool with a natural-language \
                 message."
                    .to_string(),
            ),
        }
    }
}

impl SazedMcpServer {
    /// Creates a new MCP server backed by `client`.
    #[must_use]
    pub fn new(client: AgentClient) -> Self {
        Self {
            tool_router: Self::tool_router(),
            client: Arc::new(client),
        }
    }

    /// Returns the agent client.
    #[must_use]
    pub fn client(&self) -> &AgentClient {
        &self.client
    }

    /// Lists the registered tools.
    #[must_use]
    pub fn tools(&self) -> Vec<Tool> {
        self.tool_router.list_all()
    }

    /// Forwards `message` and wraps the outcome as a tool result.
    ///
    /// Agent failures become an error result (`isError: true`) carrying the
    /// error text, so the host sees a failed tool call rather than a
    /// protocol error.
    pub async fn ask(&self, message: &str) -> CallToolResult {
        match self.client.chat(message).await {
            Ok(reply) => {
                info!(tool = ASK_TOOL_NAME, "tool call succeeded");
                CallToolResult::success(vec![Content::text(reply)])
            }
            Err(e) => {
                warn!(tool = ASK_TOOL_NAME, error = %e, "tool call failed");
                CallToolResult::error(vec![Content::text(e.to_string())])
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::AgentSettings;

    fn server() -> SazedMcpServer {
        let settings = AgentSettings::builder()
            .base_url("http://127.0.0.1:9")
            .api_key("test")
            .build()
            .unwrap_or_else(|_| unreachable!());
        SazedMcpServer::new(AgentClient::new(settings))
    }

    #[test]
    fn test_single_tool_registered() {
        let tools = server().tools();
        assert_eq!(tools.len(), 1);
        assert_eq!(tools[0].name, ASK_TOOL_NAME);
        assert!(
            tools[0]
                .description
                .as_deref()
                .is_some_and(|d| d.starts_with("Send a message to Sazed"))
        );
    }

    #[test]
    fn test_tool_schema_has_message_string() {
        let tools = server().tools();
        let schema = &tools[0].input_schema;
        let message = schema
            .get("properties")
            .and_then(|p| p.get("message"))
            .unwrap_or_else(|| unreachable!());
        assert_eq!(message.get("type").and_then(|t| t.as_str()), Some("string"));
        let required = schema
            .get("required")
            .and_then(|r| r.as_array())
            .unwrap_or_else(|| unreachable!());
        assert!(required.iter().any(|r| r == "message"));
    }

    #[test]
    fn test_server_info() {
        let info = server().get_info();
        assert_eq!(info.server_info.name, "sazed");
        assert!(info.capabilities.tools.is_some());
        assert!(info.capabilities.resources.is_none());
    }
}
