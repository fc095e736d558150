//! MCP Server implementation and lifecycle management.
//!
//! The server owns the tool registry and the rmcp router built from it. It
//! advertises the tools capability only; every tool is a Classroom REST call.

use rmcp::{ServerHandler, handler::server::tool::ToolRouter, model::*, tool_handler};
use std::sync::Arc;
use tracing::info;

use super::config::Config;
use super::error::Result as CoreResult;
use crate::domains::tools::{ClassroomClient, ToolError, ToolRegistry, build_tool_router};

pub(crate) const INSTRUCTIONS: &str = "Google Classroom API tools. Each tool maps to one \
    Classroom v1 REST operation and is named after its method and path, e.g. \
    `get_v1_courses` or `post_v1_courses_courseId_announcements`. Path parameters are \
    required; list operations return a nextPageToken to pass back as pageToken; patch \
    operations take an updateMask.";

/// The main MCP server handler.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Registry of Classroom tools (used directly by the HTTP transport).
    registry: Arc<ToolRegistry>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    ///
    /// Fails only if the Classroom HTTP client cannot be built.
    pub fn new(config: Config) -> CoreResult<Self> {
        let config = Arc::new(config);
        let client = ClassroomClient::new(&config.api)?;
        let registry = Arc::new(ToolRegistry::new(client));
        info!("Registered {} Classroom tools", registry.handlers().len());

        Ok(Self {
            tool_router: build_tool_router::<Self>(&registry),
            registry,
            config,
        })
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the server configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// List all available tools (for HTTP transport).
    pub fn list_tools(&self) -> Vec<Tool> {
        self.registry.get_all_tools()
    }

    /// Call a tool by name (for HTTP transport).
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<CallToolResult, ToolError> {
        self.registry.call_tool(name, arguments).await
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}
