//! Tool Registry - central registration and dispatch for all tools.
//!
//! The registry is built once at startup from the endpoint table and never
//! changes afterwards. Both transports read from it: STDIO/TCP through the
//! rmcp router built in `router.rs`, HTTP through [`ToolRegistry::call_tool`].

use std::sync::Arc;

use rmcp::model::{CallToolResult, Tool};
use serde_json::Value;
use tracing::warn;

use super::client::ClassroomClient;
use super::definitions;
use super::error::ToolError;
use super::handlers::{EndpointTool, ToolHandler};

/// Tool registry - manages all available tools.
#[derive(Clone)]
pub struct ToolRegistry {
    tools: Vec<Arc<dyn ToolHandler>>,
}

impl ToolRegistry {
    /// Create the registry, binding every endpoint to the shared client.
    pub fn new(client: ClassroomClient) -> Self {
        let tools = definitions::all()
            .map(|endpoint| {
                Arc::new(EndpointTool::new(endpoint, client.clone())) as Arc<dyn ToolHandler>
            })
            .collect();
        Self { tools }
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&str> {
        self.tools.iter().map(|t| t.name()).collect()
    }

    /// Get all tools as Tool models (metadata).
    pub fn get_all_tools(&self) -> Vec<Tool> {
        self.tools.iter().map(|t| t.definition()).collect()
    }

    /// Look up a tool by name.
    pub fn get(&self, name: &str) -> Option<&Arc<dyn ToolHandler>> {
        self.tools.iter().find(|t| t.name() == name)
    }

    /// All registered handlers, in table order.
    pub fn handlers(&self) -> &[Arc<dyn ToolHandler>] {
        &self.tools
    }

    /// Dispatch a tool call by name.
    ///
    /// Only an unknown name or a non-object argument value is an `Err`;
    /// everything that goes wrong inside the tool is reported in the result.
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: Value,
    ) -> Result<CallToolResult, ToolError> {
        let Some(tool) = self.get(name) else {
            warn!("Unknown tool requested: {}", name);
            return Err(ToolError::not_found(name));
        };

        let arguments = match arguments {
            Value::Object(map) => map,
            Value::Null => Default::default(),
            _ => return Err(ToolError::InvalidArguments),
        };

        Ok(tool.call(arguments).await)
    }
}

impl std::fmt::Debug for ToolRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolRegistry")
            .field("tools", &self.tool_names())
            .finish()
    }
}
