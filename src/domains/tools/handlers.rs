//! Tool handlers.
//!
//! A [`ToolHandler`] is one callable tool: it advertises an rmcp [`Tool`]
//! definition and turns an argument map into a [`CallToolResult`]. Every
//! Classroom operation is served by the same handler type, [`EndpointTool`],
//! parameterized by an entry of the endpoint table.

use std::sync::Arc;

use async_trait::async_trait;
use rmcp::model::{CallToolResult, JsonObject, Tool};
use tracing::{info, instrument};

use super::client::ClassroomClient;
use super::endpoint::Endpoint;
use super::executor;

/// A callable tool.
#[async_trait]
pub trait ToolHandler: Send + Sync {
    /// Name the tool is registered under.
    fn name(&self) -> &str;

    /// Metadata advertised to clients.
    fn definition(&self) -> Tool;

    /// Execute the tool. Failures are reported in the result.
    async fn call(&self, arguments: JsonObject) -> CallToolResult;
}

/// Tool backed by one Classroom REST endpoint.
#[derive(Debug, Clone)]
pub struct EndpointTool {
    name: String,
    endpoint: &'static Endpoint,
    client: ClassroomClient,
}

impl EndpointTool {
    pub fn new(endpoint: &'static Endpoint, client: ClassroomClient) -> Self {
        Self {
            name: endpoint.tool_name(),
            endpoint,
            client,
        }
    }
}

#[async_trait]
impl ToolHandler for EndpointTool {
    fn name(&self) -> &str {
        &self.name
    }

    fn definition(&self) -> Tool {
        Tool {
            name: self.name.clone().into(),
            description: Some(self.endpoint.description.into()),
            input_schema: Arc::new(self.endpoint.input_schema()),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    #[instrument(skip_all, fields(tool = %self.name))]
    async fn call(&self, arguments: JsonObject) -> CallToolResult {
        info!("Tool called");
        executor::execute(self.endpoint, &arguments, &self.client).await
    }
}
