//! Tool Router - builds the rmcp ToolRouter from the registry.
//!
//! Used by the STDIO and TCP transports: one dynamic route per registered
//! tool, each delegating to the tool's handler.

use futures::FutureExt;
use rmcp::ErrorData;
use rmcp::handler::server::tool::{ToolCallContext, ToolRoute, ToolRouter};

use super::registry::ToolRegistry;

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(registry: &ToolRegistry) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    registry
        .handlers()
        .iter()
        .fold(ToolRouter::new(), |router, handler| {
            let handler = handler.clone();
            router.with_route(ToolRoute::new_dyn(
                handler.definition(),
                move |ctx: ToolCallContext<'_, S>| {
                    let arguments = ctx.arguments.clone().unwrap_or_default();
                    let handler = handler.clone();
                    async move { Ok::<_, ErrorData>(handler.call(arguments).await) }.boxed()
                },
            ))
        })
}
