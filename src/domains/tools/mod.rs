//! Tools domain module.
//!
//! Every Classroom REST operation is exposed as one MCP tool. Operations are
//! described as data and driven by a single generic executor.
//!
//! ## Architecture
//!
//! - `definitions/` - the endpoint table, one file per resource family
//! - `endpoint.rs` - endpoint description and tool naming/schema derivation
//! - `codec.rs` - typed request/response hooks for one schema
//! - `arguments.rs` - path, query, auth and body extraction
//! - `client.rs` - shared Classroom HTTP client
//! - `executor.rs` - the generic request executor
//! - `handlers.rs` - `ToolHandler` trait and the endpoint-backed tool
//! - `registry.rs` - tool registry and HTTP dispatch
//! - `router.rs` - rmcp ToolRouter for STDIO/TCP transport
//! - `error.rs` - tool error taxonomy
//!
//! ## Adding an Operation
//!
//! Add an [`Endpoint`] entry to the matching file in `definitions/`. The
//! registry, router and HTTP transport pick it up automatically.

pub mod arguments;
pub mod client;
pub mod codec;
pub mod definitions;
pub mod endpoint;
mod error;
pub mod executor;
mod handlers;
mod registry;
pub mod router;

#[cfg(test)]
mod stub;

pub use client::ClassroomClient;
pub use endpoint::{Endpoint, HttpMethod, Param, ParamKind};
pub use error::ToolError;
pub use handlers::{EndpointTool, ToolHandler};
pub use registry::ToolRegistry;
pub use router::build_tool_router;
