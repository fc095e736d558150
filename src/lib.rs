//! Google Classroom MCP server.
//!
//! Exposes every Classroom v1 REST operation as a Model Context Protocol
//! tool. Each tool validates its path parameters, builds the query string
//! (including credentials), re-encodes its body through the typed Classroom
//! schema, makes exactly one HTTP call and returns the pretty-printed
//! response.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the MCP server and transports
//! - **domains**
//!   - **models**: Classroom schema records
//!   - **tools**: endpoint table, generic executor, registry and router
//!
//! # Example
//!
//! ```rust,no_run
//! use classroom_mcp_server::core::{Config, McpServer, TransportService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let transport = TransportService::new(config.transport.clone());
//!     let server = McpServer::new(config)?;
//!     transport.run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

pub use core::{Config, Error, McpServer, Result};
