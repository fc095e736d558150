//! Core module containing shared infrastructure components.
//!
//! Configuration, the unified error type, the MCP server handler and the
//! transport layer.

pub mod config;
pub mod error;
pub mod server;
pub mod transport;

pub use config::Config;
pub use error::{Error, Result};
pub use server::McpServer;
pub use transport::{TransportConfig, TransportService};
