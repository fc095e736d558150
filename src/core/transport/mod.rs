//! Transport layer for the MCP server.
//!
//! Implementations, each behind a cargo feature:
//! - `stdio` (default): standard input/output
//! - `tcp`: raw TCP socket with line-delimited JSON-RPC (adds tokio/net)
//! - `http`: JSON-RPC over HTTP POST (adds axum and tower-http)
//!
//! The transport is picked at runtime with `MCP_TRANSPORT`.

mod config;
mod error;
mod service;

#[cfg(feature = "http")]
pub mod http;

#[cfg(feature = "tcp")]
pub mod tcp;

#[cfg(feature = "stdio")]
pub mod stdio;

pub use config::TransportConfig;
pub use error::{TransportError, TransportResult};
pub use service::TransportService;

#[cfg(feature = "tcp")]
pub use config::TcpConfig;

#[cfg(feature = "http")]
pub use config::HttpConfig;
