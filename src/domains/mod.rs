//! Domains module containing business logic organized by bounded contexts.
//!
//! - `models`: Classroom schema records
//! - `tools`: the MCP tools that call the Classroom API

pub mod models;
pub mod tools;
