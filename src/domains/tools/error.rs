//! Tool-specific error types.
//!
//! Every variant is a *reported* failure: it is rendered into an error
//! `CallToolResult` and handed back to the caller, never propagated as a
//! protocol error, so the server keeps serving subsequent calls.

use rmcp::model::{CallToolResult, Content};
use thiserror::Error;

/// Errors that can occur during tool operations.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The requested tool was not found.
    #[error("Tool not found: {0}")]
    NotFound(String),

    /// The arguments were not a JSON object.
    #[error("Invalid arguments object")]
    InvalidArguments,

    /// A required path parameter was absent.
    #[error("Missing required path parameter: {0}")]
    MissingParameter(&'static str),

    /// A required path parameter was present but not a non-empty string.
    #[error("Missing required path parameter: {0} (expected a non-empty string)")]
    InvalidParameter(&'static str),

    /// The argument map does not fit the request schema.
    #[error("Failed to convert arguments to request type: {0}")]
    Conversion(#[source] serde_json::Error),

    /// The request URL could not be built.
    #[error("Failed to create request: {0}")]
    Request(String),

    /// The HTTP round trip itself failed (DNS, connect, timeout).
    #[error("Request failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// The response body could not be read.
    #[error("Failed to read response body: {0}")]
    ReadBody(#[source] reqwest::Error),

    /// The Classroom API answered with a status of 400 or above.
    #[error("API error ({status}): {body}")]
    Api { status: u16, body: String },

    /// A decoded response could not be rendered back to JSON.
    #[error("Failed to format JSON: {0}")]
    Format(#[source] serde_json::Error),
}

impl ToolError {
    /// Create a new "not found" error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    /// Create a new "request construction" error.
    pub fn request(msg: impl Into<String>) -> Self {
        Self::Request(msg.into())
    }

    /// Wrap a transport failure, stripping the URL (it carries credentials).
    pub fn transport(err: reqwest::Error) -> Self {
        Self::Transport(err.without_url())
    }

    /// Wrap a body read failure, stripping the URL.
    pub fn read_body(err: reqwest::Error) -> Self {
        Self::ReadBody(err.without_url())
    }

    /// Render this error as a reported tool failure.
    pub fn into_call_result(self) -> CallToolResult {
        CallToolResult::error(vec![Content::text(self.to_string())])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::RawContent;

    #[test]
    fn test_missing_parameter_message() {
        let err = ToolError::MissingParameter("courseId");
        assert_eq!(err.to_string(), "Missing required path parameter: courseId");
    }

    #[test]
    fn test_api_error_keeps_body_verbatim() {
        let body = r#"{"error": {"code": 404, "status": "NOT_FOUND"}}"#;
        let err = ToolError::Api {
            status: 404,
            body: body.to_string(),
        };
        assert!(err.to_string().contains(body));
    }

    #[test]
    fn test_into_call_result_is_error() {
        let result = ToolError::InvalidParameter("id").into_call_result();
        assert_eq!(result.is_error, Some(true));
        match &result.content[0].raw {
            RawContent::Text(text) => assert_eq!(
                text.text,
                "Missing required path parameter: id (expected a non-empty string)"
            ),
            _ => panic!("Expected text content"),
        }
    }
}
