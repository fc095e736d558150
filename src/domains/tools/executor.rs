//! The generic request executor shared by every endpoint tool.

use rmcp::model::{CallToolResult, Content, JsonObject};
use tracing::{debug, instrument, warn};

use super::arguments::{auth_pairs, body_arguments, query_pairs, required_path_param};
use super::client::ClassroomClient;
use super::endpoint::Endpoint;
use super::error::ToolError;

/// Run one tool call against the Classroom API.
///
/// Failures are reported in the result, never raised. No HTTP request is made
/// unless every path parameter and the request body validate.
#[instrument(skip_all, fields(method = endpoint.method.as_str(), path = endpoint.path))]
pub async fn execute(
    endpoint: &Endpoint,
    arguments: &JsonObject,
    client: &ClassroomClient,
) -> CallToolResult {
    match try_execute(endpoint, arguments, client).await {
        Ok(text) => CallToolResult::success(vec![Content::text(text)]),
        Err(e) => {
            warn!("Classroom call failed: {}", e);
            e.into_call_result()
        }
    }
}

async fn try_execute(
    endpoint: &Endpoint,
    arguments: &JsonObject,
    client: &ClassroomClient,
) -> Result<String, ToolError> {
    let segments = path_segments(endpoint, arguments)?;

    let mut query = query_pairs(arguments, endpoint.query_params);
    query.extend(auth_pairs(client.api()));

    let body = match endpoint.body {
        Some(codec) => Some(
            codec
                .conform(body_arguments(arguments, endpoint))
                .map_err(ToolError::Conversion)?,
        ),
        None => None,
    };

    let url = client.url(&segments, &query)?;
    debug!("Sending request");
    let (status, text) = client
        .send(endpoint.method.to_reqwest(), url, body)
        .await?;
    debug!(status, "Received response");

    if status >= 400 {
        return Err(ToolError::Api { status, body: text });
    }

    match endpoint.response.render(&text) {
        Some(rendered) => rendered.map_err(ToolError::Format),
        None => {
            debug!(
                schema = %endpoint.response.name(),
                "Response did not decode, returning raw body"
            );
            Ok(text)
        }
    }
}

/// Resolve the path template into concrete segments.
///
/// A placeholder may share a segment with a custom verb, as in `{id}:turnIn`.
fn path_segments(endpoint: &Endpoint, arguments: &JsonObject) -> Result<Vec<String>, ToolError> {
    endpoint
        .path
        .split('/')
        .map(|template| {
            let mut segment = String::new();
            let mut rest = template;
            while let Some(start) = rest.find('{') {
                let end = rest[start..]
                    .find('}')
                    .map(|offset| start + offset)
                    .ok_or_else(|| {
                        ToolError::request(format!("unterminated placeholder in {}", endpoint.path))
                    })?;
                let name = &rest[start + 1..end];
                let param = endpoint
                    .path_params
                    .iter()
                    .find(|p| p.name == name)
                    .ok_or_else(|| ToolError::request(format!("undeclared path parameter {name}")))?;

                segment.push_str(&rest[..start]);
                segment.push_str(required_path_param(arguments, param.name)?);
                rest = &rest[end + 1..];
            }
            segment.push_str(rest);
            Ok(segment)
        })
        .collect()
}
