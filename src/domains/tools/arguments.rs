//! Extraction of path, query and body values from an untyped argument map.

use rmcp::model::JsonObject;
use serde_json::Value;

use super::endpoint::{Endpoint, Param};
use super::error::ToolError;
use crate::core::config::ApiConfig;

/// Read a required path parameter.
///
/// Absent or `null` is [`ToolError::MissingParameter`]. A non-string value,
/// an empty string, or a dot segment (`.` or `..`) is
/// [`ToolError::InvalidParameter`]; URL normalization would otherwise drop a
/// dot segment and address a different resource.
pub fn required_path_param<'a>(
    arguments: &'a JsonObject,
    name: &'static str,
) -> Result<&'a str, ToolError> {
    match arguments.get(name) {
        None | Some(Value::Null) => Err(ToolError::MissingParameter(name)),
        Some(Value::String(value)) if !matches!(value.as_str(), "" | "." | "..") => Ok(value),
        Some(_) => Err(ToolError::InvalidParameter(name)),
    }
}

/// Query pairs for the declared parameters present in `arguments`.
///
/// Pairs follow declaration order. Arrays expand into one pair per element
/// and `null` is skipped.
pub fn query_pairs(arguments: &JsonObject, params: &[Param]) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    for param in params {
        match arguments.get(param.name) {
            None | Some(Value::Null) => {}
            Some(Value::Array(items)) => {
                for item in items.iter().filter(|item| !item.is_null()) {
                    pairs.push((param.name.to_string(), query_value(item)));
                }
            }
            Some(value) => pairs.push((param.name.to_string(), query_value(value))),
        }
    }
    pairs
}

fn query_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Authentication pairs, appended after the caller's query parameters.
///
/// Order is `access_token`, `key`, `oauth_token`; unset or empty credentials
/// are left out.
pub fn auth_pairs(api: &ApiConfig) -> Vec<(String, String)> {
    let mut pairs = Vec::with_capacity(3);
    if let Some(token) = api.bearer_token() {
        pairs.push(("access_token".to_string(), token.to_string()));
    }
    if let Some(key) = api.api_key() {
        pairs.push(("key".to_string(), key.to_string()));
    }
    if let Some(token) = api.bearer_token() {
        pairs.push(("oauth_token".to_string(), token.to_string()));
    }
    pairs
}

/// The argument map without the endpoint's path and query parameters.
pub fn body_arguments(arguments: &JsonObject, endpoint: &Endpoint) -> JsonObject {
    arguments
        .iter()
        .filter(|(key, _)| !endpoint.is_parameter(key))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::models::Announcement;
    use crate::domains::tools::codec::SchemaCodec;
    use crate::domains::tools::endpoint::HttpMethod;
    use serde_json::json;

    fn args(value: Value) -> JsonObject {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_required_path_param() {
        let arguments = args(json!({ "courseId": "123", "id": 7, "topicId": "" }));

        assert_eq!(required_path_param(&arguments, "courseId").unwrap(), "123");
        assert!(matches!(
            required_path_param(&arguments, "userId"),
            Err(ToolError::MissingParameter("userId"))
        ));
        assert!(matches!(
            required_path_param(&arguments, "id"),
            Err(ToolError::InvalidParameter("id"))
        ));
        assert!(matches!(
            required_path_param(&arguments, "topicId"),
            Err(ToolError::InvalidParameter("topicId"))
        ));
    }

    #[test]
    fn test_dot_segments_rejected() {
        let arguments = args(json!({ "id": "..", "courseId": ".", "alias": "d:..x" }));

        assert!(matches!(
            required_path_param(&arguments, "id"),
            Err(ToolError::InvalidParameter("id"))
        ));
        assert!(matches!(
            required_path_param(&arguments, "courseId"),
            Err(ToolError::InvalidParameter("courseId"))
        ));
        assert_eq!(required_path_param(&arguments, "alias").unwrap(), "d:..x");
    }

    #[test]
    fn test_null_path_param_is_missing() {
        let arguments = args(json!({ "courseId": null }));
        assert!(matches!(
            required_path_param(&arguments, "courseId"),
            Err(ToolError::MissingParameter("courseId"))
        ));
    }

    #[test]
    fn test_query_pairs_formatting() {
        let params = [
            Param::array("courseStates", ""),
            Param::integer("pageSize", ""),
            Param::string("pageToken", ""),
            Param::boolean("late", ""),
            Param::string("teacherId", ""),
        ];
        let arguments = args(json!({
            "late": true,
            "pageSize": 10,
            "courseStates": ["ACTIVE", "ARCHIVED"],
            "pageToken": null,
            "unrelated": "ignored"
        }));

        let pairs = query_pairs(&arguments, &params);
        let pairs: Vec<(&str, &str)> = pairs
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();

        assert_eq!(
            pairs,
            vec![
                ("courseStates", "ACTIVE"),
                ("courseStates", "ARCHIVED"),
                ("pageSize", "10"),
                ("late", "true"),
            ]
        );
    }

    #[test]
    fn test_object_query_value_is_compact_json() {
        let params = [Param::string("filter", "")];
        let arguments = args(json!({ "filter": { "a": 1 } }));
        assert_eq!(
            query_pairs(&arguments, &params),
            vec![("filter".to_string(), "{\"a\":1}".to_string())]
        );
    }

    #[test]
    fn test_auth_pairs_order() {
        let api = ApiConfig {
            bearer_token: Some("tok".to_string()),
            api_key: Some("key1".to_string()),
            ..ApiConfig::default()
        };
        let names: Vec<String> = auth_pairs(&api).into_iter().map(|(k, _)| k).collect();
        assert_eq!(names, vec!["access_token", "key", "oauth_token"]);
    }

    #[test]
    fn test_auth_pairs_only_non_empty() {
        let api = ApiConfig {
            bearer_token: Some(String::new()),
            api_key: Some("key1".to_string()),
            ..ApiConfig::default()
        };
        assert_eq!(
            auth_pairs(&api),
            vec![("key".to_string(), "key1".to_string())]
        );
        assert!(auth_pairs(&ApiConfig::default()).is_empty());
    }

    const ANNOUNCEMENT_PATH: &[Param] = &[Param::string("courseId", ""), Param::string("id", "")];
    const ANNOUNCEMENT_QUERY: &[Param] = &[Param::string("updateMask", "")];

    #[test]
    fn test_body_arguments_strip_parameters() {
        let endpoint = Endpoint {
            method: HttpMethod::Patch,
            path: "courses/{courseId}/announcements/{id}",
            description: "",
            path_params: ANNOUNCEMENT_PATH,
            query_params: ANNOUNCEMENT_QUERY,
            body: Some(SchemaCodec::of::<Announcement>()),
            response: SchemaCodec::of::<Announcement>(),
        };
        let arguments = args(json!({
            "courseId": "123",
            "id": "a1",
            "updateMask": "text",
            "text": "hello"
        }));

        assert_eq!(
            Value::Object(body_arguments(&arguments, &endpoint)),
            json!({ "text": "hello" })
        );
    }
}
