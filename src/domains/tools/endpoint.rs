//! Declarative description of one Classroom REST operation.
//!
//! An [`Endpoint`] is pure data: HTTP method, path template, the parameters
//! it reads from the argument map, and the typed request/response codecs.
//! One generic executor drives every entry of the table in `definitions/`.

use rmcp::model::JsonObject;
use serde_json::{Value, json};

use super::codec::SchemaCodec;

/// HTTP methods used by the Classroom API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    /// Upper-case method name as sent on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }

    /// Convert to the HTTP client's method type.
    pub fn to_reqwest(self) -> reqwest::Method {
        match self {
            Self::Get => reqwest::Method::GET,
            Self::Post => reqwest::Method::POST,
            Self::Put => reqwest::Method::PUT,
            Self::Patch => reqwest::Method::PATCH,
            Self::Delete => reqwest::Method::DELETE,
        }
    }
}

/// JSON type advertised for a path or query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    String,
    Integer,
    Boolean,
    /// Repeated string parameter, e.g. `courseStates`.
    Array,
}

/// A named parameter read from the argument map.
#[derive(Debug, Clone, Copy)]
pub struct Param {
    pub name: &'static str,
    pub kind: ParamKind,
    pub description: &'static str,
}

impl Param {
    pub const fn string(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            kind: ParamKind::String,
            description,
        }
    }

    pub const fn integer(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            kind: ParamKind::Integer,
            description,
        }
    }

    pub const fn boolean(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            kind: ParamKind::Boolean,
            description,
        }
    }

    pub const fn array(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            kind: ParamKind::Array,
            description,
        }
    }

    /// JSON Schema fragment for this parameter.
    pub fn schema(&self) -> Value {
        match self.kind {
            ParamKind::String => json!({ "type": "string", "description": self.description }),
            ParamKind::Integer => json!({ "type": "integer", "description": self.description }),
            ParamKind::Boolean => json!({ "type": "boolean", "description": self.description }),
            ParamKind::Array => json!({
                "type": "array",
                "items": { "type": "string" },
                "description": self.description
            }),
        }
    }
}

/// One Classroom REST operation exposed as a tool.
#[derive(Debug, Clone, Copy)]
pub struct Endpoint {
    pub method: HttpMethod,
    /// Path below `{base}/v1/`, with `{name}` placeholders for path parameters.
    pub path: &'static str,
    pub description: &'static str,
    /// Required parameters substituted into `path`.
    pub path_params: &'static [Param],
    /// Optional parameters appended to the query string.
    pub query_params: &'static [Param],
    /// Request schema; `None` for operations that send no body.
    pub body: Option<SchemaCodec>,
    pub response: SchemaCodec,
}

impl Endpoint {
    /// Tool name derived from method and path.
    ///
    /// `PATCH courses/{courseId}/courseWork/{id}` becomes
    /// `patch_v1_courses_courseId_courseWork_id`; custom verbs such as
    /// `:turnIn` become `_turnIn`.
    pub fn tool_name(&self) -> String {
        let path: String = self
            .path
            .chars()
            .filter(|c| *c != '{' && *c != '}')
            .map(|c| if c == '/' || c == ':' { '_' } else { c })
            .collect();
        format!("{}_v1_{}", self.method.as_str().to_lowercase(), path)
    }

    /// Names of the `{placeholders}` in the path template, in order.
    pub fn placeholders(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        let mut rest = self.path;
        while let Some(start) = rest.find('{') {
            let Some(len) = rest[start..].find('}') else {
                break;
            };
            names.push(&rest[start + 1..start + len]);
            rest = &rest[start + len + 1..];
        }
        names
    }

    /// Whether `key` names a path or query parameter of this endpoint.
    pub fn is_parameter(&self, key: &str) -> bool {
        self.path_params
            .iter()
            .chain(self.query_params)
            .any(|p| p.name == key)
    }

    /// JSON Schema for the tool's argument object.
    ///
    /// Body properties come first, then query parameters, then path
    /// parameters, each layer overriding same-named keys of the previous one.
    /// Only path parameters are required.
    pub fn input_schema(&self) -> JsonObject {
        let mut properties = self
            .body
            .map(|codec| codec.properties())
            .unwrap_or_default();

        for param in self.query_params.iter().chain(self.path_params) {
            properties.insert(param.name.to_string(), param.schema());
        }

        let required: Vec<Value> = self
            .path_params
            .iter()
            .map(|p| Value::String(p.name.to_string()))
            .collect();

        let mut schema = JsonObject::new();
        schema.insert("type".to_string(), json!("object"));
        schema.insert("properties".to_string(), Value::Object(properties));
        if !required.is_empty() {
            schema.insert("required".to_string(), Value::Array(required));
        }
        schema
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::models::{CourseWork, Empty};

    const COURSE_ID: Param = Param::string("courseId", "Identifier of the course.");
    const ID: Param = Param::string("id", "Identifier of the course work.");
    const UPDATE_MASK: Param = Param::string("updateMask", "Fields to update.");

    fn patch_course_work() -> Endpoint {
        Endpoint {
            method: HttpMethod::Patch,
            path: "courses/{courseId}/courseWork/{id}",
            description: "Updates one or more fields of a course work.",
            path_params: &[COURSE_ID, ID],
            query_params: &[UPDATE_MASK],
            body: Some(SchemaCodec::of::<CourseWork>()),
            response: SchemaCodec::of::<CourseWork>(),
        }
    }

    #[test]
    fn test_tool_name() {
        assert_eq!(
            patch_course_work().tool_name(),
            "patch_v1_courses_courseId_courseWork_id"
        );

        let turn_in = Endpoint {
            method: HttpMethod::Post,
            path: "courses/{courseId}/courseWork/{courseWorkId}/studentSubmissions/{id}:turnIn",
            description: "",
            path_params: &[],
            query_params: &[],
            body: None,
            response: SchemaCodec::of::<Empty>(),
        };
        assert_eq!(
            turn_in.tool_name(),
            "post_v1_courses_courseId_courseWork_courseWorkId_studentSubmissions_id_turnIn"
        );
    }

    #[test]
    fn test_placeholders() {
        assert_eq!(patch_course_work().placeholders(), vec!["courseId", "id"]);
    }

    #[test]
    fn test_is_parameter() {
        let endpoint = patch_course_work();
        assert!(endpoint.is_parameter("courseId"));
        assert!(endpoint.is_parameter("updateMask"));
        assert!(!endpoint.is_parameter("title"));
    }

    #[test]
    fn test_input_schema_layers() {
        let schema = patch_course_work().input_schema();
        let properties = schema["properties"].as_object().unwrap();

        assert!(properties.contains_key("title"));
        assert_eq!(properties["updateMask"]["type"], "string");
        assert_eq!(
            properties["id"]["description"],
            "Identifier of the course work."
        );
        assert_eq!(schema["required"], json!(["courseId", "id"]));
    }

    #[test]
    fn test_array_param_schema() {
        let param = Param::array("courseStates", "States to include.");
        assert_eq!(param.schema()["items"]["type"], "string");
    }
}
