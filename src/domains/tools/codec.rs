//! Typed marshaling hooks for one Classroom schema.
//!
//! A [`SchemaCodec`] erases the schema type behind plain function pointers so
//! that the endpoint table can stay a `static` slice while every entry still
//! decodes into, and re-encodes through, its own strongly typed model.

use std::borrow::Cow;
use std::fmt;

use rmcp::model::JsonObject;
use schemars::JsonSchema;
use schemars::generate::SchemaSettings;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Function-pointer bundle over a single schema type `T`.
#[derive(Clone, Copy)]
pub struct SchemaCodec {
    name: fn() -> Cow<'static, str>,
    conform: fn(JsonObject) -> serde_json::Result<Value>,
    render: fn(&str) -> Option<serde_json::Result<String>>,
    properties: fn() -> JsonObject,
}

impl SchemaCodec {
    /// Build the codec for schema type `T`.
    pub const fn of<T>() -> Self
    where
        T: Serialize + DeserializeOwned + JsonSchema,
    {
        Self {
            name: <T as JsonSchema>::schema_name,
            conform: conform::<T>,
            render: render::<T>,
            properties: properties::<T>,
        }
    }

    /// Schema name, e.g. `ListCoursesResponse`.
    pub fn name(&self) -> Cow<'static, str> {
        (self.name)()
    }

    /// Structurally re-encode an untyped argument map through `T`.
    ///
    /// Unknown keys are dropped and wire-name mappings applied; a value of the
    /// wrong shape for a declared field is an error.
    pub fn conform(&self, arguments: JsonObject) -> serde_json::Result<Value> {
        (self.conform)(arguments)
    }

    /// Decode a response body as `T` and render it as indented JSON.
    ///
    /// Returns `None` when the body does not decode as `T`.
    pub fn render(&self, body: &str) -> Option<serde_json::Result<String>> {
        (self.render)(body)
    }

    /// JSON Schema `properties` of `T`, with every subschema inlined.
    pub fn properties(&self) -> JsonObject {
        (self.properties)()
    }
}

impl fmt::Debug for SchemaCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SchemaCodec").field(&self.name()).finish()
    }
}

fn conform<T>(arguments: JsonObject) -> serde_json::Result<Value>
where
    T: Serialize + DeserializeOwned,
{
    let typed: T = serde_json::from_value(Value::Object(arguments))?;
    serde_json::to_value(typed)
}

fn render<T>(body: &str) -> Option<serde_json::Result<String>>
where
    T: Serialize + DeserializeOwned,
{
    let decoded: T = serde_json::from_str(body).ok()?;
    Some(serde_json::to_string_pretty(&decoded))
}

fn properties<T>() -> JsonObject
where
    T: JsonSchema,
{
    let schema = SchemaSettings::draft2020_12()
        .with(|settings| settings.inline_subschemas = true)
        .into_generator()
        .into_root_schema_for::<T>();

    schema
        .as_object()
        .and_then(|root| root.get("properties"))
        .and_then(Value::as_object)
        .cloned()
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::models::{Announcement, Course, Empty, ListCoursesResponse};

    fn object(value: Value) -> JsonObject {
        match value {
            Value::Object(map) => map,
            _ => panic!("Expected object"),
        }
    }

    #[test]
    fn test_conform_drops_unknown_fields() {
        let codec = SchemaCodec::of::<Announcement>();
        let args = object(serde_json::json!({
            "text": "hello",
            "updateMask": "text",
            "notAField": 1
        }));
        let body = codec.conform(args).unwrap();
        assert_eq!(body, serde_json::json!({ "text": "hello" }));
    }

    #[test]
    fn test_conform_rejects_wrong_shape() {
        let codec = SchemaCodec::of::<Course>();
        let args = object(serde_json::json!({ "guardiansEnabled": "yes" }));
        assert!(codec.conform(args).is_err());
    }

    #[test]
    fn test_render_pretty_prints_typed_body() {
        let codec = SchemaCodec::of::<ListCoursesResponse>();
        let rendered = codec
            .render(r#"{"courses":[{"id":"1"}],"nextPageToken":"abc","extra":true}"#)
            .unwrap()
            .unwrap();
        assert!(rendered.contains("\n  \"courses\""));
        assert!(rendered.contains("\"nextPageToken\": \"abc\""));
        assert!(!rendered.contains("extra"));
    }

    #[test]
    fn test_render_declines_non_matching_body() {
        let codec = SchemaCodec::of::<Empty>();
        assert!(codec.render("<html>oops</html>").is_none());
        assert!(codec.render("").is_none());
    }

    #[test]
    fn test_properties_are_inlined() {
        let props = SchemaCodec::of::<Course>().properties();
        assert!(props.contains_key("name"));
        assert!(props.contains_key("teacherFolder"));
        let rendered = serde_json::to_string(&props).unwrap();
        assert!(!rendered.contains("$ref"));
    }

    #[test]
    fn test_codec_name() {
        assert_eq!(SchemaCodec::of::<Course>().name(), "Course");
    }
}
