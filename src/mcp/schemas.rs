//! JSON schema builders for MCP tools.

use serde_json::{Map, Value};

/// Build the schema describing the `parse_document` tool input.
pub(crate) fn parse_document_input_schema() -> Map<String, Value> {
    let mut properties = Map::new();
    properties.insert(
        "file_source".into(),
        string_schema("File path or HTTP/HTTPS URL of the document to convert"),
    );

    finalize_object_schema(properties, &["file_source"])
}

fn string_schema(description: &str) -> Value {
    let mut schema = Map::new();
    schema.insert("type".into(), Value::String("string".into()));
    schema.insert("description".into(), Value::String(description.into()));
    Value::Object(schema)
}

fn finalize_object_schema(properties: Map<String, Value>, required: &[&str]) -> Map<String, Value> {
    let mut schema = Map::new();
    schema.insert("type".into(), Value::String("object".into()));
    schema.insert("properties".into(), Value::Object(properties));
    if !required.is_empty() {
        schema.insert(
            "required".into(),
            Value::Array(
                required
                    .iter()
                    .map(|&key| Value::String(key.into()))
                    .collect(),
            ),
        );
    }
    schema.insert("additionalProperties".into(), Value::Bool(false));
    schema
}
