//! MCP handler for the document conversion tool.

use std::sync::Arc;

use crate::{mcp::format::parse_result, parsing::ParsingService};
use rmcp::{
    ErrorData as McpError,
    model::{CallToolResult, JsonObject},
};
use serde::Deserialize;
use tracing::Instrument;
use uuid::Uuid;

use super::parse_arguments;

/// Request payload accepted by the `parse_document` tool.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct ParseDocumentRequest {
    /// File path or HTTP/HTTPS URL.
    pub(crate) file_source: String,
}

/// Handle the `parse_document` tool by converting the referenced document to Markdown.
///
/// Conversion failures are returned as an error tool result carrying descriptive text; only
/// malformed arguments surface as protocol errors.
pub(crate) async fn handle_parse_document(
    parsing: &Arc<ParsingService>,
    arguments: Option<JsonObject>,
) -> Result<CallToolResult, McpError> {
    let ParseDocumentRequest { file_source } = parse_arguments(arguments)?;

    let span = tracing::info_span!("parse_document", request_id = %Uuid::new_v4());
    let outcome = parsing
        .parse_document(&file_source)
        .instrument(span)
        .await;

    Ok(parse_result(outcome))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use serde_json::json;

    fn parsing() -> Arc<ParsingService> {
        let config = Config::from_lookup(|key| {
            (key == "MINERU_URL").then(|| "http://127.0.0.1:9/file_parse".to_string())
        })
        .expect("config");
        Arc::new(ParsingService::new(&config).expect("service"))
    }

    fn args(value: serde_json::Value) -> Option<JsonObject> {
        value.as_object().cloned()
    }

    #[tokio::test]
    async fn missing_file_source_is_invalid_params() {
        let err = handle_parse_document(&parsing(), args(json!({})))
            .await
            .expect_err("should fail");
        assert_eq!(err.code, rmcp::model::ErrorCode::INVALID_PARAMS);
    }

    #[tokio::test]
    async fn unknown_arguments_are_rejected() {
        let err = handle_parse_document(
            &parsing(),
            args(json!({ "file_source": "/tmp/x.pdf", "mode": "ocr" })),
        )
        .await
        .expect_err("should fail");
        assert_eq!(err.code, rmcp::model::ErrorCode::INVALID_PARAMS);
    }

    #[tokio::test]
    async fn missing_local_file_is_a_tool_error_naming_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.pdf");
        let missing = missing.to_str().unwrap();

        let result = handle_parse_document(&parsing(), args(json!({ "file_source": missing })))
            .await
            .expect("tool result");

        assert_eq!(result.is_error, Some(true));
        let text = result.content[0].as_text().expect("text").text.clone();
        assert!(text.starts_with("Error processing file: File not found"));
        assert!(text.contains(missing));
    }
}
