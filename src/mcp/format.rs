//! Rendering of parse outcomes into MCP tool results.

use crate::parsing::{ParseError, ParseErrorKind};
use rmcp::model::{CallToolResult, Content};

/// Prefix applied to failures that happen outside the MinerU exchange.
pub(crate) const PROCESSING_ERROR_PREFIX: &str = "Error processing file: ";

/// Human-readable text for a failed conversion.
///
/// MinerU failures already describe the upstream exchange and are shown as-is; everything
/// else is prefixed with a generic processing marker.
pub(crate) fn render_failure(error: &ParseError) -> String {
    match error.kind() {
        ParseErrorKind::UpstreamHttp | ParseErrorKind::UpstreamMalformed => error.to_string(),
        ParseErrorKind::Download | ParseErrorKind::NotFound | ParseErrorKind::Processing => {
            format!("{PROCESSING_ERROR_PREFIX}{error}")
        }
    }
}

/// Build the tool result for a parse outcome.
pub(crate) fn parse_result(outcome: Result<String, ParseError>) -> CallToolResult {
    match outcome {
        Ok(markdown) => CallToolResult::success(vec![Content::text(markdown)]),
        Err(error) => CallToolResult::error(vec![Content::text(render_failure(&error))]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;
    use std::path::PathBuf;

    fn text(result: &CallToolResult) -> &str {
        result.content[0]
            .as_text()
            .map(|content| content.text.as_str())
            .expect("text content")
    }

    #[test]
    fn success_is_markdown_verbatim() {
        let result = parse_result(Ok("# Title".into()));
        assert_eq!(result.is_error, Some(false));
        assert_eq!(text(&result), "# Title");
    }

    #[test]
    fn resolver_failures_carry_processing_prefix() {
        let result = parse_result(Err(ParseError::NotFound {
            path: PathBuf::from("/missing.pdf"),
        }));
        assert_eq!(result.is_error, Some(true));
        assert_eq!(text(&result), "Error processing file: File not found: /missing.pdf");
    }

    #[test]
    fn upstream_failures_are_not_prefixed() {
        let rendered = render_failure(&ParseError::UpstreamStatus {
            status: StatusCode::BAD_GATEWAY,
            body: "bad gateway".into(),
        });
        assert!(rendered.starts_with("MinerU request failed: HTTP 502"));
        assert!(rendered.ends_with("bad gateway"));
    }
}
