//! MCP server bootstrap and request dispatch.

use std::{borrow::Cow, sync::Arc};

use crate::{
    mcp::{PARSE_DOCUMENT_TOOL, handlers::parse::handle_parse_document, registry, schemas},
    parsing::ParsingService,
};
use rmcp::{
    ErrorData as McpError,
    handler::server::ServerHandler,
    model::{
        CallToolRequestParam, CallToolResult, ListToolsResult, ServerCapabilities, ServerInfo,
        Tool, ToolAnnotations,
    },
};

/// Server name reported to MCP clients and by the health route.
pub const SERVER_NAME: &str = "mineru-mcp-server";

const TOOL_DESCRIPTION: &str =
    "Parse document to Markdown format. Supports PDF, PPT, Word, and image formats.";

/// MCP server implementation exposing MinerU document conversion.
#[derive(Clone)]
pub struct MineruMcpServer {
    parsing: Arc<ParsingService>,
    registry: Arc<registry::Registry>,
}

impl MineruMcpServer {
    /// Create a new MCP server using the supplied parsing pipeline.
    pub fn new(parsing: Arc<ParsingService>) -> Self {
        let mut registry = registry::Registry::new();
        registry.register_tool(PARSE_DOCUMENT_TOOL, tool_parse_document);

        Self {
            parsing,
            registry: Arc::new(registry),
        }
    }

    fn describe_tools(&self) -> Vec<Tool> {
        vec![Tool {
            name: Cow::Borrowed(PARSE_DOCUMENT_TOOL),
            title: Some("Parse Document".to_string()),
            description: Some(Cow::Borrowed(
                TOOL_DESCRIPTION,
            )),
            input_schema: Arc::new(schemas::parse_document_input_schema()),
            output_schema: None,
            annotations: Some(
                ToolAnnotations::with_title("Parse Document")
                    .read_only(true)
                    .open_world(true),
            ),
            icons: None,
        }]
    }
}

fn tool_parse_document(
    server: &MineruMcpServer,
    request: CallToolRequestParam,
) -> registry::ToolFuture {
    let parsing = server.parsing.clone();
    Box::pin(async move { handle_parse_document(&parsing, request.arguments).await })
}

impl ServerHandler for MineruMcpServer {
    fn get_info(&self) -> ServerInfo {
        let mut implementation = rmcp::model::Implementation::from_build_env();
        implementation.name = SERVER_NAME.to_string();
        implementation.title = Some("MinerU Document Parser".to_string());
        implementation.version = env!("CARGO_PKG_VERSION").to_string();

        ServerInfo {
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: implementation,
            instructions: Some(
                "Use `parse_document` to convert PDF, PPT, Word, or image files to Markdown. Pass a path readable by the server or an HTTP/HTTPS URL; the Markdown is returned as text.".into(),
            ),
            ..ServerInfo::default()
        }
    }

    fn list_tools(
        &self,
        _request: Option<rmcp::model::PaginatedRequestParam>,
        _context: rmcp::service::RequestContext<rmcp::service::RoleServer>,
    ) -> impl std::future::Future<Output = Result<ListToolsResult, McpError>> + Send + '_ {
        let tools = self.describe_tools();
        std::future::ready(Ok(ListToolsResult::with_all_items(tools)))
    }

    #[allow(clippy::manual_async_fn)]
    fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: rmcp::service::RequestContext<rmcp::service::RoleServer>,
    ) -> impl std::future::Future<Output = Result<CallToolResult, McpError>> + Send + '_ {
        async move {
            if let Some(handler) = self.registry.tools.get(request.name.as_ref()) {
                return handler(self, request).await;
            }

            Err(McpError::invalid_params(
                format!("Unknown tool: {}", request.name),
                None,
            ))
        }
    }
}
