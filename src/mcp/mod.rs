//! Model Context Protocol (MCP) integration for the MinerU document parser.
//!
//! The server exposes a single tool, `parse_document`, which accepts a local path or an
//! HTTP/HTTPS URL and returns the Markdown produced by MinerU. Failures are reported as text
//! content with `isError` set so hosts can show them verbatim.

mod format;
pub mod handlers;
mod registry;
mod schemas;
mod server;

pub use server::{MineruMcpServer, SERVER_NAME};

/// Name of the document conversion tool.
pub const PARSE_DOCUMENT_TOOL: &str = "parse_document";
