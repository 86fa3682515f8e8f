#![deny(missing_docs)]

//! Core library for the MinerU MCP server.

/// HTTP routing: health check and the streamable MCP endpoint.
pub mod api;
/// Environment-driven configuration management.
pub mod config;
/// Structured logging and tracing setup.
pub mod logging;
/// Model Context Protocol server implementation.
pub mod mcp;
/// Document acquisition and MinerU upload pipeline.
pub mod parsing;
