//! Steingass dictionary MCP server.
//!
//! This crate exposes Steingass' Persian-English dictionary
//! (<https://steingass.theobeers.com>) to MCP clients as a single
//! `search_dictionary` tool.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the rmcp server handler and the stdio transport
//! - **domains**: business logic organized by bounded contexts
//!   - **tools**: the tool registry and tool definitions
//!
//! # Example
//!
//! ```rust,no_run
//! use steingass_mcp_server::core::{Config, McpServer, StdioTransport};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config)?;
//!     StdioTransport::run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
