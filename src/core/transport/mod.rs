//! Transport layer for the MCP server.
//!
//! The server speaks MCP over standard input/output; stdout carries the
//! protocol and logs go to stderr.

mod error;
mod stdio;

pub use error::{TransportError, TransportResult};
pub use stdio::StdioTransport;
