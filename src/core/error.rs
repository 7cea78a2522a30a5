//! Error types and handling for the MCP server.
//!
//! This module defines a unified error type for server construction and
//! lifecycle failures. Errors raised while serving a single tool call are
//! [`ToolError`](crate::domains::tools::ToolError)s and are reported to the
//! client instead of surfacing here.

use thiserror::Error;

use super::transport::TransportError;

/// A specialized Result type for MCP server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the MCP server.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Transport start-up or serving failure.
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// The outbound HTTP client could not be built.
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),
}

impl Error {
    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
