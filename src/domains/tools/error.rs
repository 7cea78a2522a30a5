//! Tool-specific error types.

use rmcp::ErrorData as McpError;
use thiserror::Error;

/// Errors that can occur during tool operations.
///
/// Every variant maps onto exactly one protocol error code, see
/// [`ToolError::into_mcp`].
#[derive(Debug, Error)]
pub enum ToolError {
    /// The requested tool is not registered.
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// Invalid arguments were provided to the tool.
    #[error("{0}")]
    InvalidArguments(String),

    /// The upstream API rejected the request (HTTP 400).
    #[error("Invalid request: {0}")]
    Rejected(String),

    /// The upstream API answered with an unexpected status.
    #[error("API request failed: {status} {reason}")]
    ApiStatus { status: u16, reason: String },

    /// Any other failure while talking to the upstream API.
    #[error("Error searching dictionary: {0}")]
    Search(String),
}

impl ToolError {
    /// Create a new "unknown tool" error.
    pub fn unknown_tool(name: impl Into<String>) -> Self {
        Self::UnknownTool(name.into())
    }

    /// Create a new "invalid arguments" error.
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }

    /// Create a new "rejected" error carrying the upstream message.
    pub fn rejected(msg: impl Into<String>) -> Self {
        Self::Rejected(msg.into())
    }

    /// Create a new "search failed" error.
    pub fn search(msg: impl Into<String>) -> Self {
        Self::Search(msg.into())
    }

    /// Convert into the protocol-level error sent back to the client.
    pub fn into_mcp(self) -> McpError {
        let message = self.to_string();
        match self {
            Self::UnknownTool(_) => McpError::invalid_request(message, None),
            Self::InvalidArguments(_) | Self::Rejected(_) => {
                McpError::invalid_params(message, None)
            }
            Self::ApiStatus { .. } | Self::Search(_) => McpError::internal_error(message, None),
        }
    }
}

impl From<ToolError> for McpError {
    fn from(err: ToolError) -> Self {
        err.into_mcp()
    }
}
