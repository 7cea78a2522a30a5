//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - A registry of all available tools
//! - Dispatch of tool calls by name
//! - Tool metadata for listing

use std::sync::Arc;

use futures::FutureExt;
use futures::future::{self, BoxFuture};
use rmcp::model::{CallToolResult, JsonObject, Tool};
use tracing::warn;

use super::ToolError;
use super::definitions::{DictionaryApi, SearchDictionaryTool};
use crate::core::config::Config;

// ============================================================================
// Tool Registry
// ============================================================================

/// Tool registry - manages all available tools.
///
/// Holds only shared, immutable handles, so cloning it is cheap and calls
/// can run concurrently.
#[derive(Clone)]
pub struct ToolRegistry {
    config: Arc<Config>,
    api: Arc<dyn DictionaryApi>,
}

impl ToolRegistry {
    /// Create a new tool registry.
    pub fn new(config: Arc<Config>, api: Arc<dyn DictionaryApi>) -> Self {
        Self { config, api }
    }

    /// Get all tools as Tool models (metadata).
    ///
    /// This is the single source of truth for all available tools.
    pub fn get_all_tools() -> Vec<Tool> {
        vec![SearchDictionaryTool::to_tool()]
    }

    /// Dispatch a tool call to the appropriate handler.
    ///
    /// Unknown names resolve to [`ToolError::UnknownTool`] without touching
    /// the arguments or the network.
    pub fn call_tool(
        &self,
        name: &str,
        arguments: JsonObject,
    ) -> BoxFuture<'static, Result<CallToolResult, ToolError>> {
        match name {
            SearchDictionaryTool::NAME => {
                SearchDictionaryTool::call(arguments, self.config.clone(), self.api.clone())
                    .boxed()
            }
            _ => {
                warn!("Unknown tool requested: {}", name);
                future::ready(Err(ToolError::unknown_tool(name))).boxed()
            }
        }
    }
}
