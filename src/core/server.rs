//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol by delegating tool listing and tool calls to the
//! [`ToolRegistry`].

use std::sync::Arc;

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler,
    model::*,
    service::RequestContext,
};
use tracing::{info, instrument};

use super::config::Config;
use super::error::Result;
use crate::domains::tools::ToolRegistry;
use crate::domains::tools::definitions::{DictionaryApi, HttpDictionaryApi};

/// The main MCP server handler.
///
/// Stateless apart from shared, immutable handles.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Registry dispatching tool calls.
    registry: ToolRegistry,
}

impl McpServer {
    /// Create a new MCP server talking to the configured dictionary API.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        let api = HttpDictionaryApi::new(&config.dictionary)?;
        Ok(Self::with_api(config, Arc::new(api)))
    }

    /// Create a server over an explicit [`DictionaryApi`] implementation.
    pub fn with_api(config: Config, api: Arc<dyn DictionaryApi>) -> Self {
        let config = Arc::new(config);
        Self {
            registry: ToolRegistry::new(config.clone(), api),
            config,
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// List all available tools.
    pub fn list_tools(&self) -> Vec<Tool> {
        ToolRegistry::get_all_tools()
    }

    /// Call a tool by name, mapping failures onto protocol errors.
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: Option<JsonObject>,
    ) -> std::result::Result<CallToolResult, McpError> {
        self.registry
            .call_tool(name, arguments.unwrap_or_default())
            .await
            .map_err(McpError::from)
    }
}

impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Search Steingass' Persian-English dictionary with the search_dictionary tool. \
                 Exact matching is only available on the headword_persian field; use prefix or \
                 contains matching for headword_full and definitions."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: self.name().to_string(),
                version: self.version().to_string(),
                ..Implementation::from_build_env()
            },
            ..Default::default()
        }
    }

    #[instrument(skip(self, _context))]
    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListToolsResult, McpError> {
        info!("Listing tools");
        Ok(ListToolsResult {
            tools: McpServer::list_tools(self),
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context), fields(tool = %request.name))]
    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<CallToolResult, McpError> {
        info!("Calling tool: {}", request.name);
        McpServer::call_tool(self, &request.name, request.arguments).await
    }
}
