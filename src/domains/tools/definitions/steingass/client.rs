//! Steingass entries API client.
//!
//! The HTTP exchange sits behind [`DictionaryApi`] so the search tool can be
//! exercised without network access. Interpreting the reply is a pure step,
//! [`LookupOutcome::from_response`], followed by a single mapping onto the
//! tool result in [`LookupOutcome::into_result`].

use std::time::Duration;

use async_trait::async_trait;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use reqwest::StatusCode;
use rmcp::model::CallToolResult;
use serde_json::Value;
use tracing::{debug, instrument, warn};

use super::common::{DictionaryEntry, format_entries, no_entries_text, success_result};
use super::search::{MatchType, SearchField};
use crate::core::config::DictionaryConfig;
use crate::domains::tools::ToolError;

const USER_AGENT: &str = concat!("steingass-mcp/", env!("CARGO_PKG_VERSION"));

/// Raw reply from the entries endpoint.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Outbound access to the dictionary service.
#[async_trait]
pub trait DictionaryApi: Send + Sync {
    /// Perform a GET on a fully built entries URL.
    async fn get(&self, url: &str) -> Result<ApiResponse, ToolError>;
}

/// [`DictionaryApi`] backed by a shared `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpDictionaryApi {
    client: reqwest::Client,
}

impl HttpDictionaryApi {
    /// Build the client from configuration.
    pub fn new(config: &DictionaryConfig) -> Result<Self, reqwest::Error> {
        let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        Ok(Self {
            client: builder.build()?,
        })
    }
}

#[async_trait]
impl DictionaryApi for HttpDictionaryApi {
    #[instrument(skip(self))]
    async fn get(&self, url: &str) -> Result<ApiResponse, ToolError> {
        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                ToolError::search("Request timed out")
            } else if e.is_connect() {
                ToolError::search(format!("Connection failed: {e}"))
            } else {
                ToolError::search(e.to_string())
            }
        })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ToolError::search(format!("Failed to read response body: {e}")))?;

        debug!("API response received: {} ({} bytes)", status, body.len());
        Ok(ApiResponse::new(status, body))
    }
}

/// Characters left unescaped in a query component: ASCII alphanumerics and
/// `- _ . ! ~ * ' ( )`. A space becomes `%20`, never `+`.
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Query string of an entries request, in the order the API documents it.
#[derive(Debug, Clone)]
pub struct EntriesQuery<'a> {
    pub field: SearchField,
    pub match_type: MatchType,
    pub term: &'a str,
}

/// Append the percent-encoded query to the entries endpoint.
pub fn entries_url(api_url: &str, query: &EntriesQuery<'_>) -> String {
    format!(
        "{api_url}?field={}&match-type={}&term={}",
        query.field.as_str(),
        query.match_type.as_str(),
        utf8_percent_encode(query.term, QUERY_COMPONENT)
    )
}

/// Interpreted reply of the entries endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    /// At least one entry, in the order the API returned them.
    Found(Vec<DictionaryEntry>),
    /// 404, or a success body that is not a non-empty array.
    NotFound,
    /// 400; carries the API's own message.
    Rejected(String),
    /// Any other non-success status.
    Failed { status: u16, reason: String },
}

impl LookupOutcome {
    /// Classify a reply. Only a success body that is not valid JSON fails.
    pub fn from_response(response: ApiResponse) -> Result<Self, ToolError> {
        let status = response.status;

        if !status.is_success() {
            return Ok(match status {
                StatusCode::NOT_FOUND => Self::NotFound,
                StatusCode::BAD_REQUEST => Self::Rejected(response.body),
                _ => Self::Failed {
                    status: status.as_u16(),
                    reason: status.canonical_reason().unwrap_or_default().to_string(),
                },
            });
        }

        let payload: Value = serde_json::from_str(&response.body)
            .map_err(|e| ToolError::search(format!("Invalid JSON response: {e}")))?;

        match payload {
            Value::Array(items) if !items.is_empty() => Ok(Self::Found(
                items.iter().map(DictionaryEntry::from_value).collect(),
            )),
            Value::Array(_) => Ok(Self::NotFound),
            other => {
                warn!("Expected a JSON array of entries, got: {}", json_kind(&other));
                Ok(Self::NotFound)
            }
        }
    }

    /// Map the outcome onto the tool result for `term`.
    pub fn into_result(self, term: &str) -> Result<CallToolResult, ToolError> {
        match self {
            Self::Found(entries) => Ok(success_result(format_entries(term, &entries))),
            Self::NotFound => Ok(success_result(no_entries_text(term))),
            Self::Rejected(message) => Err(ToolError::rejected(message)),
            Self::Failed { status, reason } => Err(ToolError::ApiStatus { status, reason }),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
