//! Steingass dictionary search tool.
//!
//! Looks a term up in Steingass' Persian-English dictionary through the
//! public entries API and renders the matching entries as markdown text.

use std::sync::Arc;

use rmcp::{
    handler::server::tool::cached_schema_for_type,
    model::{CallToolResult, JsonObject, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, instrument, warn};

use super::client::{DictionaryApi, EntriesQuery, LookupOutcome, entries_url};
use crate::core::config::Config;
use crate::domains::tools::ToolError;

// ============================================================================
// Tool Parameters
// ============================================================================

/// Field of an entry the term is matched against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SearchField {
    #[default]
    HeadwordPersian,
    HeadwordFull,
    Definitions,
}

/// Comparison applied by the dictionary service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum MatchType {
    #[default]
    Exact,
    Prefix,
    Contains,
}

impl SearchField {
    /// Value of the `field` query parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::HeadwordPersian => "headword_persian",
            Self::HeadwordFull => "headword_full",
            Self::Definitions => "definitions",
        }
    }
}

impl MatchType {
    /// Value of the `match-type` query parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Exact => "exact",
            Self::Prefix => "prefix",
            Self::Contains => "contains",
        }
    }
}

/// Parameters for the dictionary search tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SearchDictionaryParams {
    /// The term to search for (in Arabic/Persian script or transliteration)
    pub term: String,

    /// Field in which to search
    #[serde(default)]
    pub field: SearchField,

    /// Type of matching to perform
    #[serde(default)]
    pub match_type: MatchType,
}

const EMPTY_TERM: &str = "Search term cannot be empty";
const EXACT_FIELD_ONLY: &str = "Exact match is supported only for the headword_persian field";

impl SearchDictionaryParams {
    /// Parse raw call arguments.
    ///
    /// The term is checked first: a missing, null, non-string or blank
    /// `term` is reported as empty whatever the other arguments hold.
    pub fn from_arguments(arguments: JsonObject) -> Result<Self, ToolError> {
        match arguments.get("term") {
            Some(Value::String(term)) if !term.trim().is_empty() => {}
            _ => return Err(ToolError::invalid_arguments(EMPTY_TERM)),
        }

        serde_json::from_value(Value::Object(arguments))
            .map_err(|e| ToolError::invalid_arguments(format!("Invalid parameters: {e}")))
    }

    /// Check the constraints the entries API imposes.
    pub fn validate(&self) -> Result<(), ToolError> {
        if self.term.trim().is_empty() {
            return Err(ToolError::invalid_arguments(EMPTY_TERM));
        }

        if self.match_type == MatchType::Exact && self.field != SearchField::HeadwordPersian {
            return Err(ToolError::invalid_arguments(EXACT_FIELD_ONLY));
        }

        Ok(())
    }

    fn query(&self) -> EntriesQuery<'_> {
        EntriesQuery {
            field: self.field,
            match_type: self.match_type,
            term: &self.term,
        }
    }
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Steingass dictionary search tool.
pub struct SearchDictionaryTool;

impl SearchDictionaryTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "search_dictionary";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Search Steingass' Persian-English dictionary for Persian words and their definitions";

    /// Execute the tool logic.
    ///
    /// Validation happens before any request is made; a structured error from
    /// validation or from the API status is returned as is, anything else is
    /// wrapped as a search failure.
    #[instrument(skip_all, fields(term = tracing::field::Empty))]
    pub async fn execute(
        arguments: JsonObject,
        config: &Config,
        api: &dyn DictionaryApi,
    ) -> Result<CallToolResult, ToolError> {
        let params = SearchDictionaryParams::from_arguments(arguments)?;
        params.validate()?;
        tracing::Span::current().record("term", params.term.as_str());

        info!(
            "Searching {} with {} match",
            params.field.as_str(),
            params.match_type.as_str()
        );

        let url = entries_url(&config.dictionary.api_url, &params.query());
        let response = api.get(&url).await?;
        let outcome = LookupOutcome::from_response(response)?;

        match &outcome {
            LookupOutcome::Found(entries) => info!("Found {} entries", entries.len()),
            LookupOutcome::NotFound => info!("No entries found"),
            LookupOutcome::Rejected(message) => warn!("Dictionary API rejected query: {}", message),
            LookupOutcome::Failed { status, reason } => {
                warn!("Dictionary API failed: {} {}", status, reason)
            }
        }

        outcome.into_result(&params.term)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<SearchDictionaryParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Run the tool on owned handles, for dispatchers that box the future.
    pub async fn call(
        arguments: JsonObject,
        config: Arc<Config>,
        api: Arc<dyn DictionaryApi>,
    ) -> Result<CallToolResult, ToolError> {
        Self::execute(arguments, &config, api.as_ref()).await
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::definitions::steingass::client::ApiResponse;
    use crate::domains::tools::definitions::steingass::client::fake::RecordingApi;
    use async_trait::async_trait;
    use reqwest::StatusCode;
    use rmcp::model::RawContent;
    use serde_json::json;

    /// Fails every request like an unreachable host.
    struct DownApi;

    #[async_trait]
    impl DictionaryApi for DownApi {
        async fn get(&self, _url: &str) -> Result<ApiResponse, ToolError> {
            Err(ToolError::search("Connection failed: connection refused"))
        }
    }

    fn args(value: Value) -> JsonObject {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    fn text_of(result: &CallToolResult) -> String {
        match &result.content[0].raw {
            RawContent::Text(text) => text.text.clone(),
            other => panic!("expected text content, got {:?}", other),
        }
    }

    #[test]
    fn test_params_defaults() {
        let params = SearchDictionaryParams::from_arguments(args(json!({"term": "آب"}))).unwrap();
        assert_eq!(params.field, SearchField::HeadwordPersian);
        assert_eq!(params.match_type, MatchType::Exact);
    }

    #[test]
    fn test_params_missing_term() {
        let err = SearchDictionaryParams::from_arguments(args(json!({}))).unwrap_err();
        assert_eq!(err.to_string(), "Search term cannot be empty");

        let err = SearchDictionaryParams::from_arguments(args(json!({"term": null}))).unwrap_err();
        assert_eq!(err.to_string(), "Search term cannot be empty");
    }

    #[test]
    fn test_params_unknown_field_rejected() {
        let err = SearchDictionaryParams::from_arguments(args(json!({
            "term": "ab",
            "field": "etymology"
        })))
        .unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments(_)));
    }

    #[test]
    fn test_params_blank_term_checked_before_enums() {
        for raw in [
            json!({"term": "  ", "field": "bogus"}),
            json!({"term": "", "match_type": "fuzzy"}),
            json!({"field": "bogus", "match_type": "fuzzy"}),
        ] {
            let err = SearchDictionaryParams::from_arguments(args(raw)).unwrap_err();
            assert_eq!(err.to_string(), "Search term cannot be empty");
        }
    }

    #[test]
    fn test_validate_whitespace_term() {
        for (field, match_type) in [
            (SearchField::HeadwordPersian, MatchType::Exact),
            (SearchField::Definitions, MatchType::Contains),
            (SearchField::HeadwordFull, MatchType::Prefix),
        ] {
            let params = SearchDictionaryParams {
                term: " \t\n".to_string(),
                field,
                match_type,
            };
            let err = params.validate().unwrap_err();
            assert_eq!(err.to_string(), "Search term cannot be empty");
        }
    }

    #[test]
    fn test_validate_exact_requires_persian_headword() {
        for field in [SearchField::HeadwordFull, SearchField::Definitions] {
            let params = SearchDictionaryParams {
                term: "ab".to_string(),
                field,
                match_type: MatchType::Exact,
            };
            let err = params.validate().unwrap_err();
            assert_eq!(
                err.to_string(),
                "Exact match is supported only for the headword_persian field"
            );
        }
    }

    #[test]
    fn test_tool_schema() {
        let tool = SearchDictionaryTool::to_tool();
        assert_eq!(tool.name, "search_dictionary");

        let schema = serde_json::to_value(tool.input_schema.as_ref()).unwrap();
        let schema_text = schema.to_string();
        assert_eq!(schema["required"], json!(["term"]));
        assert!(schema["properties"]["term"].is_object());
        assert!(schema["properties"]["field"].is_object());
        assert!(schema["properties"]["match_type"].is_object());
        for value in [
            "headword_persian",
            "headword_full",
            "definitions",
            "exact",
            "prefix",
            "contains",
        ] {
            assert!(schema_text.contains(value), "schema lacks {value}");
        }
    }

    #[tokio::test]
    async fn test_execute_formats_entries() {
        let api = RecordingApi::new(
            StatusCode::OK,
            r#"[{"headword_persian": "آب", "headword_latin": "āb", "definitions": "Water.", "page": 1}]"#,
        );
        let result =
            SearchDictionaryTool::execute(args(json!({"term": "آب"})), &Config::default(), &api)
                .await
                .unwrap();

        assert_eq!(
            text_of(&result),
            "Found 1 entry for \"آب\":\n\n**آب** (āb) (p. 1)\nWater.\n"
        );
        assert_eq!(api.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_execute_encodes_term() {
        let api = RecordingApi::new(
            StatusCode::OK,
            r#"[{"headword_persian": "نمک", "definitions": "Salt."}]"#,
        );
        let result = SearchDictionaryTool::execute(
            args(json!({
                "term": "salt & bread",
                "field": "definitions",
                "match_type": "contains"
            })),
            &Config::default(),
            &api,
        )
        .await
        .unwrap();

        assert!(text_of(&result).starts_with("Found 1 entry for \"salt & bread\":"));
        assert_eq!(
            api.requests(),
            vec![
                "https://steingass.theobeers.com/api/entries?field=definitions&match-type=contains&term=salt%20%26%20bread"
                    .to_string()
            ]
        );
    }

    #[tokio::test]
    async fn test_execute_validation_skips_network() {
        let api = RecordingApi::new(StatusCode::OK, "[]");
        let err = SearchDictionaryTool::execute(
            args(json!({"term": "ab", "field": "definitions"})),
            &Config::default(),
            &api,
        )
        .await
        .unwrap_err();

        assert!(matches!(err, ToolError::InvalidArguments(_)));
        assert!(api.requests().is_empty());

        let err = SearchDictionaryTool::execute(args(json!({"term": "  "})), &Config::default(), &api)
            .await
            .unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments(_)));
        assert!(api.requests().is_empty());
    }

    #[tokio::test]
    async fn test_execute_rejected_passes_message_through() {
        let api = RecordingApi::new(StatusCode::BAD_REQUEST, "bad field");
        let err = SearchDictionaryTool::execute(
            args(json!({"term": "ab", "match_type": "prefix"})),
            &Config::default(),
            &api,
        )
        .await
        .unwrap_err();

        assert_eq!(err.to_string(), "Invalid request: bad field");
    }

    #[tokio::test]
    async fn test_execute_network_failure() {
        let err = SearchDictionaryTool::execute(args(json!({"term": "ab"})), &Config::default(), &DownApi)
            .await
            .unwrap_err();

        assert!(matches!(err, ToolError::Search(_)));
        assert!(err.to_string().starts_with("Error searching dictionary:"));
    }

    #[test]
    fn test_call_not_found_result() {
        let api: Arc<dyn DictionaryApi> = Arc::new(RecordingApi::new(StatusCode::NOT_FOUND, ""));
        let result = tokio_test::block_on(SearchDictionaryTool::call(
            args(json!({"term": "zzz"})),
            Arc::new(Config::default()),
            api,
        ))
        .unwrap();

        assert_eq!(
            text_of(&result),
            "No entries found for \"zzz\" in the specified field"
        );
    }
}
