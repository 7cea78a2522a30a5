//! Common utilities shared across Steingass dictionary tools.
//!
//! Entry extraction from the API's JSON payload and the text rendering
//! returned to clients.

use rmcp::model::{CallToolResult, Content};
use serde_json::{Number, Value};

/// Placeholder for a missing headword or transliteration.
const MISSING: &str = "N/A";

/// Placeholder for an entry without definitions.
const NO_DEFINITIONS: &str = "No definitions available";

/// Separator placed between rendered entries.
const ENTRY_SEPARATOR: &str = "\n---\n";

/// One dictionary entry as returned by the entries API.
///
/// Every field is optional; empty strings, zero and `false` are treated as
/// absent so they render as placeholders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DictionaryEntry {
    pub headword_persian: Option<String>,
    pub headword_latin: Option<String>,
    pub definitions: Option<String>,
    pub page: Option<String>,
}

impl DictionaryEntry {
    /// Extract an entry from one element of the API's JSON array.
    ///
    /// Elements that are not objects yield an entry with every field absent.
    pub fn from_value(value: &Value) -> Self {
        Self {
            headword_persian: field_text(value, "headword_persian"),
            headword_latin: field_text(value, "headword_latin"),
            definitions: field_text(value, "definitions"),
            page: field_text(value, "page"),
        }
    }

    /// Render the entry as a markdown block terminated by a newline.
    pub fn render(&self) -> String {
        let headword = self.headword_persian.as_deref().unwrap_or(MISSING);
        let transliteration = self.headword_latin.as_deref().unwrap_or(MISSING);
        let definitions = self.definitions.as_deref().unwrap_or(NO_DEFINITIONS);
        let page = self
            .page
            .as_deref()
            .map(|p| format!(" (p. {})", p))
            .unwrap_or_default();

        format!("**{headword}** ({transliteration}){page}\n{definitions}\n")
    }
}

/// Read a field as display text, skipping null and falsy values.
fn field_text(value: &Value, key: &str) -> Option<String> {
    match value.get(key)? {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::Number(n) => Some(number_text(n)),
        other => Some(other.to_string()),
    }
}

/// Integral numbers print without a fractional part, so `12.0` reads `12`.
fn number_text(n: &Number) -> String {
    if let Some(i) = n.as_i64() {
        i.to_string()
    } else if let Some(u) = n.as_u64() {
        u.to_string()
    } else {
        n.as_f64().map_or_else(|| n.to_string(), |f| f.to_string())
    }
}

/// Text reported when the API has nothing for the term.
pub fn no_entries_text(term: &str) -> String {
    format!("No entries found for \"{}\" in the specified field", term)
}

/// Render all entries with the summary header.
pub fn format_entries(term: &str, entries: &[DictionaryEntry]) -> String {
    let count = entries.len();
    let noun = if count == 1 { "entry" } else { "entries" };
    let body = entries
        .iter()
        .map(DictionaryEntry::render)
        .collect::<Vec<_>>()
        .join(ENTRY_SEPARATOR);

    format!("Found {count} {noun} for \"{term}\":\n\n{body}")
}

/// Create a success result with text content.
pub fn success_result(content: String) -> CallToolResult {
    CallToolResult::success(vec![Content::text(content)])
}
