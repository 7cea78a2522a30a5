//! Steingass dictionary tools.
//!
//! - `search`: the `search_dictionary` tool (parameters, validation, execution)
//! - `client`: the entries API seam and response interpretation
//! - `common`: entry extraction and text rendering

pub mod client;
pub mod common;
pub mod search;

pub use client::{ApiResponse, DictionaryApi, HttpDictionaryApi, LookupOutcome};
pub use common::DictionaryEntry;
pub use search::{MatchType, SearchDictionaryParams, SearchDictionaryTool, SearchField};
