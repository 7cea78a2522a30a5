//! Tool definitions module.
//!
//! This module exports all available tool definitions, grouped by the
//! upstream service they talk to.

pub mod steingass;

pub use steingass::{
    DictionaryApi, HttpDictionaryApi, SearchDictionaryParams, SearchDictionaryTool,
};
