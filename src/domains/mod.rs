//! Domains module containing business logic organized by bounded contexts.
//!
//! The server exposes tools only; each upstream service gets its own group
//! under `tools::definitions`.

pub mod tools;
