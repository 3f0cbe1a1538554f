//! Event Sink Implementations
//!
//! Provides concrete implementations of StoreEventSink:
//! - JsonEventSink: NDJSON output for audit trails and automation

mod json;

pub use json::JsonEventSink;
