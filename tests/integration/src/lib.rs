//! Integration test utilities for the reaction relay
//!
//! Mock servers standing in for the Discord REST API and the n8n webhook,
//! plus JSON fixtures shaped like the real payloads.


pub use fixtures::*;
pub use helpers::*;
