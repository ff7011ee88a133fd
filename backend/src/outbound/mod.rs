//! Outbound adapters implementing the driven repository ports.
//!
//! Adapters translate between domain types and their persisted form and
//! contain no business rules.

pub mod json_store;
