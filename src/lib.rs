//! Model and validation layer for the helpdesk support-chat backend.
//!
//! Request payloads validate themselves via [`validator::Validate`]; response
//! shapes serialize to the wire format the frontend expects. Routing,
//! persistence, and realtime delivery live in the consuming services.

pub mod error;
pub mod models;
pub mod pagination;

pub use error::{ValidationError, ValidationResult};
pub use pagination::PageInfo;
