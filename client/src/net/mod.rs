//! Networking modules for the remote notes service.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the REST calls and attaches the bearer token; `types` defines
//! the JSON schema shared with the service.

pub mod api;
pub mod types;
