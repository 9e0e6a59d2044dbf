//! Networking modules for the blog REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the HTTP calls, `error` defines the typed failure kinds,
//! and `types` holds the wire schema.

pub mod api;
pub mod error;
pub mod types;
