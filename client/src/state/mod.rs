//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by screen (`auth` form, `blogs` listing, single `blog`) so
//! each page owns one small model held in a `RwSignal`.

pub mod auth;
pub mod blog;
pub mod blogs;
