//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render form controls, listing rows and page chrome; pages own
//! the state they read from.

pub mod app_bar;
pub mod auth_form;
pub mod blog_card;
pub mod blog_skeleton;
pub mod labelled_input;
pub mod spinner;
