//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render console chrome and data widgets while reading shared
//! auth and config state from Leptos context providers.

pub mod charts;
pub mod error_modal;
pub mod guard;
pub mod multi_select;
pub mod navbar;
pub mod pagination;
pub mod query_item;
