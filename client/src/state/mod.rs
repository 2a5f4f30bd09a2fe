//! Client state types shared through Leptos contexts and page signals.
//!
//! SYSTEM CONTEXT
//! ==============
//! These modules hold plain data plus the transitions on it; network calls
//! and rendering live elsewhere so each transition can be unit tested.

pub mod auth;
pub mod query_detail;
pub mod query_list;
pub mod session;
pub mod user_stats;
