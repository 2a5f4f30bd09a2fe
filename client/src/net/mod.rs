//! Networking modules for the slow-query REST service.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` owns transport concerns (base URL, bearer, timeout, 401 redirect),
//! `api` maps endpoints, `types` defines the wire schema, and `error` the
//! failure taxonomy views render.

pub mod api;
pub mod error;
pub mod http;
pub mod types;
