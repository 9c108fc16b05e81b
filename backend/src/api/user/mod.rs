//! Per-user state: tasbih counting sessions and app settings.
//!
//! There are no accounts; a user is whatever opaque id the client sends.

pub mod handlers;
pub mod routes;
