//! Movies API server library.
//!
//! Exposes config, state, error handling, and routes so integration tests and
//! the binary entrypoint build the exact same application.

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod openapi;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
