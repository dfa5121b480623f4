//! Domain types and pure validation logic for the movies service.
//!
//! Nothing in this crate touches the database or HTTP; both the `db` and
//! `api` crates build on it.

pub mod error;
pub mod movie;
pub mod types;
pub mod validation;
