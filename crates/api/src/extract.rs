//! Request extractors whose rejections render as [`AppError`] bodies.

use axum::extract::FromRequest;
use movies_core::types::DbId;

use crate::error::{AppError, AppResult};

/// `Json<T>` whose rejection is an [`AppError`], so a malformed body yields
/// `{"errors": [{"body": "..."}]}` instead of axum's plain-text rejection.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Parse a raw `{id}` path segment into a [`DbId`].
pub fn parse_id(raw: &str) -> AppResult<DbId> {
    raw.trim()
        .parse::<DbId>()
        .map_err(|_| AppError::bad_request("id", "Id must be a number"))
}
