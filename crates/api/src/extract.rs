//! Request extractors whose rejections go through [`AppError`].
//!
//! Axum's stock `Json` and `Query` reject with plain-text bodies; these
//! wrappers turn malformed bodies and query strings into the usual
//! `{"error","code"}` JSON with status 400.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// JSON request body.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Deserialized query string.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);
