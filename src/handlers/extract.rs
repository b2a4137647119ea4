//! Request extractors
//!
//! `AppJson` behaves like `axum::Json` but reports body rejections (bad
//! syntax, wrong field types, missing content type) through `AppError`, so
//! clients always receive the standard error envelope.

use axum::extract::FromRequest;

use crate::error::AppError;

#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
