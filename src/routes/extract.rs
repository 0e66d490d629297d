use axum::extract::FromRequest;

use crate::error::Error;

/// `axum::Json` whose rejections render through [`Error`] as 400s.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(Error))]
pub struct ApiJson<T>(pub T);
