use axum::{
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::shared::core::errors::ApplicationError;

/// Serializes `value` up front so an encoding fault surfaces as
/// `ApplicationError::Encoding` instead of axum's plain-text 500.
pub fn json_response<T: Serialize>(
    status: StatusCode,
    value: &T,
) -> Result<Response, ApplicationError> {
    let body = serde_json::to_vec(value).map_err(|e| ApplicationError::Encoding(e.to_string()))?;
    Ok((status, [(header::CONTENT_TYPE, "application/json")], body).into_response())
}
