use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::modules::notes::core::note_id::NoteId;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("bad input: {0}")]
    BadInput(String),

    #[error("note {0} not found")]
    NotFound(NoteId),

    #[error("failed to encode response: {0}")]
    Encoding(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl ApplicationError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApplicationError::BadInput(_) => StatusCode::BAD_REQUEST,
            ApplicationError::NotFound(_) => StatusCode::NOT_FOUND,
            ApplicationError::Encoding(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        let message = match &self {
            ApplicationError::Encoding(detail) => {
                tracing::error!(%detail, "response encoding failed");
                "internal server error".to_string()
            }
            other => other.to_string(),
        };
        (self.status(), Json(ErrorBody { error: message })).into_response()
    }
}
