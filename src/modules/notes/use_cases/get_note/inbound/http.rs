use axum::{
    extract::{Path, State, rejection::PathRejection},
    http::StatusCode,
    response::Response,
};

use crate::modules::notes::core::note_id::parse_note_id;
use crate::shared::core::errors::ApplicationError;
use crate::shared::infrastructure::json_response::json_response;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Response, ApplicationError> {
    let Path(raw_id) = path.map_err(|rejection| {
        tracing::warn!(reason = %rejection.body_text(), "rejected note path");
        ApplicationError::BadInput("invalid note id".into())
    })?;
    let id = parse_note_id(&raw_id).inspect_err(|_| {
        tracing::warn!(raw_id = %raw_id, "rejected note id");
    })?;
    let note = state.get_handler.handle(id).await?;
    json_response(StatusCode::OK, &note)
}
