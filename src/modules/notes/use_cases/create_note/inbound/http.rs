use axum::{
    body::Bytes,
    extract::{State, rejection::BytesRejection},
    http::StatusCode,
    response::Response,
};

use crate::modules::notes::core::note::NoteInfo;
use crate::shared::core::errors::ApplicationError;
use crate::shared::infrastructure::json_response::json_response;
use crate::shell::state::AppState;

// The body is decoded whatever its content type. The note is stored before
// the response is encoded, so an encoding failure still leaves the note
// retrievable.
pub async fn handle(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Response, ApplicationError> {
    let info = decode_note_info(body)?;

    let note = state.create_handler.handle(info).await;
    json_response(StatusCode::CREATED, &note)
}

fn decode_note_info(body: Result<Bytes, BytesRejection>) -> Result<NoteInfo, ApplicationError> {
    let reason = match body {
        Ok(bytes) => match NoteInfo::from_json(&bytes) {
            Ok(info) => return Ok(info),
            Err(e) => e.to_string(),
        },
        Err(rejection) => rejection.body_text(),
    };
    tracing::warn!(%reason, "rejected note payload");
    Err(ApplicationError::BadInput("failed to decode note data".into()))
}
