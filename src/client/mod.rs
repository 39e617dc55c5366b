//! Typed HTTP client for the notes server.

pub mod fake;

use reqwest::StatusCode;
use thiserror::Error;

use crate::modules::notes::core::note::{Note, NoteInfo};
use crate::modules::notes::core::note_id::NoteId;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error("note {0} not found")]
    NotFound(NoteId),

    #[error("unexpected status {status} from {operation}")]
    UnexpectedStatus {
        operation: &'static str,
        status: StatusCode,
    },
}

pub struct NotesClient {
    base_url: String,
    client: reqwest::Client,
}

impl NotesClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// POST /notes, expecting 201.
    pub async fn create_note(&self, info: &NoteInfo) -> Result<Note, ClientError> {
        let resp = self
            .client
            .post(format!("{}/notes", self.base_url))
            .json(info)
            .send()
            .await?;

        if resp.status() != StatusCode::CREATED {
            return Err(ClientError::UnexpectedStatus {
                operation: "create_note",
                status: resp.status(),
            });
        }
        Ok(resp.json::<Note>().await?)
    }

    /// GET /notes/{id}, expecting 200.
    pub async fn get_note(&self, id: NoteId) -> Result<Note, ClientError> {
        let resp = self
            .client
            .get(format!("{}/notes/{}", self.base_url, id))
            .send()
            .await?;

        match resp.status() {
            StatusCode::OK => Ok(resp.json::<Note>().await?),
            StatusCode::NOT_FOUND => Err(ClientError::NotFound(id)),
            status => Err(ClientError::UnexpectedStatus {
                operation: "get_note",
                status,
            }),
        }
    }
}
