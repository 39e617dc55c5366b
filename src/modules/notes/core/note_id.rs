use std::sync::atomic::{AtomicI64, Ordering};

use crate::shared::core::errors::ApplicationError;

pub type NoteId = i64;

pub trait NoteIdGenerator: Send + Sync {
    fn next_id(&self) -> NoteId;
}

/// Hands out 1, 2, 3, ... Unique for the lifetime of the generator and never 0.
#[derive(Debug)]
pub struct SequentialNoteIds {
    next: AtomicI64,
}

impl SequentialNoteIds {
    pub fn new() -> Self {
        Self {
            next: AtomicI64::new(1),
        }
    }
}

impl Default for SequentialNoteIds {
    fn default() -> Self {
        Self::new()
    }
}

impl NoteIdGenerator for SequentialNoteIds {
    fn next_id(&self) -> NoteId {
        self.next.fetch_add(1, Ordering::Relaxed)
    }
}

pub fn parse_note_id(raw: &str) -> Result<NoteId, ApplicationError> {
    raw.parse::<NoteId>()
        .map_err(|_| ApplicationError::BadInput(format!("invalid note id: {raw:?}")))
}
