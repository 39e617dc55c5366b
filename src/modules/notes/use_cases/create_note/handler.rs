use crate::modules::notes::adapters::outbound::note_store::NoteStore;
use crate::modules::notes::core::note::{Note, NoteInfo};
use crate::modules::notes::core::note_id::NoteIdGenerator;
use chrono::Utc;
use std::sync::Arc;

pub struct CreateNoteHandler<TStore, TIds>
where
    TStore: NoteStore + 'static,
    TIds: NoteIdGenerator + 'static,
{
    store: Arc<TStore>,
    ids: Arc<TIds>,
}

impl<TStore, TIds> CreateNoteHandler<TStore, TIds>
where
    TStore: NoteStore + 'static,
    TIds: NoteIdGenerator + 'static,
{
    pub fn new(store: Arc<TStore>, ids: Arc<TIds>) -> Self {
        Self { store, ids }
    }

    /// Assigns an id and timestamps, then stores the note. Nothing here
    /// can fail: malformed payloads are rejected before this is called.
    pub async fn handle(&self, info: NoteInfo) -> Note {
        let note = Note::new(self.ids.next_id(), info, Utc::now());
        self.store.put(note.clone()).await;
        tracing::info!(note_id = note.id, "note created");
        note
    }
}
