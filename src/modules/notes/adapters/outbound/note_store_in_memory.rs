// In memory implementation of the NoteStore port.
//
// Responsibilities
// - Keep notes in a map keyed by id behind a reader/writer lock.
// - Hold the lock for the map operation only.

use crate::modules::notes::adapters::outbound::note_store::NoteStore;
use crate::modules::notes::core::note::Note;
use crate::modules::notes::core::note_id::NoteId;
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryNoteStore {
    notes: RwLock<HashMap<NoteId, Note>>,
}

impl InMemoryNoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.notes.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.notes.read().await.is_empty()
    }
}

#[async_trait::async_trait]
impl NoteStore for InMemoryNoteStore {
    async fn put(&self, note: Note) {
        let mut guard = self.notes.write().await;
        guard.insert(note.id, note);
    }

    async fn get(&self, id: NoteId) -> Option<Note> {
        self.notes.read().await.get(&id).cloned()
    }
}
