use crate::modules::notes::adapters::outbound::note_store::NoteStore;
use crate::modules::notes::core::note::Note;
use crate::modules::notes::core::note_id::NoteId;
use crate::shared::core::errors::ApplicationError;
use std::sync::Arc;

pub struct GetNoteHandler<TStore>
where
    TStore: NoteStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> GetNoteHandler<TStore>
where
    TStore: NoteStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, id: NoteId) -> Result<Note, ApplicationError> {
        let note = self.store.get(id).await;
        tracing::debug!(note_id = id, found = note.is_some(), "note lookup");
        note.ok_or(ApplicationError::NotFound(id))
    }
}
