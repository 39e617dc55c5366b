// Port for the authoritative id -> note mapping.
//
// Implementations must be safe under arbitrary concurrent callers and must
// only expose notes that were fully built before `put`. Absence is a normal
// outcome, so neither operation can fail.

use async_trait::async_trait;

use crate::modules::notes::core::note::Note;
use crate::modules::notes::core::note_id::NoteId;

#[async_trait]
pub trait NoteStore: Send + Sync {
    /// Inserts the note, overwriting any entry with the same id.
    async fn put(&self, note: Note);

    async fn get(&self, id: NoteId) -> Option<Note>;
}
