use crate::modules::notes::adapters::outbound::note_store_in_memory::InMemoryNoteStore;
use crate::modules::notes::core::note_id::SequentialNoteIds;
use crate::modules::notes::use_cases::create_note::handler::CreateNoteHandler;
use crate::modules::notes::use_cases::get_note::handler::GetNoteHandler;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub create_handler: Arc<CreateNoteHandler<InMemoryNoteStore, SequentialNoteIds>>,
    pub get_handler: Arc<GetNoteHandler<InMemoryNoteStore>>,
    pub store: Arc<InMemoryNoteStore>,
}

impl AppState {
    /// Wires both handlers to one freshly created, empty store.
    pub fn in_memory() -> Self {
        let store = Arc::new(InMemoryNoteStore::new());
        let ids = Arc::new(SequentialNoteIds::new());
        Self {
            create_handler: Arc::new(CreateNoteHandler::new(store.clone(), ids)),
            get_handler: Arc::new(GetNoteHandler::new(store.clone())),
            store,
        }
    }
}
