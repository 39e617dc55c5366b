use crate::modules::notes::adapters::outbound::note_store_in_memory::InMemoryNoteStore;
use crate::modules::notes::core::note_id::SequentialNoteIds;
use crate::modules::notes::use_cases::create_note::handler::CreateNoteHandler;
use crate::modules::notes::use_cases::get_note::handler::GetNoteHandler;
use crate::shared::core::errors::ApplicationError;
use crate::tests::fixtures::note_info::NoteInfoBuilder;
use std::collections::HashSet;
use std::sync::Arc;
use tokio::task::JoinSet;

fn handlers() -> (
    Arc<InMemoryNoteStore>,
    Arc<CreateNoteHandler<InMemoryNoteStore, SequentialNoteIds>>,
    Arc<GetNoteHandler<InMemoryNoteStore>>,
) {
    let store = Arc::new(InMemoryNoteStore::new());
    let create = Arc::new(CreateNoteHandler::new(
        store.clone(),
        Arc::new(SequentialNoteIds::new()),
    ));
    let get = Arc::new(GetNoteHandler::new(store.clone()));
    (store, create, get)
}

#[tokio::test]
async fn creates_then_gets_a_note_by_its_id() {
    let (_, create, get) = handlers();
    let info = NoteInfoBuilder::new()
        .title("Stout")
        .context("10.0.0.1")
        .author("Ada")
        .is_public(true)
        .build();

    let created = create.handle(info.clone()).await;
    let fetched = get.handle(created.id).await.unwrap();

    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.info, info);
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn never_returns_notes_that_were_not_created() {
    let (_, create, get) = handlers();
    let created = create.handle(NoteInfoBuilder::new().build()).await;

    for id in [0, created.id + 1, -created.id, i64::MAX] {
        assert!(matches!(
            get.handle(id).await,
            Err(ApplicationError::NotFound(_))
        ));
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn assigns_distinct_ids_under_concurrent_creates() {
    let (store, create, _) = handlers();
    let mut tasks = JoinSet::new();

    for n in 0..10_000 {
        let create = create.clone();
        tasks.spawn(async move {
            create
                .handle(NoteInfoBuilder::new().title(format!("note-{n}")).build())
                .await
                .id
        });
    }

    let mut ids = HashSet::new();
    while let Some(id) = tasks.join_next().await {
        assert!(ids.insert(id.unwrap()), "duplicate id");
    }
    assert_eq!(ids.len(), 10_000);
    assert_eq!(store.len().await, 10_000);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn readers_after_a_create_see_the_complete_note() {
    let (_, create, get) = handlers();
    let mut writers = JoinSet::new();

    for n in 0..500 {
        let create = create.clone();
        let get = get.clone();
        writers.spawn(async move {
            let info = NoteInfoBuilder::new()
                .title(format!("title-{n}"))
                .author(format!("author-{n}"))
                .build();
            let id = create.handle(info.clone()).await.id;

            let mut readers = JoinSet::new();
            for _ in 0..4 {
                let get = get.clone();
                readers.spawn(async move { get.handle(id).await });
            }
            while let Some(read) = readers.join_next().await {
                let note = read.unwrap().expect("note visible after create");
                assert_ne!(note.id, 0);
                assert_eq!(note.info, info);
                assert_eq!(note.created_at, note.updated_at);
            }
        });
    }

    while let Some(joined) = writers.join_next().await {
        joined.unwrap();
    }
}
