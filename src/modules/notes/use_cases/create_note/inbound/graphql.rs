use async_graphql::{Context, Object};

use crate::modules::notes::core::note::NoteInfo;
use crate::modules::notes::use_cases::get_note::inbound::graphql::GqlNote;
use crate::shell::state::AppState;

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn create_note(
        &self,
        context: &Context<'_>,
        title: String,
        #[graphql(name = "context")] note_context: String,
        author: String,
        is_public: bool,
    ) -> GqlNote {
        let state = context.data_unchecked::<AppState>();
        let info = NoteInfo {
            title,
            context: note_context,
            author,
            is_public,
        };
        state.create_handler.handle(info).await.into()
    }
}
