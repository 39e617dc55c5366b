use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::notes::core::note::{Note, NoteInfo};
use crate::shared::core::errors::ApplicationError;
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlNoteInfo {
    pub title: String,
    pub context: String,
    pub author: String,
    pub is_public: bool,
}

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlNote {
    pub id: i64,
    pub info: GqlNoteInfo,
    pub created_at: String,
    pub updated_at: String,
}

impl From<NoteInfo> for GqlNoteInfo {
    fn from(v: NoteInfo) -> Self {
        Self {
            title: v.title,
            context: v.context,
            author: v.author,
            is_public: v.is_public,
        }
    }
}

impl From<Note> for GqlNote {
    fn from(v: Note) -> Self {
        Self {
            id: v.id,
            info: v.info.into(),
            created_at: v.created_at.to_rfc3339(),
            updated_at: v.updated_at.to_rfc3339(),
        }
    }
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn note(&self, context: &Context<'_>, id: i64) -> GqlResult<Option<GqlNote>> {
        let state = context.data_unchecked::<AppState>();
        match state.get_handler.handle(id).await {
            Ok(note) => Ok(Some(note.into())),
            Err(ApplicationError::NotFound(_)) => Ok(None),
            Err(e) => Err(async_graphql::Error::new(e.to_string())),
        }
    }
}
