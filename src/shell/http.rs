use axum::{
    Extension, Router,
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::modules::notes::use_cases::create_note::inbound::http as create_http;
use crate::modules::notes::use_cases::get_note::inbound::http as get_http;
use crate::shell::graphql::{self, schema};
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/notes", post(create_http::handle))
        .route("/notes/{id}", get(get_http::handle))
        .route("/graphql", get(graphql::graphiql).post(graphql::graphql))
        .layer(Extension(schema(state.clone())))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
