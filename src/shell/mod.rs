// Composition root for the notes service.
//
// Responsibilities
// - Read config from environment.
// - Instantiate the in-memory store and wire it into the use case handlers.
// - Expose the HTTP router and the GraphQL schema.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;

use tracing_subscriber::{EnvFilter, fmt};

pub fn init_tracing(filter: &str) {
    let _ = fmt()
        .with_env_filter(EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info")))
        .try_init();
}

/// Resolves once `signal` fires. If the signal listener cannot be installed
/// this never resolves, so the server keeps serving until it is killed.
pub async fn shutdown_on(signal: impl Future<Output = std::io::Result<()>>) {
    if let Err(e) = signal.await {
        tracing::error!(error = %e, "failed to listen for shutdown signal, serving until killed");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
