use notes::shell::config::ServerConfig;
use notes::shell::http::router;
use notes::shell::state::AppState;
use notes::shell::{init_tracing, shutdown_on};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = ServerConfig::from_env()?;
    init_tracing(&config.log_filter);

    let app = router(AppState::in_memory());

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    tracing::info!("Notes endpoint: http://{}/notes", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_on(tokio::signal::ctrl_c()))
        .await?;
    Ok(())
}
