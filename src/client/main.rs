use notes::client::NotesClient;
use notes::client::fake::fake_note_info;
use notes::shell::config::ClientConfig;
use notes::shell::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = ClientConfig::from_env()?;
    init_tracing(&config.log_filter);

    let client = NotesClient::new(&config.base_url);

    let info = fake_note_info(&mut rand::thread_rng());
    let created = client.create_note(&info).await?;
    tracing::info!(?created, "note created");

    let fetched = client.get_note(created.id).await?;
    tracing::info!(?fetched, "note fetched");

    Ok(())
}
