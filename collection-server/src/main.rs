use collection_server::{Config, Server, ServerState, setup_environment};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    // 1. Environment (.env, logging)
    setup_environment();

    // 2. Configuration
    let config = Config::from_env()?;
    tracing::info!("Starting collection-server (env: {})", config.environment);

    // 3. State (pool + migrations, token verifier)
    let state = ServerState::initialize(&config).await?;

    // 4. HTTP server
    let server = Server::new(config, state);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
