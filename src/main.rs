use dotenvy::dotenv;
use fridge_chef::{
    bot::{self, BotData},
    config::{self, Secrets},
    core::{CommandHandler, GeminiClient},
    errors::Result,
    keepalive,
};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file; env vars can also be set externally
    dotenv().ok();
    info!("👨‍🍳 Fridge Chef is getting ready to open...");

    // 3. Secrets are required; fail fast without them
    let secrets = Secrets::from_env()
        .inspect_err(|e| error!("Cannot start without credentials: {}", e))?;

    // 4. Load the application configuration
    let app_config = config::load_app_configuration()
        .inspect_err(|e| error!("Critical error loading application configuration: {}", e))?;
    info!(
        model = %app_config.generation.model,
        google_search = app_config.generation.google_search,
        split_policy = ?app_config.formatting.split_policy,
        "Successfully processed application configuration."
    );

    // 5. Keep-alive endpoint for the hosting platform's port check
    let port = config::server::keepalive_port()?;
    let keepalive = keepalive::spawn(port)
        .await
        .inspect_err(|e| error!("Failed to start keep-alive server on port {}: {}", port, e))?;

    // 6. Run the bot
    let client = Arc::new(GeminiClient::new(secrets.gemini_api_key.as_str()));
    let handler = CommandHandler::new(client, Arc::new(app_config));
    let result = bot::run_bot(&secrets.discord_token, BotData::new(handler)).await;

    keepalive.abort();
    result
}
