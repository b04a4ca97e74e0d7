use anyhow::{Context, Result};
use tracing::info;

use country_lang_negotiation::{config, server};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored when the variables come from the environment)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("country_lang_negotiation=info".parse()?),
        )
        .init();

    let config = config::Config::from_env()?;
    info!(
        "Negotiating {} languages across {} country codes (field '{}')",
        config.languages.len(),
        config.country_codes.len(),
        config.country_code_field
    );

    let negotiator = server::negotiator_from_config(&config);
    let app = server::build_app(negotiator);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("Listening on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
