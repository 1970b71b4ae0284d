use tracing_subscriber::EnvFilter;

// This main function is the entry point when running `cargo run -p web-server`.
// It reads ./config.toml and APP__* overrides, then serves against PostgreSQL.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let settings = configuration::load_settings(None)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&settings.log.filter)),
        )
        .init();
    tracing::debug!(
        database_host = %settings.database.host,
        database = %settings.database.database_name,
        "Configuration loaded."
    );

    web_server::run_server(&settings).await
}
