use anyhow::Context;
use clap::{Parser, Subcommand};
use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, Table};
use configuration::{ConfigArgs, LogSettings, Settings};
use core_types::Country;
use database::{CountryRepository, DbRepository, InMemoryRepository};
use scenarios::CountryScenarios;
use std::sync::Arc;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// The main entry point for the countries directory.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine; the environment and config.toml still apply.
    dotenvy::dotenv().ok();

    // Parse command-line arguments
    let cli = Cli::parse();
    let settings = configuration::load_settings(cli.config.config.as_deref())
        .context("Failed to load configuration")?;

    // Keep the guard alive for the whole run so buffered log lines are flushed on exit.
    let _log_guard = init_tracing(&settings.log);
    log_settings(&settings);

    // Execute the appropriate command
    match cli.command {
        Commands::Serve(args) => handle_serve(args, &settings).await,
        Commands::CheckDb => handle_check_db(&settings).await,
        Commands::List => handle_list(&settings).await,
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// A REST directory of countries keyed by their ISO 3166 alpha-2 code.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    config: ConfigArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the HTTP API.
    Serve(ServeArgs),
    /// Check that the configured database is reachable.
    CheckDb,
    /// Print every country in the database as a table.
    List,
}

#[derive(Parser)]
struct ServeArgs {
    /// Keep the directory in process memory instead of PostgreSQL.
    /// Everything is lost when the server stops.
    #[arg(long)]
    in_memory: bool,
}

// ==============================================================================
// Command Logic
// ==============================================================================

async fn handle_serve(args: ServeArgs, settings: &Settings) -> anyhow::Result<()> {
    let repository: Arc<dyn CountryRepository> = if args.in_memory {
        tracing::warn!("Serving from the in-memory repository; nothing will be persisted.");
        Arc::new(InMemoryRepository::new())
    } else {
        Arc::new(connect(settings).await?)
    };
    web_server::serve(settings, repository).await
}

async fn handle_check_db(settings: &Settings) -> anyhow::Result<()> {
    connect(settings).await?;
    println!(
        "Database '{}' at {}:{} is reachable.",
        settings.database.database_name, settings.database.host, settings.database.port
    );
    Ok(())
}

async fn handle_list(settings: &Settings) -> anyhow::Result<()> {
    let repository = connect(settings).await?;
    let countries = CountryScenarios::new(Arc::new(repository)).get_all().await?;

    if countries.is_empty() {
        println!("The directory is empty.");
    } else {
        println!("{}", render_table(&countries));
    }
    Ok(())
}

async fn connect(settings: &Settings) -> anyhow::Result<DbRepository> {
    DbRepository::connect(&settings.database)
        .await
        .with_context(|| {
            format!(
                "Database '{}' at {}:{} is unreachable",
                settings.database.database_name, settings.database.host, settings.database.port
            )
        })
}

fn render_table(countries: &[Country]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec![
        "Alpha-2",
        "Alpha-3",
        "Numeric",
        "Name",
        "Full name",
        "Population",
        "Area (km²)",
    ]);

    for country in countries {
        table.add_row(vec![
            Cell::new(&country.iso_alpha2),
            Cell::new(&country.iso_alpha3),
            Cell::new(&country.iso_numeric),
            Cell::new(&country.short_name),
            Cell::new(country.full_name.as_deref().unwrap_or("-")),
            Cell::new(country.population).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.1}", country.area)).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

// ==============================================================================
// Logging
// ==============================================================================

fn log_settings(settings: &Settings) {
    tracing::debug!(
        server = %format!("{}:{}", settings.server.host, settings.server.port),
        trust_forwarded_headers = settings.server.trust_forwarded_headers,
        database_host = %settings.database.host,
        database = %settings.database.database_name,
        "Configuration loaded."
    );
}

/// Installs the global subscriber. `RUST_LOG` wins over the configured filter.
/// Logs go to stdout, or to a daily-rolling file when a directory is configured.
fn init_tracing(log: &LogSettings) -> WorkerGuard {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.filter));

    let (writer, guard) = match &log.directory {
        Some(directory) => tracing_appender::non_blocking(tracing_appender::rolling::daily(
            directory,
            "countries-directory.log",
        )),
        None => tracing_appender::non_blocking(std::io::stdout()),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(log.directory.is_none())
        .init();

    guard
}
