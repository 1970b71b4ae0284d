use crate::error::ConfigError;
use std::path::Path;

// Declare the modules that make up this crate.
#[cfg(feature = "clap")]
pub mod cli;
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
#[cfg(feature = "clap")]
pub use cli::ConfigArgs;
pub use settings::{DatabaseSettings, LogSettings, ServerSettings, Settings};

/// The file looked up in the working directory when no explicit path is given.
/// Its absence is not an error; defaults and the environment still apply.
pub const DEFAULT_CONFIG_FILE: &str = "config.toml";

/// Prefix of the environment variables that override file values,
/// e.g. `APP__DATABASE__HOST=db.internal`.
pub const ENV_PREFIX: &str = "APP";

/// Loads the application settings.
///
/// Sources are layered in increasing precedence: built-in defaults, the TOML
/// file (`path`, which must exist, or an optional `config.toml`), and `APP__*`
/// environment variables. The result is validated before it is returned.
pub fn load_settings(path: Option<&Path>) -> Result<Settings, ConfigError> {
    let file = match path {
        Some(path) => config::File::from(path).required(true),
        None => config::File::with_name(DEFAULT_CONFIG_FILE).required(false),
    };

    let builder = config::Config::builder()
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 8080_i64)?
        .set_default("server.trust_forwarded_headers", false)?
        .set_default("database.host", "localhost")?
        .set_default("database.port", 5432_i64)?
        .set_default("database.username", "root")?
        .set_default("database.password", "root")?
        .set_default("database.database_name", "countries_db")?
        .set_default("database.max_connections", 10_i64)?
        .set_default("database.acquire_timeout_secs", 5_i64)?
        .set_default("log.filter", "info")?
        .add_source(file)
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__"),
        )
        .build()?;

    // Attempt to deserialize the entire configuration into our `Settings` struct
    let settings = builder.try_deserialize::<Settings>()?;
    settings.validate()?;
    Ok(settings)
}
