use crate::error::ConfigError;
use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod logging;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use logging::init_tracing;
pub use settings::{Config, DatabaseConfig, LoggingConfig, ServerConfig, StrategyServiceConfig};

/// The file read by `load_config` when it exists.
pub const DEFAULT_CONFIG_FILE: &str = "config.toml";

/// Prefix for environment overrides, e.g. `STRATEGY__SERVER__PORT=9090`.
const ENV_PREFIX: &str = "STRATEGY";

/// Loads the application configuration.
///
/// Built-in defaults are overlaid with `config.toml` (if present) and then with
/// `STRATEGY__*` environment variables.
pub fn load_config() -> Result<Config, ConfigError> {
    let file = config::File::with_name(DEFAULT_CONFIG_FILE).required(false);
    build(file)
}

/// Same as `load_config`, but the given file must exist.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    build(config::File::from(path))
}

fn build<S>(file: S) -> Result<Config, ConfigError>
where
    S: config::Source + Send + Sync + 'static,
{
    let builder = config::Config::builder()
        .add_source(file)
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    // Attempt to deserialize the entire configuration into our `Config` struct
    let config = builder.try_deserialize::<Config>()?;
    validate(&config)?;

    Ok(config)
}

/// Rejects settings that would make the pipeline unusable.
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.strategy_service.url.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "strategy_service.url must not be empty".to_string(),
        ));
    }
    if config.strategy_service.timeout_secs == 0 {
        return Err(ConfigError::ValidationError(
            "strategy_service.timeout_secs must be greater than zero".to_string(),
        ));
    }
    if config.database.default_limit == 0 {
        return Err(ConfigError::ValidationError(
            "database.default_limit must be greater than zero".to_string(),
        ));
    }
    if config.database.max_connections == 0 {
        return Err(ConfigError::ValidationError(
            "database.max_connections must be greater than zero".to_string(),
        ));
    }
    Ok(())
}
