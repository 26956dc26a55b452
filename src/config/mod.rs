/// Static genre tables and lookups
pub mod genres;

/// Runtime settings from config.toml and environment variables
pub mod settings;
