//! Runtime settings loading from config.toml and environment variables.
//!
//! Settings resolve in three layers: built-in defaults, then an optional
//! `config.toml`, then environment variables. The Discord bot token is
//! deliberately not part of [`Settings`]; it is read in `main` directly
//! before use.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Default base URL of the remote catalog API.
pub const DEFAULT_API_BASE_URL: &str = "https://vyla-api.vercel.app/api";

const DEFAULT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_PAGE_SIZE: usize = 5;
const DEFAULT_SESSION_TTL_SECS: u64 = 900;

// Discord rejects messages with more than ten embeds.
const MAX_PAGE_SIZE: usize = 10;

/// Resolved runtime settings shared across the bot.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Base URL of the catalog API, without a trailing slash.
    pub api_base_url: String,
    /// Fixed timeout applied to every catalog request.
    pub request_timeout: Duration,
    /// Number of items shown per browse page.
    pub page_size: usize,
    /// Lifetime of a browse session and its interactive components.
    pub session_ttl: Duration,
    /// When set, commands are only served in this channel.
    pub allowed_channel_id: Option<u64>,
}

/// Structure of the optional config.toml file.
#[derive(Debug, Default, Deserialize)]
pub struct FileConfig {
    /// `[api]` section.
    pub api: Option<ApiSection>,
    /// `[browse]` section.
    pub browse: Option<BrowseSection>,
}

/// The `[api]` section of config.toml.
#[derive(Debug, Default, Deserialize)]
pub struct ApiSection {
    /// Base URL override for the catalog API.
    pub base_url: Option<String>,
    /// Request timeout in seconds.
    pub timeout_secs: Option<u64>,
}

/// The `[browse]` section of config.toml.
#[derive(Debug, Default, Deserialize)]
pub struct BrowseSection {
    /// Items per browse page (1..=10).
    pub page_size: Option<usize>,
    /// Browse session lifetime in seconds.
    pub session_ttl_secs: Option<u64>,
}

impl Settings {
    /// Loads settings from `./config.toml` (if present) and the environment.
    ///
    /// Recognized environment variables: `CATALOG_API_URL` overrides the
    /// API base URL, `ALLOWED_CHANNEL_ID` restricts the bot to one channel.
    pub fn load() -> Result<Self> {
        let file = load_file_config("config.toml")?;
        let env = EnvOverrides::from_env()?;
        Self::resolve(file, env)
    }

    /// Merges defaults, file configuration, and environment overrides.
    fn resolve(file: FileConfig, env: EnvOverrides) -> Result<Self> {
        let api = file.api.unwrap_or_default();
        let browse = file.browse.unwrap_or_default();

        let api_base_url = env
            .api_base_url
            .or(api.base_url)
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let page_size = browse.page_size.unwrap_or(DEFAULT_PAGE_SIZE);
        if page_size == 0 || page_size > MAX_PAGE_SIZE {
            return Err(Error::Config(format!(
                "browse.page_size must be between 1 and {MAX_PAGE_SIZE}, got {page_size}"
            )));
        }

        let timeout_secs = api.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS);
        if timeout_secs == 0 {
            return Err(Error::Config(
                "api.timeout_secs must be greater than zero".to_string(),
            ));
        }

        Ok(Self {
            api_base_url,
            request_timeout: Duration::from_secs(timeout_secs),
            page_size,
            session_ttl: Duration::from_secs(
                browse.session_ttl_secs.unwrap_or(DEFAULT_SESSION_TTL_SECS),
            ),
            allowed_channel_id: env.allowed_channel_id,
        })
    }
}

/// Environment variable overrides applied on top of file configuration.
#[derive(Debug, Default)]
struct EnvOverrides {
    api_base_url: Option<String>,
    allowed_channel_id: Option<u64>,
}

impl EnvOverrides {
    fn from_env() -> Result<Self> {
        let api_base_url = std::env::var("CATALOG_API_URL").ok();
        let allowed_channel_id = match std::env::var("ALLOWED_CHANNEL_ID") {
            Ok(raw) => Some(raw.parse::<u64>().map_err(|_| {
                Error::Config(format!("ALLOWED_CHANNEL_ID is not a channel id: {raw}"))
            })?),
            Err(_) => None,
        };
        Ok(Self {
            api_base_url,
            allowed_channel_id,
        })
    }
}

/// Parses the optional config.toml, returning defaults when it is absent.
fn load_file_config<P: AsRef<Path>>(path: P) -> Result<FileConfig> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(FileConfig::default());
    }
    let contents = std::fs::read_to_string(path)
        .map_err(|e| Error::Config(format!("Failed to read {}: {e}", path.display())))?;
    parse_file_config(&contents)
}

/// Parses config.toml contents.
fn parse_file_config(contents: &str) -> Result<FileConfig> {
    toml::from_str(contents).map_err(|e| Error::Config(format!("Failed to parse config.toml: {e}")))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_defaults_when_nothing_configured() {
        let settings =
            Settings::resolve(FileConfig::default(), EnvOverrides::default()).unwrap();
        assert_eq!(settings.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(settings.request_timeout, Duration::from_secs(10));
        assert_eq!(settings.page_size, 5);
        assert_eq!(settings.session_ttl, Duration::from_secs(900));
        assert_eq!(settings.allowed_channel_id, None);
    }

    #[test]
    fn test_parse_full_file_config() {
        let toml_str = r#"
            [api]
            base_url = "https://example.test/api/"
            timeout_secs = 5

            [browse]
            page_size = 3
            session_ttl_secs = 120
        "#;
        let file = parse_file_config(toml_str).unwrap();
        let settings = Settings::resolve(file, EnvOverrides::default()).unwrap();
        // Trailing slash is stripped so path concatenation stays clean
        assert_eq!(settings.api_base_url, "https://example.test/api");
        assert_eq!(settings.request_timeout, Duration::from_secs(5));
        assert_eq!(settings.page_size, 3);
        assert_eq!(settings.session_ttl, Duration::from_secs(120));
    }

    #[test]
    fn test_env_overrides_file() {
        let toml_str = r#"
            [api]
            base_url = "https://from-file.test"
        "#;
        let file = parse_file_config(toml_str).unwrap();
        let env = EnvOverrides {
            api_base_url: Some("https://from-env.test".to_string()),
            allowed_channel_id: Some(42),
        };
        let settings = Settings::resolve(file, env).unwrap();
        assert_eq!(settings.api_base_url, "https://from-env.test");
        assert_eq!(settings.allowed_channel_id, Some(42));
    }

    #[test]
    fn test_rejects_zero_page_size() {
        let file = FileConfig {
            api: None,
            browse: Some(BrowseSection {
                page_size: Some(0),
                session_ttl_secs: None,
            }),
        };
        let err = Settings::resolve(file, EnvOverrides::default()).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_rejects_oversized_page_size() {
        let file = FileConfig {
            api: None,
            browse: Some(BrowseSection {
                page_size: Some(11),
                session_ttl_secs: None,
            }),
        };
        assert!(Settings::resolve(file, EnvOverrides::default()).is_err());
    }

    #[test]
    fn test_rejects_invalid_toml() {
        assert!(parse_file_config("[api\nbase_url = ").is_err());
    }
}
