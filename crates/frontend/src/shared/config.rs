//! Client configuration.
//!
//! The dashboard is a static WASM bundle, so configuration is baked in at
//! build time: the `ADMIN_DASHBOARD_CONFIG` environment variable may hold a
//! TOML document that replaces the embedded default.

use once_cell::sync::Lazy;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    /// Full base URL, e.g. "http://192.168.1.3:3000/api". When absent the
    /// base is derived from the page location plus `port` and `prefix`.
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_prefix")]
    pub prefix: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_port() -> u16 {
    3000
}

fn default_prefix() -> String {
    "/api".to_string()
}

fn default_level() -> String {
    "debug".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            port: default_port(),
            prefix: default_prefix(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

impl ApiConfig {
    /// Build the API base from the page location parts.
    ///
    /// `protocol` comes from `window.location.protocol` and keeps its trailing
    /// colon ("http:").
    pub fn resolve_base(&self, protocol: &str, hostname: &str) -> String {
        if let Some(base) = self.base_url.as_deref().filter(|b| !b.trim().is_empty()) {
            return base.trim_end_matches('/').to_string();
        }
        let prefix = self.prefix.trim_end_matches('/');
        format!("{}//{}:{}{}", protocol, hostname, self.port, prefix)
    }
}

impl LoggingConfig {
    pub fn log_level(&self) -> log::Level {
        match self.level.to_ascii_lowercase().as_str() {
            "error" => log::Level::Error,
            "warn" => log::Level::Warn,
            "info" => log::Level::Info,
            "trace" => log::Level::Trace,
            _ => log::Level::Debug,
        }
    }

    pub fn level_filter(&self) -> log::LevelFilter {
        self.log_level().to_level_filter()
    }
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
port = 3000
prefix = "/api"

[logging]
level = "debug"
"#;

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    Ok(config)
}

/// Load configuration
///
/// Search order:
/// 1. `ADMIN_DASHBOARD_CONFIG` captured at build time
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Some(contents) = option_env!("ADMIN_DASHBOARD_CONFIG") {
        match parse_config(contents) {
            Ok(config) => return Ok(config),
            Err(e) => log::warn!("ADMIN_DASHBOARD_CONFIG is invalid, using defaults: {}", e),
        }
    }
    parse_config(DEFAULT_CONFIG)
}

static CONFIG: Lazy<Config> = Lazy::new(|| {
    load_config().unwrap_or_else(|e| {
        log::warn!("Failed to load configuration: {}", e);
        Config {
            api: ApiConfig::default(),
            logging: LoggingConfig::default(),
        }
    })
});

/// Process-wide configuration, parsed on first use.
pub fn config() -> &'static Config {
    &CONFIG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.api.port, 3000);
        assert_eq!(config.api.prefix, "/api");
        assert_eq!(config.api.base_url, None);
        assert_eq!(config.logging.log_level(), log::Level::Debug);
    }

    #[test]
    fn test_base_from_location() {
        let api = ApiConfig::default();
        assert_eq!(
            api.resolve_base("http:", "localhost"),
            "http://localhost:3000/api"
        );
    }

    #[test]
    fn test_explicit_base_url_wins() {
        let config = parse_config(
            r#"
            [api]
            base_url = "http://192.168.1.3:3000/api/"
            "#,
        )
        .unwrap();
        assert_eq!(
            config.api.resolve_base("https:", "example.com"),
            "http://192.168.1.3:3000/api"
        );
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config.api, ApiConfig::default());
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_level_filter_follows_config() {
        let warn = LoggingConfig {
            level: "WARN".to_string(),
        };
        assert_eq!(warn.level_filter(), log::LevelFilter::Warn);
        let typo = LoggingConfig {
            level: "verbose".to_string(),
        };
        assert_eq!(typo.level_filter(), log::LevelFilter::Debug);
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        assert!(parse_config("[api\nport = ").is_err());
    }
}
