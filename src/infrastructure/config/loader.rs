use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use thiserror::Error;

use crate::domain::models::config::Config;
use crate::infrastructure::logging::logger::parse_log_level;

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid cache ttl_secs: {0}. Must be at least 1")]
    InvalidTtl(u64),

    #[error("Invalid {name} URL: {url:?}. Must be an http(s) URL")]
    InvalidSourceUrl { name: &'static str, url: String },

    #[error("Invalid {name} timeout_secs: {value}. Must be at least 1")]
    InvalidTimeout { name: &'static str, value: u64 },

    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Server host cannot be empty")]
    EmptyHost,
}

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. .groupie/config.yaml (project config)
    /// 3. .groupie/local.yaml (local overrides, optional)
    /// 4. Environment variables (GROUPIE_* prefix, `__` separates nested keys)
    pub fn load() -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(".groupie/config.yaml"))
            .merge(Yaml::file(".groupie/local.yaml"))
            .merge(Env::prefixed("GROUPIE_").split("__"))
            .extract()
            .context("Failed to extract configuration from figment")?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a specific file, still honoring environment
    /// overrides
    pub fn load_from_file(path: impl AsRef<std::path::Path>) -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(path.as_ref()))
            .merge(Env::prefixed("GROUPIE_").split("__"))
            .extract()
            .with_context(|| format!("Failed to load config from {}", path.as_ref().display()))?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate configuration after loading
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        if config.cache.ttl_secs == 0 {
            return Err(ConfigError::InvalidTtl(config.cache.ttl_secs));
        }

        if config.server.host.is_empty() {
            return Err(ConfigError::EmptyHost);
        }

        let sources = &config.sources;
        for (name, url) in [
            ("artists", &sources.artists_url),
            ("locations", &sources.locations_url),
            ("dates", &sources.dates_url),
            ("relations", &sources.relations_url),
            ("geocoding", &config.geocoding.base_url),
        ] {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ConfigError::InvalidSourceUrl {
                    name,
                    url: url.clone(),
                });
            }
        }

        for (name, value) in [
            ("sources", sources.timeout_secs),
            ("geocoding", config.geocoding.timeout_secs),
        ] {
            if value == 0 {
                return Err(ConfigError::InvalidTimeout { name, value });
            }
        }

        if parse_log_level(&config.logging.level).is_err() {
            return Err(ConfigError::InvalidLogLevel(config.logging.level.clone()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::logging::LogFormat;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.cache.ttl_secs, 3600);
        assert_eq!(config.server.port, 8080);
        assert_eq!(
            config.sources.artists_url,
            "https://groupietrackers.herokuapp.com/api/artists"
        );
        assert_eq!(
            config.sources.relations_url,
            "https://groupietrackers.herokuapp.com/api/relation"
        );
        assert!(config.geocoding.access_token.is_none());
        assert_eq!(config.logging.level, "info");
        ConfigLoader::validate(&config).expect("Default config should be valid");
    }

    #[test]
    fn test_yaml_parsing() {
        let yaml = r"
server:
  host: 0.0.0.0
  port: 9000
cache:
  ttl_secs: 60
sources:
  artists_url: http://localhost:4000/api/artists
geocoding:
  access_token: pk.abc
logging:
  level: debug
  format: pretty
";

        let config: Config = serde_yaml::from_str(yaml).expect("YAML should parse");

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.cache.ttl_secs, 60);
        assert_eq!(config.sources.artists_url, "http://localhost:4000/api/artists");
        assert_eq!(
            config.sources.dates_url,
            "https://groupietrackers.herokuapp.com/api/dates"
        );
        assert_eq!(config.geocoding.access_token.as_deref(), Some("pk.abc"));
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, LogFormat::Pretty);

        ConfigLoader::validate(&config).expect("Parsed config should be valid");
    }

    #[test]
    fn test_validate_zero_ttl() {
        let mut config = Config::default();
        config.cache.ttl_secs = 0;

        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigError::InvalidTtl(0))
        ));
    }

    #[test]
    fn test_validate_source_url_scheme() {
        let mut config = Config::default();
        config.sources.dates_url = "ftp://example.com/dates".to_string();

        match ConfigLoader::validate(&config) {
            Err(ConfigError::InvalidSourceUrl { name, url }) => {
                assert_eq!(name, "dates");
                assert_eq!(url, "ftp://example.com/dates");
            }
            other => panic!("Expected InvalidSourceUrl error, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_zero_timeout() {
        let mut config = Config::default();
        config.geocoding.timeout_secs = 0;

        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigError::InvalidTimeout { name: "geocoding", value: 0 })
        ));
    }

    #[test]
    fn test_validate_invalid_log_level() {
        let mut config = Config::default();
        config.logging.level = "invalid".to_string();

        match ConfigLoader::validate(&config) {
            Err(ConfigError::InvalidLogLevel(level)) => assert_eq!(level, "invalid"),
            other => panic!("Expected InvalidLogLevel error, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_empty_host() {
        let mut config = Config::default();
        config.server.host = String::new();

        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigError::EmptyHost)
        ));
    }

    #[test]
    fn test_hierarchical_merging() {
        let mut base_file = NamedTempFile::new().unwrap();
        writeln!(base_file, "cache:\n  ttl_secs: 120\nlogging:\n  level: info\n  format: json").unwrap();
        base_file.flush().unwrap();

        let mut override_file = NamedTempFile::new().unwrap();
        writeln!(override_file, "cache:\n  ttl_secs: 30\nlogging:\n  level: debug").unwrap();
        override_file.flush().unwrap();

        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(base_file.path()))
            .merge(Yaml::file(override_file.path()))
            .extract()
            .unwrap();

        assert_eq!(config.cache.ttl_secs, 30, "Override should win");
        assert_eq!(config.logging.level, "debug", "Override should win for nested fields");
        assert_eq!(
            config.logging.format,
            LogFormat::Json,
            "Base value should persist when not overridden"
        );
    }

    #[test]
    fn test_env_override() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "cache:\n  ttl_secs: 120\nserver:\n  port: 9000").unwrap();
        file.flush().unwrap();

        temp_env::with_vars(
            [
                ("GROUPIE_CACHE__TTL_SECS", Some("15")),
                ("GROUPIE_LOGGING__LEVEL", Some("warn")),
            ],
            || {
                let config = ConfigLoader::load_from_file(file.path()).expect("config should load");
                assert_eq!(config.cache.ttl_secs, 15, "Environment should win over file");
                assert_eq!(config.server.port, 9000, "File value should persist");
                assert_eq!(config.logging.level, "warn");
            },
        );
    }
}
