//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.lumo/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{LevelFilter, debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

use crate::api::Endpoints;
use crate::api::client::{CURRENT_WEATHER_PATH, ICE_STATUS_PATH};
use crate::core::state::Screen;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LumoConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub api: ApiConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub start_screen: Option<String>,
    pub log_level: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ApiConfig {
    pub base_url: Option<String>,
    pub current_weather_url: Option<String>,
    pub ice_status_url: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Debug;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub api_base_url: String,
    pub current_weather_url: String,
    pub ice_status_url: String,
    pub start_screen: Screen,
    pub log_level: LevelFilter,
    /// Warnings about values that were ignored, logged once the logger is up.
    pub notices: Vec<String>,
}

impl ResolvedConfig {
    pub fn endpoints(&self) -> Endpoints {
        Endpoints {
            base_url: self.api_base_url.clone(),
            current_weather_url: self.current_weather_url.clone(),
            ice_status_url: self.ice_status_url.clone(),
        }
    }
}

/// Values given on the command line. `None` = not specified.
#[derive(Debug, Default, Clone, Copy)]
pub struct CliOverrides<'a> {
    pub api_url: Option<&'a str>,
    pub screen: Option<&'a str>,
    pub log_level: Option<&'a str>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.lumo/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".lumo").join("config.toml"))
}

/// Load config from `~/.lumo/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `LumoConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<LumoConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(LumoConfig::default());
        }
    };
    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<LumoConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(LumoConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: LumoConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

const DEFAULT_CONFIG: &str = r#"# Lumo Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# start_screen = "home"              # "home", "vibe", "info" or "guest"
# log_level = "debug"                # "error", "warn", "info", "debug", "trace", "off"

# [api]
# base_url = "http://localhost:8080" # Or set LUMO_API_URL
# current_weather_url = "http://localhost:8080/api/weather/current"   # LUMO_CURRENT_WEATHER_URL
# ice_status_url = "http://localhost:8080/api/temperature/ice-status" # LUMO_ICE_STATUS_URL
"#;

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, DEFAULT_CONFIG) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &LumoConfig, cli: CliOverrides<'_>) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

/// Same as [`resolve`], reading env vars through `env`.
pub fn resolve_with_env(
    config: &LumoConfig,
    cli: CliOverrides<'_>,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Base URL: CLI → env → config → default
    let api_base_url = cli
        .api_url
        .map(|s| s.to_string())
        .or_else(|| env("LUMO_API_URL"))
        .or_else(|| config.api.base_url.clone())
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
        .trim_end_matches('/')
        .to_string();

    // Absolute endpoints: env → config → derived from base URL
    let current_weather_url = env("LUMO_CURRENT_WEATHER_URL")
        .or_else(|| config.api.current_weather_url.clone())
        .unwrap_or_else(|| format!("{api_base_url}{CURRENT_WEATHER_PATH}"));
    let ice_status_url = env("LUMO_ICE_STATUS_URL")
        .or_else(|| config.api.ice_status_url.clone())
        .unwrap_or_else(|| format!("{api_base_url}{ICE_STATUS_PATH}"));

    let mut notices = Vec::new();

    let start_screen = match cli.screen.or(config.general.start_screen.as_deref()) {
        Some(name) => Screen::from_name(name).unwrap_or_else(|| {
            notices.push(format!("Unknown start screen '{name}', using Home"));
            Screen::Home
        }),
        None => Screen::Home,
    };

    let log_level = match cli.log_level.or(config.general.log_level.as_deref()) {
        Some(level) => level.parse().unwrap_or_else(|_| {
            notices.push(format!(
                "Unknown log level '{level}', using {DEFAULT_LOG_LEVEL}"
            ));
            DEFAULT_LOG_LEVEL
        }),
        None => DEFAULT_LOG_LEVEL,
    };

    ResolvedConfig {
        api_base_url,
        current_weather_url,
        ice_status_url,
        start_screen,
        log_level,
        notices,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let resolved = resolve_with_env(&LumoConfig::default(), CliOverrides::default(), no_env);
        assert_eq!(resolved.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(
            resolved.current_weather_url,
            "http://localhost:8080/api/weather/current"
        );
        assert_eq!(
            resolved.ice_status_url,
            "http://localhost:8080/api/temperature/ice-status"
        );
        assert_eq!(resolved.start_screen, Screen::Home);
        assert_eq!(resolved.log_level, LevelFilter::Debug);
        assert!(resolved.notices.is_empty());
    }

    #[test]
    fn test_absolute_urls_follow_base_url() {
        let config = LumoConfig {
            api: ApiConfig {
                base_url: Some("https://cottage.example/".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        let resolved = resolve_with_env(&config, CliOverrides::default(), no_env);
        assert_eq!(resolved.api_base_url, "https://cottage.example");
        assert_eq!(
            resolved.endpoints(),
            Endpoints::from_base("https://cottage.example")
        );
    }

    #[test]
    fn test_absolute_urls_configurable_separately() {
        let config = LumoConfig {
            api: ApiConfig {
                base_url: Some("http://api.local".to_string()),
                current_weather_url: Some("http://weather.local/now".to_string()),
                ice_status_url: None,
            },
            ..Default::default()
        };
        let env = |key: &str| {
            (key == "LUMO_ICE_STATUS_URL").then(|| "http://ice.local/status".to_string())
        };
        let resolved = resolve_with_env(&config, CliOverrides::default(), env);
        assert_eq!(resolved.current_weather_url, "http://weather.local/now");
        assert_eq!(resolved.ice_status_url, "http://ice.local/status");
    }

    #[test]
    fn test_precedence_cli_over_env_over_file() {
        let config = LumoConfig {
            api: ApiConfig {
                base_url: Some("http://file".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        let env = |key: &str| (key == "LUMO_API_URL").then(|| "http://env".to_string());

        let resolved = resolve_with_env(&config, CliOverrides::default(), env);
        assert_eq!(resolved.api_base_url, "http://env");

        let cli = CliOverrides {
            api_url: Some("http://cli"),
            ..Default::default()
        };
        let resolved = resolve_with_env(&config, cli, env);
        assert_eq!(resolved.api_base_url, "http://cli");
    }

    #[test]
    fn test_start_screen_and_log_level() {
        let config = LumoConfig {
            general: GeneralConfig {
                start_screen: Some("info".to_string()),
                log_level: Some("warn".to_string()),
            },
            ..Default::default()
        };
        let resolved = resolve_with_env(&config, CliOverrides::default(), no_env);
        assert_eq!(resolved.start_screen, Screen::Info);
        assert_eq!(resolved.log_level, LevelFilter::Warn);

        let cli = CliOverrides {
            screen: Some("Guest"),
            log_level: Some("trace"),
            ..Default::default()
        };
        let resolved = resolve_with_env(&config, cli, no_env);
        assert_eq!(resolved.start_screen, Screen::Guest);
        assert_eq!(resolved.log_level, LevelFilter::Trace);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let cli = CliOverrides {
            screen: Some("spa"),
            log_level: Some("loud"),
            ..Default::default()
        };
        let resolved = resolve_with_env(&LumoConfig::default(), cli, no_env);
        assert_eq!(resolved.start_screen, Screen::Home);
        assert_eq!(resolved.log_level, DEFAULT_LOG_LEVEL);
        assert_eq!(
            resolved.notices,
            vec![
                "Unknown start screen 'spa', using Home".to_string(),
                "Unknown log level 'loud', using DEBUG".to_string(),
            ]
        );
    }

    #[test]
    fn test_sparse_toml_parses() {
        let toml_str = r#"
[api]
base_url = "http://192.168.1.50:8080"
"#;
        let config: LumoConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.api.base_url.as_deref(),
            Some("http://192.168.1.50:8080")
        );
        assert!(config.api.current_weather_url.is_none());
        assert!(config.general.start_screen.is_none());
    }

    #[test]
    fn test_generated_default_parses_to_empty_config() {
        let config: LumoConfig = toml::from_str(DEFAULT_CONFIG).unwrap();
        assert!(config.api.base_url.is_none());
        assert!(config.general.log_level.is_none());
    }

    #[test]
    fn test_missing_file_generates_default() {
        let dir = std::env::temp_dir().join(format!("lumo-config-{}", std::process::id()));
        let path = dir.join("config.toml");
        let _ = fs::remove_dir_all(&dir);

        let config = load_config_from(&path).unwrap();
        assert!(config.api.base_url.is_none());
        let written = fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("# Lumo Configuration"));

        fs::write(&path, "[general\nbroken").unwrap();
        assert!(matches!(load_config_from(&path), Err(ConfigError::Parse(_))));
        let _ = fs::remove_dir_all(&dir);
    }
}
