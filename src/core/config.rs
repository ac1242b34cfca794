//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.pearls/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.
//!
//! The log file is itself configurable, so loading and resolution run before
//! any logger exists. Their records are collected in a [`StartupLog`] and in
//! [`ResolvedConfig::warnings`], and `main` replays them once the logger is up.

use log::{Level, LevelFilter};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::scheduler::{DEFAULT_SETTLE_MS, DEFAULT_TRANSITION_MS, Timing};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct PearlsConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub animation: AnimationConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub log_file: Option<String>,
    pub log_level: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct AnimationConfig {
    pub transition_ms: Option<u64>,
    pub settle_ms: Option<u64>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LOG_FILE: &str = "pearls.log";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Debug;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub timing: Timing,
    pub log_file: PathBuf,
    pub log_level: LevelFilter,
    /// Values that were ignored during resolution, to be logged at startup
    pub warnings: Vec<String>,
}

/// Values given on the command line. `None` = flag not passed.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub transition_ms: Option<u64>,
    pub settle_ms: Option<u64>,
    pub log_file: Option<String>,
}

// ============================================================================
// Startup Log
// ============================================================================

/// Log records produced before the logger is installed.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct StartupLog {
    records: Vec<(Level, String)>,
}

impl StartupLog {
    pub fn push(&mut self, level: Level, message: impl Into<String>) {
        self.records.push((level, message.into()));
    }

    pub fn records(&self) -> &[(Level, String)] {
        &self.records
    }

    /// Sends every record to the installed logger, in order.
    pub fn replay(self) {
        for (level, message) in self.records {
            log::log!(level, "{message}");
        }
    }
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

/// Returns the path to `~/.pearls/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".pearls").join("config.toml"))
}

/// Load config from `~/.pearls/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `PearlsConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config(log: &mut StartupLog) -> Result<PearlsConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            log.push(
                Level::Warn,
                "Could not determine home directory, using default config",
            );
            return Ok(PearlsConfig::default());
        }
    };
    load_config_from(&path, log)
}

/// Same as [`load_config`], for an explicit path.
pub fn load_config_from(path: &Path, log: &mut StartupLog) -> Result<PearlsConfig, ConfigError> {
    if !path.exists() {
        log.push(
            Level::Info,
            format!("No config file found, generating default at {}", path.display()),
        );
        if let Err(e) = generate_default_config(path) {
            log.push(Level::Warn, format!("Failed to write default config: {e}"));
        }
        return Ok(PearlsConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: PearlsConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    log.push(Level::Info, format!("Loaded config from {}", path.display()));
    log.push(Level::Debug, format!("Config: {config:?}"));
    Ok(config)
}

const DEFAULT_CONFIG_CONTENT: &str = r#"# Pearls Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# log_file = "pearls.log"            # Or set PEARLS_LOG_FILE
# log_level = "debug"                # "off", "error", "warn", "info", "debug", "trace"

# [animation]
# transition_ms = 150                # Fade-out before the next card shows
# settle_ms = 50                     # Pause before navigation unlocks again
"#;

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, DEFAULT_CONFIG_CONTENT)
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &PearlsConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

/// Resolution with an injectable environment lookup.
pub fn resolve_with_env(
    config: &PearlsConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    let mut warnings = Vec::new();
    let mut env_ms = |key: &str| {
        env(key).and_then(|v| match v.trim().parse::<u64>() {
            Ok(ms) => Some(ms),
            Err(e) => {
                warnings.push(format!("Ignoring {key}={v:?}: {e}"));
                None
            }
        })
    };

    // Transition delay: CLI → env → config → default
    let transition_ms = cli
        .transition_ms
        .or_else(|| env_ms("PEARLS_TRANSITION_MS"))
        .or(config.animation.transition_ms)
        .unwrap_or(DEFAULT_TRANSITION_MS);

    // Settle delay: CLI → env → config → default
    let settle_ms = cli
        .settle_ms
        .or_else(|| env_ms("PEARLS_SETTLE_MS"))
        .or(config.animation.settle_ms)
        .unwrap_or(DEFAULT_SETTLE_MS);

    // Log file: CLI → env → config → default
    let log_file = cli
        .log_file
        .clone()
        .or_else(|| env("PEARLS_LOG_FILE"))
        .or_else(|| config.general.log_file.clone())
        .unwrap_or_else(|| DEFAULT_LOG_FILE.to_string());

    // Log level: env → config → default
    let log_level = env("PEARLS_LOG_LEVEL")
        .or_else(|| config.general.log_level.clone())
        .map(|level| {
            parse_level(&level).unwrap_or_else(|| {
                warnings.push(format!(
                    "Unknown log level {level:?}, using {DEFAULT_LOG_LEVEL}"
                ));
                DEFAULT_LOG_LEVEL
            })
        })
        .unwrap_or(DEFAULT_LOG_LEVEL);

    ResolvedConfig {
        timing: Timing {
            transition: Duration::from_millis(transition_ms),
            settle: Duration::from_millis(settle_ms),
        },
        log_file: PathBuf::from(log_file),
        log_level,
        warnings,
    }
}

fn parse_level(level: &str) -> Option<LevelFilter> {
    level.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_default_config_parses() {
        let config = PearlsConfig::default();
        assert!(config.general.log_file.is_none());
        assert!(config.animation.transition_ms.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let resolved = resolve_with_env(&PearlsConfig::default(), &CliOverrides::default(), no_env);
        assert_eq!(resolved.timing, Timing::default());
        assert_eq!(resolved.log_file, PathBuf::from(DEFAULT_LOG_FILE));
        assert_eq!(resolved.log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = PearlsConfig {
            general: GeneralConfig {
                log_file: Some("/tmp/p.log".to_string()),
                log_level: Some("warn".to_string()),
            },
            animation: AnimationConfig {
                transition_ms: Some(300),
                settle_ms: Some(0),
            },
        };
        let resolved = resolve_with_env(&config, &CliOverrides::default(), no_env);
        assert_eq!(resolved.timing.transition, Duration::from_millis(300));
        assert_eq!(resolved.timing.settle, Duration::ZERO);
        assert_eq!(resolved.log_file, PathBuf::from("/tmp/p.log"));
        assert_eq!(resolved.log_level, LevelFilter::Warn);
    }

    #[test]
    fn test_env_beats_config_and_cli_beats_env() {
        let config = PearlsConfig {
            animation: AnimationConfig {
                transition_ms: Some(300),
                settle_ms: Some(80),
            },
            ..Default::default()
        };
        let env: HashMap<&str, &str> = HashMap::from([
            ("PEARLS_TRANSITION_MS", "200"),
            ("PEARLS_SETTLE_MS", "20"),
        ]);
        let cli = CliOverrides {
            transition_ms: Some(10),
            ..Default::default()
        };
        let resolved = resolve_with_env(&config, &cli, |k| env.get(k).map(|v| v.to_string()));
        assert_eq!(resolved.timing.transition, Duration::from_millis(10));
        assert_eq!(resolved.timing.settle, Duration::from_millis(20));
    }

    #[test]
    fn test_bad_env_value_falls_through() {
        let config = PearlsConfig {
            animation: AnimationConfig {
                transition_ms: Some(250),
                settle_ms: None,
            },
            ..Default::default()
        };
        let resolved = resolve_with_env(&config, &CliOverrides::default(), |k| {
            (k == "PEARLS_TRANSITION_MS").then(|| "soon".to_string())
        });
        assert_eq!(resolved.timing.transition, Duration::from_millis(250));
        assert_eq!(resolved.warnings.len(), 1);
        assert!(resolved.warnings[0].contains("PEARLS_TRANSITION_MS=\"soon\""));
    }

    #[test]
    fn test_unknown_log_level_uses_default() {
        let resolved = resolve_with_env(&PearlsConfig::default(), &CliOverrides::default(), |k| {
            (k == "PEARLS_LOG_LEVEL").then(|| "loud".to_string())
        });
        assert_eq!(resolved.log_level, DEFAULT_LOG_LEVEL);
        assert_eq!(resolved.warnings.len(), 1);
        assert!(resolved.warnings[0].contains("\"loud\""));
    }

    #[test]
    fn test_clean_resolution_has_no_warnings() {
        let env: HashMap<&str, &str> =
            HashMap::from([("PEARLS_SETTLE_MS", " 30 "), ("PEARLS_LOG_LEVEL", "info")]);
        let resolved = resolve_with_env(&PearlsConfig::default(), &CliOverrides::default(), |k| {
            env.get(k).map(|v| v.to_string())
        });
        assert_eq!(resolved.timing.settle, Duration::from_millis(30));
        assert_eq!(resolved.log_level, LevelFilter::Info);
        assert!(resolved.warnings.is_empty());
    }

    #[test]
    fn test_missing_config_is_generated_and_recorded() {
        let dir = std::env::temp_dir().join(format!("pearls-gen-{}", std::process::id()));
        let path = dir.join("config.toml");
        let mut log = StartupLog::default();
        let config = load_config_from(&path, &mut log).unwrap();
        let generated = fs::read_to_string(&path);
        let _ = fs::remove_dir_all(&dir);

        assert!(config.animation.transition_ms.is_none());
        assert_eq!(generated.unwrap(), DEFAULT_CONFIG_CONTENT);
        assert_eq!(log.records().len(), 1);
        assert_eq!(log.records()[0].0, Level::Info);
        assert!(log.records()[0].1.contains("generating default"));
    }

    #[test]
    fn test_loaded_config_is_recorded() {
        let path = std::env::temp_dir().join(format!("pearls-ok-{}.toml", std::process::id()));
        fs::write(&path, "[animation]\nsettle_ms = 10\n").unwrap();
        let mut log = StartupLog::default();
        let config = load_config_from(&path, &mut log).unwrap();
        let _ = fs::remove_file(&path);

        assert_eq!(config.animation.settle_ms, Some(10));
        let levels: Vec<Level> = log.records().iter().map(|(level, _)| *level).collect();
        assert_eq!(levels, vec![Level::Info, Level::Debug]);
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_str = r#"
[general]
log_file = "viewer.log"
log_level = "info"

[animation]
transition_ms = 120
settle_ms = 40
"#;
        let config: PearlsConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.log_file.as_deref(), Some("viewer.log"));
        assert_eq!(config.general.log_level.as_deref(), Some("info"));
        assert_eq!(config.animation.transition_ms, Some(120));
        assert_eq!(config.animation.settle_ms, Some(40));
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing, everything else stays default
        let toml_str = r#"
[animation]
settle_ms = 0
"#;
        let config: PearlsConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.animation.settle_ms, Some(0));
        assert!(config.animation.transition_ms.is_none());
        assert!(config.general.log_level.is_none());
    }

    #[test]
    fn test_generated_default_is_valid_toml() {
        let config: PearlsConfig = toml::from_str(DEFAULT_CONFIG_CONTENT).unwrap();
        assert!(config.animation.transition_ms.is_none());
    }

    #[test]
    fn test_load_config_from_reports_parse_error() {
        let path = std::env::temp_dir().join(format!("pearls-bad-{}.toml", std::process::id()));
        fs::write(&path, "[animation]\ntransition_ms = \"fast\"\n").unwrap();
        let result = load_config_from(&path, &mut StartupLog::default());
        let _ = fs::remove_file(&path);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}
