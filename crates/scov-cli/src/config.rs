//! CLI configuration
//!
//! Resolution order, lowest to highest precedence:
//! built-in defaults, TOML file, `SCOV_*` environment, command line flags.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

/// Config file looked up in the working directory when `--config` is absent
pub const DEFAULT_CONFIG_FILE: &str = "scov.toml";

/// Report output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(ConfigError::invalid("output", other)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => f.write_str("text"),
            Self::Json => f.write_str("json"),
        }
    }
}

/// Which analyzer turns artifacts into scenarios
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalyzerKind {
    /// Parse artifact text by file extension
    #[default]
    Parsing,
    /// Fixed sample scenarios after a delay
    Simulated,
}

/// Scenario cache settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Maximum cached scenario lists
    pub max_capacity: u64,
    /// Entry lifetime in seconds (no expiry when absent)
    pub ttl_secs: Option<u64>,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_capacity: 1024,
            ttl_secs: None,
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// `EnvFilter` directive used when no env filter is set
    pub filter: String,
    /// Emit JSON log lines
    pub json: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            json: false,
        }
    }
}

/// Complete CLI configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScovConfig {
    /// Report format
    pub output: OutputFormat,
    /// Exit non-zero when coverage falls below this percentage
    pub fail_under: Option<u64>,
    /// Reject duplicate titles within a list
    pub strict: bool,
    /// Extension assumed for files with an unknown extension
    pub default_format: String,
    /// Analyzer used for both artifacts
    pub analyzer: AnalyzerKind,
    /// Delay for the simulated analyzer, in milliseconds
    pub simulate_delay_ms: u64,
    /// Cache settings
    pub cache: CacheConfig,
    /// Logging settings
    pub log: LogConfig,
}

impl Default for ScovConfig {
    fn default() -> Self {
        Self {
            output: OutputFormat::Text,
            fail_under: None,
            strict: false,
            default_format: "txt".to_string(),
            analyzer: AnalyzerKind::Parsing,
            simulate_delay_ms: 1500,
            cache: CacheConfig::default(),
            log: LogConfig::default(),
        }
    }
}

impl ScovConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With output format
    #[inline]
    #[must_use]
    pub fn with_output(mut self, output: OutputFormat) -> Self {
        self.output = output;
        self
    }

    /// With coverage threshold
    #[inline]
    #[must_use]
    pub fn with_fail_under(mut self, min: u64) -> Self {
        self.fail_under = Some(min);
        self
    }

    /// With strict duplicate checking
    #[inline]
    #[must_use]
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// With analyzer kind
    #[inline]
    #[must_use]
    pub fn with_analyzer(mut self, analyzer: AnalyzerKind) -> Self {
        self.analyzer = analyzer;
        self
    }

    /// Simulated analyzer delay
    #[inline]
    #[must_use]
    pub fn simulate_delay(&self) -> Duration {
        Duration::from_millis(self.simulate_delay_ms)
    }

    /// Parse configuration from TOML text
    ///
    /// # Errors
    /// Returns error on malformed TOML or unknown enum values
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Load configuration from an explicit path, or `scov.toml` if present
    ///
    /// An explicit path must exist; the implicit file is optional.
    ///
    /// # Errors
    /// Returns error if the file cannot be read or parsed
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let (path, required) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
        };

        match std::fs::read_to_string(&path) {
            Ok(text) => {
                tracing::debug!(path = %path.display(), "loaded config file");
                Self::from_toml(&text)
            }
            Err(e) if !required && e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(ConfigError::Io { path, source }),
        }
    }

    /// Apply `SCOV_*` overrides from the process environment
    ///
    /// # Errors
    /// Returns error when a variable holds an unparsable value
    pub fn apply_env(self) -> Result<Self, ConfigError> {
        self.apply_env_from(|key| std::env::var(key).ok())
    }

    /// Apply `SCOV_*` overrides from an arbitrary lookup
    ///
    /// Recognised: `SCOV_OUTPUT`, `SCOV_FAIL_UNDER`, `SCOV_STRICT`, `SCOV_LOG_JSON`.
    /// `SCOV_LOG` is read directly by the log filter.
    ///
    /// # Errors
    /// Returns error when a variable holds an unparsable value
    pub fn apply_env_from<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("SCOV_OUTPUT") {
            self.output = v.parse()?;
        }
        if let Some(v) = lookup("SCOV_FAIL_UNDER") {
            let min = v
                .trim()
                .parse()
                .map_err(|_| ConfigError::invalid("SCOV_FAIL_UNDER", &v))?;
            self.fail_under = Some(min);
        }
        if let Some(v) = lookup("SCOV_STRICT") {
            self.strict = parse_bool("SCOV_STRICT", &v)?;
        }
        if let Some(v) = lookup("SCOV_LOG_JSON") {
            self.log.json = parse_bool("SCOV_LOG_JSON", &v)?;
        }
        Ok(self)
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::invalid(key, value)),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("io error reading {path}: {source}")]
    Io {
        /// Config file path
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for this schema
    #[error("invalid config file: {0}")]
    Toml(#[from] toml::de::Error),

    /// A setting holds an unusable value
    #[error("invalid value for {key}: '{value}'")]
    InvalidValue {
        /// Setting name
        key: String,
        /// Rejected value
        value: String,
    },
}

impl ConfigError {
    fn invalid(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidValue {
            key: key.into(),
            value: value.into(),
        }
    }
}
