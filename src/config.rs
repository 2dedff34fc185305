//! Configuration System
//!
//! Resolves the backend endpoints from the execution environment and loads
//! the optional TOML configuration file used by the terminal client.
//! Environment variables override file settings.

use serde::Deserialize;
use std::fmt;
#[cfg(feature = "native")]
use std::path::{Path, PathBuf};

use crate::records::ResourceKind;

/// Host suffix used by hosted development containers
pub const DEV_HOST_SUFFIX: &str = "app.github.dev";

/// Port the backend listens on, locally and inside a codespace
pub const BACKEND_PORT: u16 = 8000;

/// Base URL used whenever no hosted environment is detected
pub const LOCAL_API_BASE: &str = "http://localhost:8000/api";

/// How the client was started
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionMode {
    Development,
    Production,
}

impl ExecutionMode {
    /// Parse a mode name as found in `OCTOFIT_ENV`
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Some(Self::Development),
            "production" | "prod" => Some(Self::Production),
            _ => None,
        }
    }

    /// Mode implied by the build profile
    pub fn from_build() -> Self {
        if cfg!(debug_assertions) {
            Self::Development
        } else {
            Self::Production
        }
    }
}

impl fmt::Display for ExecutionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
        }
    }
}

/// Inputs the endpoint resolver looks at
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Environment {
    /// Name of the hosted development container, if any
    pub codespace_name: Option<String>,
    /// Execution mode
    pub mode: ExecutionMode,
}

impl Environment {
    pub fn new(codespace_name: Option<String>, mode: ExecutionMode) -> Self {
        // An empty name counts as absent
        let codespace_name = codespace_name
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty());
        Self {
            codespace_name,
            mode,
        }
    }

    /// Read `CODESPACE_NAME` / `OCTOFIT_CODESPACE_NAME` and `OCTOFIT_ENV`
    pub fn from_env() -> Self {
        let codespace_name = std::env::var("OCTOFIT_CODESPACE_NAME")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .or_else(|| std::env::var("CODESPACE_NAME").ok());
        let mode = std::env::var("OCTOFIT_ENV")
            .ok()
            .and_then(|v| ExecutionMode::parse(&v))
            .unwrap_or_else(ExecutionMode::from_build);
        Self::new(codespace_name, mode)
    }

    /// Derive the backend base URL
    pub fn base_url(&self) -> String {
        if let Some(name) = &self.codespace_name {
            return format!("https://{}-{}.{}/api", name, BACKEND_PORT, DEV_HOST_SUFFIX);
        }

        match self.mode {
            ExecutionMode::Development => LOCAL_API_BASE.to_string(),
            ExecutionMode::Production => LOCAL_API_BASE.to_string(),
        }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new(None, ExecutionMode::from_build())
    }
}

/// Resolved resource endpoints, constructed once and handed to every view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub base_url: String,
    pub users: String,
    pub teams: String,
    pub workouts: String,
    pub activities: String,
    pub leaderboard: String,
}

impl Endpoints {
    /// Build endpoints under an explicit base URL
    pub fn from_base(base_url: &str) -> Self {
        let base_url = base_url.trim_end_matches('/').to_string();
        let join = |kind: ResourceKind| format!("{}/{}", base_url, kind.segment());

        Self {
            users: join(ResourceKind::Users),
            teams: join(ResourceKind::Teams),
            workouts: join(ResourceKind::Workouts),
            activities: join(ResourceKind::Activities),
            leaderboard: join(ResourceKind::Leaderboard),
            base_url,
        }
    }

    /// Resolve endpoints from the execution environment
    pub fn resolve(env: &Environment) -> Self {
        let endpoints = Self::from_base(&env.base_url());
        tracing::info!(
            base_url = %endpoints.base_url,
            mode = %env.mode,
            codespace = env.codespace_name.as_deref().unwrap_or("-"),
            "Resolved API endpoints"
        );
        endpoints
    }

    /// Collection URL for a resource
    pub fn url(&self, kind: ResourceKind) -> &str {
        match kind {
            ResourceKind::Users => &self.users,
            ResourceKind::Teams => &self.teams,
            ResourceKind::Workouts => &self.workouts,
            ResourceKind::Activities => &self.activities,
            ResourceKind::Leaderboard => &self.leaderboard,
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Backend connection settings
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiConfig {
    /// Explicit base URL; skips environment detection when set
    #[serde(default)]
    pub base_url: Option<String>,

    #[serde(default)]
    pub codespace_name: Option<String>,

    #[serde(default)]
    pub mode: Option<ExecutionMode>,
}

impl ApiConfig {
    /// Environment as seen through this config
    pub fn environment(&self) -> Environment {
        Environment::new(
            self.codespace_name.clone(),
            self.mode.unwrap_or_else(ExecutionMode::from_build),
        )
    }

    /// Endpoints for this config
    pub fn endpoints(&self) -> Endpoints {
        match self.base_url.as_deref().filter(|url| !url.trim().is_empty()) {
            Some(url) => {
                tracing::info!(base_url = %url, "Using configured API base URL");
                Endpoints::from_base(url)
            }
            None => Endpoints::resolve(&self.environment()),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var("OCTOFIT_API_URL") {
            self.api.base_url = Some(url);
        }

        let env = Environment::from_env();
        if env.codespace_name.is_some() {
            self.api.codespace_name = env.codespace_name;
        }
        if let Some(mode) = std::env::var("OCTOFIT_ENV")
            .ok()
            .and_then(|v| ExecutionMode::parse(&v))
        {
            self.api.mode = Some(mode);
        }

        if let Ok(level) = std::env::var("OCTOFIT_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("OCTOFIT_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

#[cfg(feature = "native")]
impl Config {
    /// Parse configuration text
    pub fn parse(content: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content, path)
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("octofit").join("config.toml")),
            Some(PathBuf::from("./octofit.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::debug!("Using default config with environment overrides");
        Self::from_env()
    }
}

/// Configuration errors
#[cfg(feature = "native")]
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# OctoFit Tracker client configuration
#
# Environment variables override these settings:
# - OCTOFIT_API_URL
# - CODESPACE_NAME / OCTOFIT_CODESPACE_NAME
# - OCTOFIT_ENV (development | production)
# - OCTOFIT_LOG_LEVEL
# - OCTOFIT_LOG_FORMAT

[api]
# Explicit backend base URL. Leave unset to derive it from the environment:
#   codespace set -> https://<codespace>-8000.app.github.dev/api
#   otherwise     -> http://localhost:8000/api
# base_url = "http://localhost:8000/api"

# Hosted development container name
# codespace_name = ""

# Execution mode: development or production
mode = "development"

[logging]
# Log level: trace, debug, info, warn, error
level = "warn"

# Log format: pretty or json
format = "pretty"
"#
    .to_string()
}
