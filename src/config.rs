use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

// =============================================================================
// Registry constants
// =============================================================================

/// Default npm registry
pub const DEFAULT_REGISTRY_URL: &str = "https://registry.npmjs.org";

/// Dist-tag queried by the single-recommendation check
pub const DEFAULT_DIST_TAG: &str = "latest";

/// Timeout for registry requests in milliseconds (30 seconds)
pub const FETCH_TIMEOUT_MS: u64 = 30_000;

// =============================================================================
// Module discovery constants
// =============================================================================

/// Directory holding installed packages under an application or config root
pub const MODULES_DIR_NAME: &str = "node_modules";

/// Manifest file read from each package directory
pub const MANIFEST_FILE_NAME: &str = "package.json";

/// Prefix of scoped namespace directories (`@scope/name`)
pub const SCOPE_MARKER: char = '@';

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Advisor configuration structure
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct AdvisorConfig {
    pub registry: RegistryConfig,
    pub modules: ModulesConfig,
    pub logging: LoggingConfig,
}

/// Registry-related configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct RegistryConfig {
    /// Registry base URL
    pub url: String,
    /// Package whose updates are checked
    pub package: Option<String>,
    /// Dist-tag for the single-recommendation check
    pub tag: String,
    /// Request timeout in milliseconds
    pub timeout_ms: u64,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_REGISTRY_URL.to_string(),
            package: None,
            tag: DEFAULT_DIST_TAG.to_string(),
            timeout_ms: FETCH_TIMEOUT_MS,
        }
    }
}

/// Module discovery configuration
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ModulesConfig {
    /// Application install directory (bundled modules)
    pub app_path: Option<PathBuf>,
    /// User configuration directory (user-installed modules)
    pub config_path: Option<PathBuf>,
}

impl ModulesConfig {
    /// Search roots in precedence order: bundled first, user-installed last.
    pub fn search_roots(&self) -> Vec<PathBuf> {
        [&self.app_path, &self.config_path]
            .into_iter()
            .flatten()
            .map(|path| path.join(MODULES_DIR_NAME))
            .collect()
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct LoggingConfig {
    /// Filter directive used when RUST_LOG is not set
    pub filter: String,
    /// Emit JSON lines instead of plain text
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_LOG_FILTER.to_string(),
            json: false,
        }
    }
}

impl AdvisorConfig {
    /// Load configuration from a JSON file.
    ///
    /// A missing file yields the defaults; an unreadable or invalid file is an error.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Returns the path to the data directory for version-advisor.
/// Uses $XDG_DATA_HOME/version-advisor if XDG_DATA_HOME is set,
/// otherwise falls back to ~/.local/share/version-advisor,
/// or ./version-advisor if neither is available.
pub fn data_dir() -> PathBuf {
    data_dir_with_env(std::env::var("XDG_DATA_HOME").ok(), dirs::home_dir())
}

/// Returns the path to the default config file.
pub fn config_path() -> PathBuf {
    data_dir().join("config.json")
}

/// Returns the path to the log file.
pub fn log_path() -> PathBuf {
    data_dir().join("version-advisor.log")
}

fn data_dir_with_env(xdg_data_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    let data_dir = xdg_data_home
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".local/share")))
        .unwrap_or_else(|| PathBuf::from("."));

    data_dir.join("version-advisor")
}
