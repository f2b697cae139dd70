//! Solver client configuration.
//!
//! Sources, lowest to highest priority:
//!
//! 1. built-in defaults
//! 2. `<config_dir>/cube-solver/config.toml`
//! 3. environment variables
//!
//! | Variable | Field | Default |
//! |----------|-------|---------|
//! | `CUBE_SOLVER_URL` | `endpoint` | `http://localhost:5000/solve` |
//! | `CUBE_SOLVER_TIMEOUT_MS` | `request_timeout_ms` | unset (no timeout; `0` also means unset) |
//! | `CUBE_SOLVER_LOG_PATH` | `log_path` | unset (logging disabled) |
//! | `CUBE_SOLVER_SEED` | `seed` | unset (seeded from the clock) |

use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

pub const DEFAULT_ENDPOINT: &str = "http://localhost:5000/solve";

pub const ENV_URL: &str = "CUBE_SOLVER_URL";
pub const ENV_TIMEOUT_MS: &str = "CUBE_SOLVER_TIMEOUT_MS";
pub const ENV_LOG_PATH: &str = "CUBE_SOLVER_LOG_PATH";
pub const ENV_SEED: &str = "CUBE_SOLVER_SEED";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Client configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverConfig {
    /// Full URL of the solve endpoint.
    pub endpoint: String,
    /// Per-request timeout. `None` leaves the transport default in place.
    pub request_timeout_ms: Option<u64>,
    pub log_path: Option<PathBuf>,
    /// Scramble RNG seed.
    pub seed: Option<u32>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            request_timeout_ms: None,
            log_path: None,
            seed: None,
        }
    }
}

/// On-disk shape; every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    endpoint: Option<String>,
    request_timeout_ms: Option<u64>,
    log_path: Option<PathBuf>,
    seed: Option<u32>,
}

impl SolverConfig {
    /// Defaults, then the config file (if any), then the environment.
    ///
    /// A broken config file falls back to defaults; the error is handed back
    /// so the caller can log it once the subscriber exists.
    pub fn try_load() -> (Self, Option<ConfigError>) {
        let (mut config, err) = match Self::path() {
            Some(path) if path.exists() => match Self::from_file(&path) {
                Ok(config) => (config, None),
                Err(err) => (Self::default(), Some(err)),
            },
            _ => (Self::default(), None),
        };
        config.apply_env();
        (config, err)
    }

    pub fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("cube-solver").join("config.toml"))
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        let file: FileConfig = toml::from_str(content)?;
        let mut config = Self::default();
        if let Some(endpoint) = non_empty(file.endpoint) {
            config.endpoint = endpoint;
        }
        config.request_timeout_ms = file.request_timeout_ms.filter(|ms| *ms > 0);
        config.log_path = file.log_path.filter(|p| !p.as_os_str().is_empty());
        config.seed = file.seed;
        Ok(config)
    }

    pub fn apply_env(&mut self) {
        self.apply_vars(|key| env::var(key).ok());
    }

    /// Apply overrides from an arbitrary variable lookup. Unparseable values
    /// are ignored.
    pub fn apply_vars(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(endpoint) = non_empty(lookup(ENV_URL)) {
            self.endpoint = endpoint;
        }
        if let Some(ms) = lookup(ENV_TIMEOUT_MS).and_then(|s| s.trim().parse::<u64>().ok()) {
            self.request_timeout_ms = (ms > 0).then_some(ms);
        }
        if let Some(path) = non_empty(lookup(ENV_LOG_PATH)) {
            self.log_path = Some(PathBuf::from(path));
        }
        if let Some(seed) = lookup(ENV_SEED).and_then(|s| s.trim().parse::<u32>().ok()) {
            self.seed = Some(seed);
        }
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_ms.map(Duration::from_millis)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
