use std::path::PathBuf;

use mockapi_core::tracing::LogFormat;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_FIXTURES_DIR: &str = "fixtures";

/// Mock API configuration loaded from environment variables.
///
/// CLI flags are applied on top in `main`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockApiConfig {
    /// TCP port to listen on (default 3000, `0` picks a free port). Env var: `MOCKAPI_PORT`.
    pub port: u16,
    /// Interface to bind (default "0.0.0.0"). Env var: `MOCKAPI_HOST`.
    pub host: String,
    /// Root directory holding one subdirectory per fixture. Env var: `MOCKAPI_FIXTURES_DIR`.
    pub fixtures_dir: PathBuf,
    /// Fixture to activate right after startup. Env var: `MOCKAPI_FIXTURE`.
    pub fixture: Option<String>,
    /// Env var: `MOCKAPI_LOG_FORMAT` (`pretty` or `json`).
    pub log_format: LogFormat,
}

impl Default for MockApiConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            host: DEFAULT_HOST.to_owned(),
            fixtures_dir: PathBuf::from(DEFAULT_FIXTURES_DIR),
            fixture: None,
            log_format: LogFormat::default(),
        }
    }
}

impl MockApiConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source. Unparseable values fall back
    /// to their defaults; empty strings count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();
        Self {
            port: var("MOCKAPI_PORT")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.port),
            host: var("MOCKAPI_HOST").unwrap_or(defaults.host),
            fixtures_dir: var("MOCKAPI_FIXTURES_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.fixtures_dir),
            fixture: var("MOCKAPI_FIXTURE"),
            log_format: var("MOCKAPI_LOG_FORMAT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.log_format),
        }
    }

    /// `host:port` to bind.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
