//! memsim.toml configuration parser.
//!
//! Every section is optional; a missing file yields the defaults that
//! match the original allocation server (bind `0.0.0.0:5000`, any CORS
//! origin, First-Fit).

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::types::Algorithm;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_LOG_FILTER: &str = "info,memsim=debug";

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MemsimConfig {
    pub server: ServerConfig,
    pub log: LogConfig,
    pub defaults: DefaultsConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Allowed CORS origins. `"*"` admits any origin.
    pub cors_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            cors_origins: vec!["*".to_string()],
        }
    }
}

impl ServerConfig {
    pub fn allows_any_origin(&self) -> bool {
        self.cors_origins.iter().any(|o| o == "*")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub filter: String,
    /// Emit structured JSON lines instead of the human format.
    pub json: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_LOG_FILTER.to_string(),
            json: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    pub algorithm: Algorithm,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::FirstFit,
        }
    }
}

impl MemsimConfig {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    /// Load from `path` when given, otherwise fall back to defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => Self::from_file(p),
            None => Ok(Self::default()),
        }
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = MemsimConfig::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 5000);
        assert!(config.server.allows_any_origin());
        assert_eq!(config.defaults.algorithm, Algorithm::FirstFit);
    }

    #[test]
    fn test_parse_empty() {
        let config: MemsimConfig = toml::from_str("").unwrap();
        assert_eq!(config, MemsimConfig::default());
    }

    #[test]
    fn test_parse_partial() {
        let toml_str = r#"
[server]
port = 8080
cors_origins = ["http://localhost:5173"]

[log]
json = true

[defaults]
algorithm = "Worst-Fit"
"#;
        let config: MemsimConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "0.0.0.0");
        assert!(!config.server.allows_any_origin());
        assert_eq!(config.defaults.algorithm, Algorithm::WorstFit);
        assert_eq!(config.log.filter, DEFAULT_LOG_FILTER);
        assert!(config.log.json);
    }

    #[test]
    fn test_unknown_algorithm_rejected() {
        let toml_str = r#"
[defaults]
algorithm = "Next-Fit"
"#;
        assert!(toml::from_str::<MemsimConfig>(toml_str).is_err());
    }

    #[test]
    fn test_roundtrip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("memsim.toml");

        let mut config = MemsimConfig::default();
        config.server.port = 9000;
        config.defaults.algorithm = Algorithm::BestFit;
        std::fs::write(&path, config.to_toml_string().unwrap()).unwrap();

        let loaded = MemsimConfig::load(Some(&path)).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = MemsimConfig::from_file(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
