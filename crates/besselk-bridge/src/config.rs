//! Runtime configuration for the bridge.
//!
//! Loaded once when the library is loaded. Values come from an optional TOML
//! file named by `BESSELK_CONFIG`, then from environment overrides:
//!
//! | Variable | Field |
//! |---|---|
//! | `BESSELK_BACKEND` | `backend` (`wrapper` or `zbesk`) |
//! | `BESSELK_SCALING` | `scaling` (`unscaled` or `exponential`) |
//! | `BESSELK_SERIALIZE` | `serialize_calls` |
//! | `BESSELK_LOG` | `log_filter` |
//!
//! Symbol decoration is not configurable here; it is fixed when
//! `besselk-sys` is built.

use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::error::{BridgeError, BridgeResult};
use crate::fortran_bridge::Scaling;

/// Environment variable naming the configuration file.
pub const CONFIG_PATH_ENV: &str = "BESSELK_CONFIG";

/// Which external routine evaluates K_0 and K_1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// The `besselk` Fortran wrapper.
    #[default]
    Wrapper,
    /// AMOS `zbesk` called directly.
    Zbesk,
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Backend::Wrapper => write!(f, "wrapper"),
            Backend::Zbesk => write!(f, "zbesk"),
        }
    }
}

impl FromStr for Backend {
    type Err = BridgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "wrapper" | "besselk" => Ok(Backend::Wrapper),
            "zbesk" | "amos" => Ok(Backend::Zbesk),
            other => Err(BridgeError::invalid_config(
                "backend",
                format!("unknown backend '{}' (expected wrapper or zbesk)", other),
            )),
        }
    }
}

/// Bridge configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BridgeConfig {
    /// Routine used by the JNI entry point
    #[serde(default)]
    pub backend: Backend,

    /// Scaling passed to `zbesk`; the wrapper is always unscaled
    #[serde(default)]
    pub scaling: Scaling,

    /// Hold a process-wide lock around each external call
    #[serde(default = "default_serialize_calls")]
    pub serialize_calls: bool,

    /// env_logger filter used when `RUST_LOG` is not set
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_serialize_calls() -> bool {
    true
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            backend: Backend::default(),
            scaling: Scaling::default(),
            serialize_calls: default_serialize_calls(),
            log_filter: default_log_filter(),
        }
    }
}

impl BridgeConfig {
    /// Loads the configuration file (if `BESSELK_CONFIG` is set) and applies
    /// environment overrides.
    pub fn load() -> BridgeResult<Self> {
        let mut config = match env::var_os(CONFIG_PATH_ENV) {
            Some(path) => Self::from_file(Path::new(&path))?,
            None => Self::default(),
        };
        config.apply_env()?;
        Ok(config)
    }

    /// Reads a TOML configuration file.
    pub fn from_file(path: &Path) -> BridgeResult<Self> {
        let contents = fs::read_to_string(path).map_err(|source| BridgeError::ConfigFile {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&contents).map_err(|e| BridgeError::ConfigParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Parses a TOML configuration string.
    pub fn from_toml_str(contents: &str) -> BridgeResult<Self> {
        toml::from_str(contents).map_err(|e| BridgeError::invalid_config("toml", e.to_string()))
    }

    /// Applies overrides from the process environment.
    pub fn apply_env(&mut self) -> BridgeResult<()> {
        self.apply_overrides(|key| env::var(key).ok())
    }

    /// Applies overrides from an arbitrary key lookup.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> BridgeResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup("BESSELK_BACKEND") {
            self.backend = value.parse()?;
        }
        if let Some(value) = lookup("BESSELK_SCALING") {
            self.scaling = value.parse()?;
        }
        if let Some(value) = lookup("BESSELK_SERIALIZE") {
            self.serialize_calls = parse_bool("serialize_calls", &value)?;
        }
        if let Some(value) = lookup("BESSELK_LOG") {
            let value = value.trim();
            if value.is_empty() {
                return Err(BridgeError::invalid_config(
                    "log_filter",
                    "filter must not be empty",
                ));
            }
            self.log_filter = value.to_string();
        }
        Ok(())
    }
}

fn parse_bool(field: &str, value: &str) -> BridgeResult<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(BridgeError::invalid_config(
            field,
            format!("expected a boolean, got '{}'", other),
        )),
    }
}
