//! Configuration management for keysuite.
//!
//! Settings are plain serde structs so they can be loaded from TOML or built
//! in code. Every section has defaults, so a partial file is accepted.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{CoreError, Result};

/// The only suite tag currently defined (ECDSA P-256 / SHA-256 / RIPEMD-160).
pub const DEFAULT_SUITE_TAG: u8 = 0x01;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub suite: SuiteConfig,
    pub decode: DecodeConfig,
    pub logging: LoggingConfig,
}

/// Suite used for freshly generated key material.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuiteConfig {
    pub tag: u8,
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            tag: DEFAULT_SUITE_TAG,
        }
    }
}

/// Policy applied when decoding public keys and signatures.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecodeConfig {
    /// Reject embedded points that do not lie on the curve.
    pub strict_curve_check: bool,
}

impl DecodeConfig {
    /// Decoding that trusts embedded coordinates, as stored data always has.
    pub const LENIENT: Self = Self {
        strict_curve_check: false,
    };

    /// Decoding that checks curve membership of every embedded point.
    pub const STRICT: Self = Self {
        strict_curve_check: true,
    };
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Emit JSON lines instead of human readable output.
    pub json: bool,
    /// Filter used when `RUST_LOG` is not set.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            json: false,
            level: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config =
            toml::from_str(content).map_err(|e| CoreError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self::default()
    }

    /// Checks values serde cannot express, such as the suite tag range.
    pub fn validate(&self) -> Result<()> {
        if self.suite.tag != DEFAULT_SUITE_TAG {
            return Err(CoreError::Config(format!(
                "unsupported suite tag 0x{:02x}",
                self.suite.tag
            )));
        }
        if self.logging.level.trim().is_empty() {
            return Err(CoreError::Config("logging level must not be empty".into()));
        }
        Ok(())
    }
}
