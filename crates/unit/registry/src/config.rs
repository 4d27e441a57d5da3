//! Registry configuration
//!
//! The administrator identity and the initial calibration are injected at
//! construction. A host may build the config in code or load it from TOML:
//!
//! ```toml
//! administrator = "deployer"
//!
//! [calibration]
//! stability_index = 100
//! flux_value = 1
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use unit_types::{Calibration, Principal};

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Sole principal allowed to recalibrate
    pub administrator: Principal,

    #[serde(default)]
    pub calibration: Calibration,
}

impl RegistryConfig {
    pub fn new(administrator: impl Into<String>) -> Self {
        Self {
            administrator: Principal::new(administrator),
            calibration: Calibration::default(),
        }
    }

    pub fn with_calibration(mut self, calibration: Calibration) -> Self {
        self.calibration = calibration;
        self
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: RegistryConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.administrator.as_str().is_empty() {
            return Err(ConfigError::Invalid("administrator must not be empty".into()));
        }
        if self.calibration.stability_index == 0 {
            return Err(ConfigError::Invalid("stability_index must be > 0".into()));
        }
        if self.calibration.flux_value == 0 {
            return Err(ConfigError::Invalid("flux_value must be > 0".into()));
        }
        Ok(())
    }
}
