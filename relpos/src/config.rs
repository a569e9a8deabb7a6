//! Run configuration file support.
//!
//! Settings are read from a `relpos.toml` file; every section and key is
//! optional and falls back to the built-in defaults. Command-line flags are
//! applied on top by the binary.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::algorithms::matching::DEFAULT_MAX_GAP_SECONDS;
use crate::algorithms::relative::ReferenceAngles;
use crate::core::error::{RelposError, RelposResult};
use crate::services::relpos::MatchSettings;

/// Default configuration file name
pub const CONFIG_FILE_NAME: &str = "relpos.toml";

/// Run configuration from file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RelposConfig {
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub reference: ReferenceAngles,
    #[serde(default)]
    pub classification: ClassificationSettings,
    #[serde(default)]
    pub output: OutputSettings,
}

/// Time matching settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchingSettings {
    #[serde(default = "default_max_gap_seconds")]
    pub max_gap_seconds: f64,
}

/// Camera classification settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationSettings {
    /// Camera numbers divisible by this value are FFoV cameras
    #[serde(default = "default_ffov_camera_modulus")]
    pub ffov_camera_modulus: u32,
}

/// Report output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputSettings {
    #[serde(default = "default_output_directory")]
    pub directory: PathBuf,
    #[serde(default = "default_write_file")]
    pub write_file: bool,
}

fn default_max_gap_seconds() -> f64 {
    DEFAULT_MAX_GAP_SECONDS
}

fn default_ffov_camera_modulus() -> u32 {
    5
}

fn default_output_directory() -> PathBuf {
    PathBuf::from(".")
}

fn default_write_file() -> bool {
    true
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            max_gap_seconds: default_max_gap_seconds(),
        }
    }
}

impl Default for ClassificationSettings {
    fn default() -> Self {
        Self {
            ffov_camera_modulus: default_ffov_camera_modulus(),
        }
    }
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            directory: default_output_directory(),
            write_file: default_write_file(),
        }
    }
}

impl RelposConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Returns
    /// * `Ok(RelposConfig)` if the file was read, parsed and validated
    /// * `Err(RelposError::Configuration)` otherwise
    pub fn from_file<P: AsRef<Path>>(path: P) -> RelposResult<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            RelposError::Configuration(format!(
                "Failed to read config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        Self::from_toml_str(&content)
    }

    /// Parse and validate configuration content.
    pub fn from_toml_str(content: &str) -> RelposResult<Self> {
        let config: RelposConfig = toml::from_str(content).map_err(|e| {
            RelposError::Configuration(format!("Failed to parse config file: {}", e))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from the default location.
    ///
    /// Searches for `relpos.toml` in:
    /// 1. Current directory
    /// 2. Parent directory
    ///
    /// Falls back to defaults when neither exists.
    pub fn from_default_location() -> RelposResult<Self> {
        let search_paths = [
            PathBuf::from(CONFIG_FILE_NAME),
            Path::new("..").join(CONFIG_FILE_NAME),
        ];

        for path in search_paths {
            if path.exists() {
                log::info!("Using configuration file {}", path.display());
                return Self::from_file(&path);
            }
        }

        log::debug!("No {} found, using defaults", CONFIG_FILE_NAME);
        Ok(Self::default())
    }

    pub fn validate(&self) -> RelposResult<()> {
        let gap = self.matching.max_gap_seconds;
        if !gap.is_finite() || gap <= 0.0 {
            return Err(RelposError::Configuration(format!(
                "matching.max_gap_seconds must be a positive number, got {}",
                gap
            )));
        }

        if self.classification.ffov_camera_modulus == 0 {
            return Err(RelposError::Configuration(
                "classification.ffov_camera_modulus must be greater than zero".to_string(),
            ));
        }

        let reference = &self.reference;
        if !reference.rotation_deg.is_finite() || !reference.tilt_deg.is_finite() {
            return Err(RelposError::Configuration(
                "reference angles must be finite".to_string(),
            ));
        }

        Ok(())
    }

    /// Settings handed to the matching pipeline.
    pub fn match_settings(&self) -> MatchSettings {
        MatchSettings {
            max_gap_seconds: self.matching.max_gap_seconds,
            reference: self.reference,
        }
    }
}
