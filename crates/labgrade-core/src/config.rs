//! Grading configuration
//!
//! Read from `--config`, `./labgrade.toml` or the user's global config
//! file, in that order; built-in defaults apply when none exists.

pub mod global;
pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{GradeError, Result};
use crate::grade::GradeScale;
use crate::policy::ScoringPolicy;

pub use types::{GradeScaleConfig, GradingConfig};

/// Where the active configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Defaults,
    File(PathBuf),
}

impl ConfigSource {
    pub fn describe(&self) -> String {
        match self {
            ConfigSource::Defaults => "built-in defaults".to_string(),
            ConfigSource::File(path) => path.display().to_string(),
        }
    }
}

impl GradingConfig {
    /// Load and validate configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(GradeError::DocumentNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = fs::read_to_string(path)?;
        let config: GradingConfig =
            toml::from_str(&content).map_err(|e| GradeError::invalid_document(path, e))?;
        config.validate()?;
        Ok(config)
    }

    /// Load the explicit file if given, otherwise the first discovered one
    pub fn resolve(explicit: Option<&Path>, cwd: &Path) -> Result<(Self, ConfigSource)> {
        let path = match explicit {
            Some(path) => Some(path.to_path_buf()),
            None => global::discover(cwd),
        };

        match path {
            Some(path) => {
                debug!(path = %path.display(), "load_config");
                let config = Self::load(&path)?;
                Ok((config, ConfigSource::File(path)))
            }
            None => Ok((Self::default(), ConfigSource::Defaults)),
        }
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)
            .map_err(|e| GradeError::io_operation("write", path.display(), e))?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if !self.weight_tolerance.is_finite() || self.weight_tolerance < 0.0 {
            return Err(GradeError::invalid_value(
                "weight_tolerance",
                self.weight_tolerance,
            ));
        }
        if self.grader.trim().is_empty() {
            return Err(GradeError::invalid_value("grader", "empty name"));
        }
        self.scale()?;
        Ok(())
    }

    /// Configured grade scale, or the built-in one
    pub fn scale(&self) -> Result<GradeScale> {
        match &self.grade_scale {
            Some(scale) => GradeScale::new(scale.thresholds.clone(), scale.fallback),
            None => Ok(GradeScale::default()),
        }
    }

    pub fn policy(&self) -> Result<ScoringPolicy> {
        Ok(ScoringPolicy {
            mode: self.mode,
            tolerance: self.weight_tolerance,
            scale: self.scale()?,
        })
    }
}
