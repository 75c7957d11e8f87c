//! Reading and writing TOML, JSON and YAML documents
//!
//! The format is picked from the file extension: `.toml`, `.json`,
//! `.yaml` or `.yml`.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::error::{GradeError, Result};

/// Serialization format of a document on disk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Toml,
    Json,
    Yaml,
}

impl DocumentFormat {
    /// Extensions recognized as documents
    pub const EXTENSIONS: [&'static str; 4] = ["toml", "json", "yaml", "yml"];

    /// Pick the format for a path from its extension
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "toml" => Ok(DocumentFormat::Toml),
            "json" => Ok(DocumentFormat::Json),
            "yaml" | "yml" => Ok(DocumentFormat::Yaml),
            _ => Err(GradeError::invalid_value(
                "document extension",
                format!("{} (expected .toml, .json, .yaml or .yml)", path.display()),
            )),
        }
    }

    /// Whether a path carries a recognized document extension
    pub fn is_document(path: &Path) -> bool {
        Self::from_path(path).is_ok()
    }

    fn parse<T: DeserializeOwned>(self, content: &str) -> Result<T> {
        Ok(match self {
            DocumentFormat::Toml => toml::from_str(content)?,
            DocumentFormat::Json => serde_json::from_str(content)?,
            DocumentFormat::Yaml => serde_yaml::from_str(content)?,
        })
    }

    /// Serialize a value in this format
    pub fn render<T: Serialize>(self, value: &T) -> Result<String> {
        Ok(match self {
            DocumentFormat::Toml => toml::to_string_pretty(value)?,
            DocumentFormat::Json => serde_json::to_string_pretty(value)?,
            DocumentFormat::Yaml => serde_yaml::to_string(value)?,
        })
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentFormat::Toml => write!(f, "toml"),
            DocumentFormat::Json => write!(f, "json"),
            DocumentFormat::Yaml => write!(f, "yaml"),
        }
    }
}

/// Load and deserialize a document
pub fn load<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let format = DocumentFormat::from_path(path)?;
    if !path.exists() {
        return Err(GradeError::DocumentNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path)
        .map_err(|e| GradeError::io_operation("read", path.display(), e))?;

    debug!(path = %path.display(), %format, bytes = content.len(), "load_document");

    format
        .parse(&content)
        .map_err(|e| GradeError::invalid_document(path, e))
}

/// Serialize and write a document, creating parent directories
pub fn save<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let format = DocumentFormat::from_path(path)?;
    let content = format.render(value)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .map_err(|e| GradeError::io_operation("create directory", parent.display(), e))?;
    }

    fs::write(path, content).map_err(|e| GradeError::io_operation("write", path.display(), e))?;
    debug!(path = %path.display(), %format, "save_document");
    Ok(())
}
