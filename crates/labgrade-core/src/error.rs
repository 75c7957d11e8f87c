//! Error types and exit codes for labgrade
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, rejected scores or weights)
//! - 3: Data error (missing or malformed documents, unknown ids)

mod macros;

use std::path::PathBuf;

use thiserror::Error;

/// Exit codes for the labgrade CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - missing or malformed documents (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during grading operations
#[derive(Error, Debug)]
pub enum GradeError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error(
        "invalid score for criterion {}: {} (expected 0..={})",
        .criterion,
        display_score(.score),
        .max_score
    )]
    InvalidScore {
        criterion: String,
        score: Option<f64>,
        max_score: f64,
    },

    #[error("invalid weight: {reason}")]
    InvalidWeight { reason: String },

    #[error("cannot compute a total without criteria")]
    EmptyCriteria,

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    #[error("permission denied: {action} requires the {required} role")]
    PermissionDenied { action: String, required: String },

    // Data errors (exit code 3)
    #[error("document not found: {path:?}")]
    DocumentNotFound { path: PathBuf },

    #[error("invalid document {path:?}: {reason}")]
    InvalidDocument { path: PathBuf, reason: String },

    #[error("{context} not found: {value}")]
    NotFound { context: String, value: String },

    #[error("duplicate {context} id: {id}")]
    DuplicateId { context: String, id: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperation {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),
}

fn display_score(score: &Option<f64>) -> String {
    match score {
        Some(value) => value.to_string(),
        None => "missing".to_string(),
    }
}

impl GradeError {
    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        GradeError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an entity that was not found
    pub fn not_found(context: &str, value: impl std::fmt::Display) -> Self {
        GradeError::NotFound {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        GradeError::FailedOperation {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for a document that parsed but failed validation
    pub fn invalid_document(path: impl Into<PathBuf>, reason: impl std::fmt::Display) -> Self {
        GradeError::InvalidDocument {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            GradeError::UnknownFormat(_)
            | GradeError::UsageError(_)
            | GradeError::InvalidScore { .. }
            | GradeError::InvalidWeight { .. }
            | GradeError::EmptyCriteria
            | GradeError::InvalidValue { .. }
            | GradeError::PermissionDenied { .. } => ExitCode::Usage,

            GradeError::DocumentNotFound { .. }
            | GradeError::InvalidDocument { .. }
            | GradeError::NotFound { .. }
            | GradeError::DuplicateId { .. } => ExitCode::Data,

            GradeError::Io(_)
            | GradeError::Yaml(_)
            | GradeError::Json(_)
            | GradeError::Toml(_)
            | GradeError::TomlSer(_)
            | GradeError::FailedOperation { .. }
            | GradeError::Other(_) => ExitCode::Failure,
        }
    }

    /// Stable identifier for the error kind, used in JSON envelopes
    pub fn error_type(&self) -> &'static str {
        match self {
            GradeError::UnknownFormat(_) => "unknown_format",
            GradeError::UsageError(_) => "usage_error",
            GradeError::InvalidScore { .. } => "invalid_score",
            GradeError::InvalidWeight { .. } => "invalid_weight",
            GradeError::EmptyCriteria => "empty_criteria",
            GradeError::InvalidValue { .. } => "invalid_value",
            GradeError::PermissionDenied { .. } => "permission_denied",
            GradeError::DocumentNotFound { .. } => "document_not_found",
            GradeError::InvalidDocument { .. } => "invalid_document",
            GradeError::NotFound { .. } => "not_found",
            GradeError::DuplicateId { .. } => "duplicate_id",
            GradeError::Io(_) => "io_error",
            GradeError::Yaml(_) => "yaml_error",
            GradeError::Json(_) => "json_error",
            GradeError::Toml(_) | GradeError::TomlSer(_) => "toml_error",
            GradeError::FailedOperation { .. } => "failed_operation",
            GradeError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for labgrade operations
pub type Result<T> = std::result::Result<T, GradeError>;
