use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProjectAuditError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Standards file not found: {}", .path.display())]
    StandardsNotFound { path: PathBuf },

    #[error("Invalid standards document {}: {source}", .path.display())]
    YamlParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Project path does not exist: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read file: {}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl ProjectAuditError {
    /// Short, stable category name used in diagnostics.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) | Self::StandardsNotFound { .. } | Self::YamlParse { .. } => "Config",
            Self::NotFound(_) => "NotFound",
            Self::FileRead { .. } => "FileRead",
            Self::Io(_) => "IO",
            Self::JsonSerialize(_) => "Serialize",
        }
    }

    /// True for errors that make a rule set unusable.
    #[must_use]
    pub const fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            Self::Config(_) | Self::StandardsNotFound { .. } | Self::YamlParse { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, ProjectAuditError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
