use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use crate::error::{ProjectAuditError, Result};

use super::model::{RuleSet, StructureRules, UvRequirements};

/// Structure standards document name inside a standards directory.
pub const STRUCTURE_STANDARDS_FILE: &str = "project-structure.yaml";

/// uv-first requirements document name inside a standards directory.
pub const UV_STANDARDS_FILE: &str = "python-uv-requirements.yaml";

const LOCAL_STANDARDS_DIR: &str = "standards";
const APP_NAME: &str = "project-audit";

/// Trait for loading rule sets from various sources.
pub trait RuleLoader {
    /// Load rules from the first standards directory found.
    ///
    /// # Errors
    /// Returns a configuration error if no standards directory exists or a
    /// document cannot be read or parsed.
    fn load(&self) -> Result<RuleSet>;

    /// Load rules from a specific standards directory.
    ///
    /// # Errors
    /// Returns a configuration error if a document is missing or malformed.
    fn load_from_dir(&self, dir: &Path) -> Result<RuleSet>;
}

/// Trait for filesystem operations (for testability).
pub trait FileSystem {
    /// Read file contents as a string.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read.
    fn read_to_string(&self, path: &Path) -> std::io::Result<String>;

    /// Check if a path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Get the current working directory.
    ///
    /// # Errors
    /// Returns an error if the current directory cannot be determined.
    fn current_dir(&self) -> std::io::Result<PathBuf>;

    /// Get the platform-specific configuration directory for project-audit.
    ///
    /// - Windows: `%APPDATA%\project-audit`
    /// - macOS: `~/Library/Application Support/project-audit`
    /// - Linux: `~/.config/project-audit` (XDG)
    fn config_dir(&self) -> Option<PathBuf>;
}

/// Real filesystem implementation.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn current_dir(&self) -> std::io::Result<PathBuf> {
        std::env::current_dir()
    }

    fn config_dir(&self) -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", APP_NAME).map(|dirs| dirs.config_dir().to_path_buf())
    }
}

/// Loads standards documents from the filesystem.
///
/// Search order:
/// 1. `./standards` in the current directory
/// 2. `standards` inside the platform-specific user config directory
///
/// A directory qualifies when it contains `project-structure.yaml`.
#[derive(Debug)]
pub struct FileRuleLoader<F: FileSystem = RealFileSystem> {
    fs: F,
}

impl Default for FileRuleLoader<RealFileSystem> {
    fn default() -> Self {
        Self::new()
    }
}

impl FileRuleLoader<RealFileSystem> {
    #[must_use]
    pub const fn new() -> Self {
        Self { fs: RealFileSystem }
    }
}

impl<F: FileSystem> FileRuleLoader<F> {
    #[must_use]
    pub const fn with_fs(fs: F) -> Self {
        Self { fs }
    }

    fn candidate_dirs(&self) -> Vec<PathBuf> {
        let mut dirs = Vec::new();
        if let Ok(cwd) = self.fs.current_dir() {
            dirs.push(cwd.join(LOCAL_STANDARDS_DIR));
        }
        if let Some(config_dir) = self.fs.config_dir() {
            dirs.push(config_dir.join(LOCAL_STANDARDS_DIR));
        }
        dirs
    }

    /// Find the first standards directory holding a structure document.
    ///
    /// # Errors
    /// Returns `Config` naming every searched location when none qualifies.
    pub fn locate(&self) -> Result<PathBuf> {
        let candidates = self.candidate_dirs();
        candidates
            .iter()
            .find(|dir| self.fs.exists(&dir.join(STRUCTURE_STANDARDS_FILE)))
            .cloned()
            .ok_or_else(|| {
                let searched = candidates
                    .iter()
                    .map(|d| d.display().to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                ProjectAuditError::Config(format!(
                    "No standards directory found (searched: {searched}). \
                     Pass --standards or run `project-audit init`."
                ))
            })
    }

    fn read_document<T: DeserializeOwned>(&self, path: &Path) -> Result<T> {
        if !self.fs.exists(path) {
            return Err(ProjectAuditError::StandardsNotFound {
                path: path.to_path_buf(),
            });
        }
        let content =
            self.fs
                .read_to_string(path)
                .map_err(|source| ProjectAuditError::FileRead {
                    path: path.to_path_buf(),
                    source,
                })?;
        parse_document(path, &content)
    }
}

impl<F: FileSystem> RuleLoader for FileRuleLoader<F> {
    fn load(&self) -> Result<RuleSet> {
        let dir = self.locate()?;
        self.load_from_dir(&dir)
    }

    fn load_from_dir(&self, dir: &Path) -> Result<RuleSet> {
        let structure_path = dir.join(STRUCTURE_STANDARDS_FILE);
        let uv_path = dir.join(UV_STANDARDS_FILE);

        let structure: StructureRules = self.read_document(&structure_path)?;
        let python: UvRequirements = self.read_document(&uv_path)?;

        let rules = RuleSet { structure, python };
        rules.validate()?;

        tracing::debug!(
            dir = %dir.display(),
            required = rules.structure.required_files.len(),
            overlays = rules.structure.project_types.len(),
            uv_required = rules.python.required_files.len(),
            uv_forbidden = rules.python.forbidden_files.len(),
            "loaded standards"
        );
        Ok(rules)
    }
}

/// Parse one YAML standards document, tagging errors with its path.
///
/// # Errors
/// Returns `YamlParse` if the document is not valid for `T`.
pub fn parse_document<T: DeserializeOwned>(path: &Path, content: &str) -> Result<T> {
    serde_yaml::from_str(content).map_err(|source| ProjectAuditError::YamlParse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
