use std::collections::BTreeMap;
use std::path::{Component, Path};

use serde::{Deserialize, Serialize};

use crate::error::{ProjectAuditError, Result};
use crate::project::ProjectType;

// ============================================================================
// File requirements
// ============================================================================

/// Whether a requirement names a regular file or a directory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequirementKind {
    #[default]
    File,
    Directory,
}

/// A path that must (or must not) exist in the audited project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileRequirement {
    /// Path relative to the project root.
    pub path: String,

    #[serde(rename = "type", default)]
    pub kind: RequirementKind,

    /// Why the requirement exists. Shown on forbidden-file failures.
    #[serde(default)]
    pub reason: Option<String>,

    /// What to use instead. Shown as the remediation hint.
    #[serde(default)]
    pub alternative: Option<String>,
}

impl FileRequirement {
    #[must_use]
    pub fn file(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            kind: RequirementKind::File,
            reason: None,
            alternative: None,
        }
    }

    #[must_use]
    pub fn directory(path: impl Into<String>) -> Self {
        Self {
            kind: RequirementKind::Directory,
            ..Self::file(path)
        }
    }

    #[must_use]
    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    #[must_use]
    pub fn with_alternative(mut self, alternative: impl Into<String>) -> Self {
        self.alternative = Some(alternative.into());
        self
    }

    #[must_use]
    pub const fn is_directory(&self) -> bool {
        matches!(self.kind, RequirementKind::Directory)
    }

    /// Probe the filesystem: the path exists under `root` with the right kind.
    #[must_use]
    pub fn is_satisfied_at(&self, root: &Path) -> bool {
        let target = root.join(&self.path);
        match self.kind {
            RequirementKind::File => target.is_file(),
            RequirementKind::Directory => target.is_dir(),
        }
    }

    /// True when anything (file or directory) exists at the path.
    #[must_use]
    pub fn is_present_at(&self, root: &Path) -> bool {
        root.join(&self.path).exists()
    }
}

// ============================================================================
// Structure standards (project-structure.yaml)
// ============================================================================

/// Project-type specific additions to the base rules.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Overlay {
    #[serde(default)]
    pub required_files: Vec<FileRequirement>,

    /// Paths that must be absent. Enforced for Python projects only.
    #[serde(default)]
    pub forbidden_files: Vec<FileRequirement>,

    /// Extra patterns the ignore file must contain for this type.
    #[serde(default)]
    pub ignore_patterns: Vec<String>,
}

/// Base requirements. `required_files` must be present, even if empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StructureRules {
    pub required_files: Vec<FileRequirement>,

    #[serde(default)]
    pub ignore_patterns: Vec<String>,

    #[serde(default)]
    pub project_types: BTreeMap<ProjectType, Overlay>,
}

impl StructureRules {
    #[must_use]
    pub fn overlay(&self, project_type: ProjectType) -> Option<&Overlay> {
        self.project_types.get(&project_type)
    }

    /// Base ignore patterns followed by the overlay's, without duplicates.
    #[must_use]
    pub fn ignore_patterns_for(&self, project_type: ProjectType) -> Vec<String> {
        let mut patterns = self.ignore_patterns.clone();
        if let Some(overlay) = self.overlay(project_type) {
            for pattern in &overlay.ignore_patterns {
                if !patterns.contains(pattern) {
                    patterns.push(pattern.clone());
                }
            }
        }
        patterns
    }
}

// ============================================================================
// uv-first standards (python-uv-requirements.yaml)
// ============================================================================

/// Required shape of the Python project manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ManifestRequirements {
    #[serde(default = "default_manifest_file")]
    pub file: String,

    /// Top-level metadata table, `[project]` in PEP 621.
    #[serde(default = "default_manifest_section")]
    pub section: String,

    #[serde(default = "default_required_fields")]
    pub required_fields: Vec<String>,

    #[serde(default = "default_dependencies_field")]
    pub dependencies_field: String,

    /// Other top-level tables that must exist, e.g. `build-system`.
    #[serde(default = "default_required_sections")]
    pub required_sections: Vec<String>,
}

impl Default for ManifestRequirements {
    fn default() -> Self {
        Self {
            file: default_manifest_file(),
            section: default_manifest_section(),
            required_fields: default_required_fields(),
            dependencies_field: default_dependencies_field(),
            required_sections: default_required_sections(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UvRequirements {
    #[serde(default)]
    pub required_files: Vec<FileRequirement>,

    #[serde(default)]
    pub forbidden_files: Vec<FileRequirement>,

    #[serde(default = "default_uv_ignore_patterns")]
    pub ignore_patterns: Vec<String>,

    #[serde(default)]
    pub manifest: ManifestRequirements,
}

impl Default for UvRequirements {
    fn default() -> Self {
        Self {
            required_files: Vec::new(),
            forbidden_files: Vec::new(),
            ignore_patterns: default_uv_ignore_patterns(),
            manifest: ManifestRequirements::default(),
        }
    }
}

fn default_manifest_file() -> String {
    "pyproject.toml".to_string()
}

fn default_manifest_section() -> String {
    "project".to_string()
}

fn default_required_fields() -> Vec<String> {
    vec![
        "name".to_string(),
        "version".to_string(),
        "description".to_string(),
    ]
}

fn default_dependencies_field() -> String {
    "dependencies".to_string()
}

fn default_required_sections() -> Vec<String> {
    vec!["build-system".to_string()]
}

fn default_uv_ignore_patterns() -> Vec<String> {
    vec![
        ".venv/".to_string(),
        "*.egg-info/".to_string(),
        "__pycache__/".to_string(),
    ]
}

// ============================================================================
// RuleSet
// ============================================================================

/// All requirements for one validation run. Immutable once loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RuleSet {
    pub structure: StructureRules,
    pub python: UvRequirements,
}

impl RuleSet {
    /// Reject rule sets that cannot be evaluated against a project root.
    ///
    /// # Errors
    /// Returns `Config` for empty or absolute requirement paths, or for an
    /// overlay keyed on the `unknown` project type.
    pub fn validate(&self) -> Result<()> {
        validate_requirements("required_files", &self.structure.required_files)?;

        for (project_type, overlay) in &self.structure.project_types {
            if *project_type == ProjectType::Unknown {
                return Err(ProjectAuditError::Config(
                    "project_types.unknown is not allowed: unknown projects have no overlay"
                        .to_string(),
                ));
            }
            validate_requirements(
                &format!("project_types.{project_type}.required_files"),
                &overlay.required_files,
            )?;
            validate_requirements(
                &format!("project_types.{project_type}.forbidden_files"),
                &overlay.forbidden_files,
            )?;
            if !overlay.forbidden_files.is_empty() && !project_type.enforces_forbidden_files() {
                tracing::warn!(
                    %project_type,
                    "forbidden_files are only enforced for python projects; ignoring"
                );
            }
        }

        validate_requirements("required_files", &self.python.required_files)?;
        validate_requirements("forbidden_files", &self.python.forbidden_files)?;
        validate_relative("manifest.file", &self.python.manifest.file)?;
        Ok(())
    }
}

fn validate_requirements(section: &str, requirements: &[FileRequirement]) -> Result<()> {
    for requirement in requirements {
        validate_relative(section, &requirement.path)?;
    }
    Ok(())
}

fn validate_relative(section: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(ProjectAuditError::Config(format!("{section}: empty path")));
    }
    let is_absolute = Path::new(path).is_absolute()
        || Path::new(path)
            .components()
            .any(|c| matches!(c, Component::RootDir | Component::Prefix(_)));
    if is_absolute {
        return Err(ProjectAuditError::Config(format!(
            "{section}: '{path}' must be relative to the project root"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
