use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Project classification tag. Selects which overlay rules apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    /// Astro site (framework variant of a Node.js project).
    Astro,
    Python,
    #[serde(rename = "nodejs")]
    NodeJs,
    Unknown,
}

impl ProjectType {
    /// Returns the tag used in rule documents and reports.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Astro => "astro",
            Self::Python => "python",
            Self::NodeJs => "nodejs",
            Self::Unknown => "unknown",
        }
    }

    /// Forbidden-file overlays are only enforced for Python projects.
    #[must_use]
    pub const fn enforces_forbidden_files(self) -> bool {
        matches!(self, Self::Python)
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Trait for probing marker files (for testability).
pub trait ProjectDetector {
    /// Check if a path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Real filesystem implementation for project detection.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealProjectDetector;

impl ProjectDetector for RealProjectDetector {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

/// Marker files in priority order. The first marker present wins, so the
/// framework marker must precede the generic manifests.
const TYPE_MARKERS: &[(&str, ProjectType)] = &[
    ("astro.config.mjs", ProjectType::Astro),
    ("pyproject.toml", ProjectType::Python),
    ("package.json", ProjectType::NodeJs),
];

/// Files that mark a project as following a Python packaging workflow even
/// when another type wins classification.
pub const PYTHON_WORKFLOW_MARKERS: &[&str] =
    &["pyproject.toml", "setup.py", "requirements.txt", "Pipfile"];

/// Outcome of classifying a project root. Computed once per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub project_type: ProjectType,
    /// True when uv compliance applies to this project.
    pub python_workflow: bool,
}

/// Detect project type from the first marker file present at `root`.
pub fn classify<D: ProjectDetector>(detector: &D, root: &Path) -> ProjectType {
    TYPE_MARKERS
        .iter()
        .find(|(marker, _)| detector.exists(&root.join(marker)))
        .map_or(ProjectType::Unknown, |(_, project_type)| *project_type)
}

/// Classify `root` and decide whether the Python workflow checks apply.
pub fn classify_project<D: ProjectDetector>(detector: &D, root: &Path) -> Classification {
    let project_type = classify(detector, root);
    let python_workflow = project_type == ProjectType::Python
        || PYTHON_WORKFLOW_MARKERS
            .iter()
            .any(|marker| detector.exists(&root.join(marker)));

    tracing::debug!(
        root = %root.display(),
        %project_type,
        python_workflow,
        "classified project"
    );

    Classification {
        project_type,
        python_workflow,
    }
}

#[cfg(test)]
#[path = "project_tests.rs"]
mod tests;
