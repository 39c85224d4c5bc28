//! Structured results handed to formatters and the command surface.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::checker::{Finding, Findings};
use crate::project::ProjectType;
use crate::score::{COMPLIANCE_THRESHOLD, ComplianceTier, QUALITY_GATE, QualityTier, Score};

/// Outcome of the structure audit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuditResult {
    pub project_path: PathBuf,
    pub project_type: ProjectType,
    pub passed: Vec<Finding>,
    pub failed: Vec<Finding>,
    pub score: usize,
    pub total: usize,
    pub percentage: f64,
    pub quality_level: QualityTier,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AuditResult {
    #[must_use]
    pub fn from_findings(project_path: &Path, project_type: ProjectType, findings: Findings) -> Self {
        let score = Score::from(&findings);
        let (passed, failed) = findings.into_parts();
        Self {
            project_path: project_path.to_path_buf(),
            project_type,
            passed,
            failed,
            score: score.score,
            total: score.total,
            percentage: score.percentage,
            quality_level: QualityTier::from_percentage(score.percentage),
            error: None,
        }
    }

    /// Zero-score result for a path that does not exist.
    #[must_use]
    pub fn not_found(project_path: &Path) -> Self {
        Self {
            error: Some(not_found_message(project_path)),
            ..Self::from_findings(project_path, ProjectType::Unknown, Findings::new())
        }
    }

    #[must_use]
    pub const fn is_error(&self) -> bool {
        self.error.is_some()
    }

    #[must_use]
    pub fn meets_quality_gate(&self) -> bool {
        !self.is_error() && self.percentage >= QUALITY_GATE
    }
}

/// Outcome of the uv compliance audit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UvComplianceResult {
    pub project_path: PathBuf,
    /// False when the project is not a Python project.
    pub applicable: bool,
    pub uv_compliant: bool,
    pub passed: Vec<Finding>,
    pub failed: Vec<Finding>,
    pub score: usize,
    pub total: usize,
    pub percentage: f64,
    pub compliance_level: Option<ComplianceTier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl UvComplianceResult {
    /// `legacy_free` is false when any legacy dependency file was found;
    /// such projects are never compliant regardless of percentage.
    #[must_use]
    pub fn from_findings(project_path: &Path, findings: Findings, legacy_free: bool) -> Self {
        let score = Score::from(&findings);
        let (passed, failed) = findings.into_parts();
        Self {
            project_path: project_path.to_path_buf(),
            applicable: true,
            uv_compliant: legacy_free && score.percentage >= COMPLIANCE_THRESHOLD,
            passed,
            failed,
            score: score.score,
            total: score.total,
            percentage: score.percentage,
            compliance_level: Some(ComplianceTier::from_percentage(score.percentage)),
            error: None,
        }
    }

    #[must_use]
    pub fn not_applicable(project_path: &Path) -> Self {
        Self::empty(project_path, false, "Not a Python project".to_string())
    }

    #[must_use]
    pub fn not_found(project_path: &Path) -> Self {
        Self::empty(project_path, true, not_found_message(project_path))
    }

    /// An applicable result only carries an error when the path is missing.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        self.applicable && self.error.is_some()
    }

    fn empty(project_path: &Path, applicable: bool, error: String) -> Self {
        Self {
            project_path: project_path.to_path_buf(),
            applicable,
            uv_compliant: false,
            passed: Vec::new(),
            failed: Vec::new(),
            score: 0,
            total: 0,
            percentage: 0.0,
            compliance_level: None,
            error: Some(error),
        }
    }
}

/// Structure audit plus, for Python-workflow projects, the uv compliance audit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuditReport {
    pub structure: AuditResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uv_compliance: Option<UvComplianceResult>,
    pub quality_gate_passed: bool,
}

impl AuditReport {
    /// The gate requires compliance only when a compliance result is present.
    #[must_use]
    pub fn new(structure: AuditResult, uv_compliance: Option<UvComplianceResult>) -> Self {
        let quality_gate_passed = structure.meets_quality_gate()
            && uv_compliance.as_ref().is_none_or(|c| c.uv_compliant);
        Self {
            structure,
            uv_compliance,
            quality_gate_passed,
        }
    }
}

fn not_found_message(project_path: &Path) -> String {
    format!("Project path does not exist: {}", project_path.display())
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
