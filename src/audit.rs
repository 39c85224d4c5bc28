use std::path::Path;

use crate::checker::{
    CheckContext, CheckRunner, CommandProbe, DocsRunner, ForbiddenFilesRunner, LegacyFilesRunner,
    ManifestRunner, OverlayRunner, StructureRunner, ToolProbe, ToolRunner, VcsRunner, run_all,
};
use crate::project::{Classification, ProjectDetector, RealProjectDetector, classify_project};
use crate::report::{AuditReport, AuditResult, UvComplianceResult};
use crate::rules::RuleSet;

/// Runs the structure and uv compliance audits against project roots.
///
/// An `Auditor` holds no per-run state; every call re-probes the filesystem.
pub struct Auditor<D = RealProjectDetector, P = CommandProbe> {
    rules: RuleSet,
    detector: D,
    probe: P,
}

impl Auditor {
    #[must_use]
    pub fn new(rules: RuleSet) -> Self {
        Self::with_components(rules, RealProjectDetector, CommandProbe::uv())
    }
}

impl<D: ProjectDetector, P: ToolProbe> Auditor<D, P> {
    /// Create an auditor with a custom detector and tool probe (for testing).
    pub const fn with_components(rules: RuleSet, detector: D, probe: P) -> Self {
        Self {
            rules,
            detector,
            probe,
        }
    }

    pub const fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn classify(&self, root: &Path) -> Classification {
        classify_project(&self.detector, root)
    }

    /// Structure audit. A missing path yields an error-tagged, zero-score result.
    pub fn audit_project(&self, path: &Path) -> AuditResult {
        if !path.exists() {
            return AuditResult::not_found(path);
        }
        let classification = self.classify(path);
        self.structure_audit(path, classification)
    }

    /// uv compliance audit. Not applicable unless the project follows a
    /// Python packaging workflow.
    pub fn validate_manifest_compliance(&self, path: &Path) -> UvComplianceResult {
        if !path.exists() {
            return UvComplianceResult::not_found(path);
        }
        let classification = self.classify(path);
        self.compliance_audit(path, classification)
    }

    /// Both audits from a single classification, combined under the quality gate.
    pub fn audit_full(&self, path: &Path) -> AuditReport {
        if !path.exists() {
            return AuditReport::new(AuditResult::not_found(path), None);
        }
        let classification = self.classify(path);
        let structure = self.structure_audit(path, classification);
        let compliance = classification
            .python_workflow
            .then(|| self.compliance_audit(path, classification));
        AuditReport::new(structure, compliance)
    }

    fn structure_audit(&self, path: &Path, classification: Classification) -> AuditResult {
        let rules = &self.rules.structure;
        let ctx = CheckContext::new(path, classification.project_type);

        let structure = StructureRunner::new(&rules.required_files);
        let overlay = OverlayRunner::new(rules);
        let docs = if classification.python_workflow {
            DocsRunner::full()
        } else {
            DocsRunner::structure_only()
        };
        let vcs = VcsRunner::repository(rules.ignore_patterns_for(classification.project_type));

        let findings = run_all(&[&structure, &overlay, &docs, &vcs], &ctx);
        let result = AuditResult::from_findings(path, classification.project_type, findings);
        tracing::info!(
            path = %path.display(),
            project_type = %result.project_type,
            score = result.score,
            total = result.total,
            "structure audit complete"
        );
        result
    }

    fn compliance_audit(&self, path: &Path, classification: Classification) -> UvComplianceResult {
        if !classification.python_workflow {
            return UvComplianceResult::not_applicable(path);
        }

        let rules = &self.rules.python;
        let ctx = CheckContext::new(path, classification.project_type);

        let tool = ToolRunner::new(&self.probe);
        let required = StructureRunner::new(&rules.required_files);
        let forbidden = ForbiddenFilesRunner::new(&rules.forbidden_files);
        let manifest = ManifestRunner::new(&rules.manifest);
        let ignore = VcsRunner::ignore_file_only(rules.ignore_patterns.clone());
        let docs = DocsRunner::workflow_only();

        let mut findings = run_all(
            &[&tool, &required, &forbidden, &manifest, &ignore, &docs],
            &ctx,
        );
        let legacy = LegacyFilesRunner.run(&ctx);
        let legacy_free = legacy.failed().is_empty();
        findings.extend(legacy);

        let result = UvComplianceResult::from_findings(path, findings, legacy_free);
        tracing::info!(
            path = %path.display(),
            score = result.score,
            total = result.total,
            compliant = result.uv_compliant,
            "uv compliance audit complete"
        );
        result
    }
}

#[cfg(test)]
#[path = "audit_tests.rs"]
mod tests;
