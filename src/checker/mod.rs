mod docs;
mod finding;
mod legacy;
mod manifest;
mod overlay;
mod structure;
mod tool;
mod vcs;

pub use docs::{
    AGENTS_FILE, DocsRunner, FORBIDDEN_COMMANDS, LOOKBEHIND_WINDOW, MIN_CONTENT_CHARS,
    MIN_WORKFLOW_INDICATORS, WORKFLOW_INDICATORS,
};
pub use finding::{Finding, FindingStatus, Findings};
pub use legacy::{LEGACY_FILES, LegacyFilesRunner};
pub use manifest::ManifestRunner;
pub use overlay::OverlayRunner;
pub use structure::{ForbiddenFilesRunner, StructureRunner};
pub use tool::{CommandProbe, DEFAULT_PROBE_TIMEOUT, ToolProbe, ToolRunner, ToolStatus};
pub use vcs::{GIT_DIR, IGNORE_FILE, VcsRunner};

use std::path::Path;

use crate::project::ProjectType;

/// Inputs shared by every runner in one audit.
#[derive(Debug, Clone, Copy)]
pub struct CheckContext<'a> {
    pub root: &'a Path,
    pub project_type: ProjectType,
}

impl<'a> CheckContext<'a> {
    #[must_use]
    pub const fn new(root: &'a Path, project_type: ProjectType) -> Self {
        Self { root, project_type }
    }
}

pub trait CheckRunner {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Probe the project and report one finding per checked element.
    ///
    /// Runners never fail: unreadable or unparsable inputs become failed
    /// findings so they count against the score.
    fn run(&self, ctx: &CheckContext<'_>) -> Findings;
}

/// Run `runners` in order and concatenate their findings.
pub fn run_all(runners: &[&dyn CheckRunner], ctx: &CheckContext<'_>) -> Findings {
    let mut all = Findings::new();
    for runner in runners {
        let findings = runner.run(ctx);
        tracing::debug!(
            runner = runner.name(),
            passed = findings.passed().len(),
            failed = findings.failed().len(),
            "runner finished"
        );
        all.extend(findings);
    }
    all
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
