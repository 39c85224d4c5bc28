use crate::project::ProjectType;
use crate::rules::StructureRules;

use super::structure::{forbidden_finding, required_finding};
use super::{CheckContext, CheckRunner, Finding, Findings};

/// Applies the overlay for the detected project type.
pub struct OverlayRunner<'a> {
    rules: &'a StructureRules,
}

impl<'a> OverlayRunner<'a> {
    #[must_use]
    pub const fn new(rules: &'a StructureRules) -> Self {
        Self { rules }
    }
}

impl CheckRunner for OverlayRunner<'_> {
    fn name(&self) -> &'static str {
        "project-type"
    }

    fn run(&self, ctx: &CheckContext<'_>) -> Findings {
        let mut findings = Findings::new();

        if ctx.project_type == ProjectType::Unknown {
            findings.push(
                Finding::fail("Cannot determine project type")
                    .with_hint("Add a manifest such as pyproject.toml or package.json"),
            );
            return findings;
        }

        let Some(overlay) = self.rules.overlay(ctx.project_type) else {
            tracing::debug!(project_type = %ctx.project_type, "no overlay configured");
            return findings;
        };

        let qualifier = ctx.project_type.as_str();
        for req in &overlay.required_files {
            findings.push(required_finding(req, ctx.root, Some(qualifier)));
        }

        if ctx.project_type.enforces_forbidden_files() {
            for req in &overlay.forbidden_files {
                findings.push(forbidden_finding(req, ctx.root));
            }
        }

        findings
    }
}

#[cfg(test)]
#[path = "overlay_tests.rs"]
mod tests;
