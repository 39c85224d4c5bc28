use std::path::Path;

use crate::rules::FileRequirement;

use super::{CheckContext, CheckRunner, Finding, Findings};

/// Checks that every listed path exists with the declared kind.
pub struct StructureRunner<'a> {
    requirements: &'a [FileRequirement],
}

impl<'a> StructureRunner<'a> {
    #[must_use]
    pub const fn new(requirements: &'a [FileRequirement]) -> Self {
        Self { requirements }
    }
}

impl CheckRunner for StructureRunner<'_> {
    fn name(&self) -> &'static str {
        "structure"
    }

    fn run(&self, ctx: &CheckContext<'_>) -> Findings {
        self.requirements
            .iter()
            .map(|req| required_finding(req, ctx.root, None))
            .collect()
    }
}

/// Checks that none of the listed paths exist.
pub struct ForbiddenFilesRunner<'a> {
    forbidden: &'a [FileRequirement],
}

impl<'a> ForbiddenFilesRunner<'a> {
    #[must_use]
    pub const fn new(forbidden: &'a [FileRequirement]) -> Self {
        Self { forbidden }
    }
}

impl CheckRunner for ForbiddenFilesRunner<'_> {
    fn name(&self) -> &'static str {
        "forbidden-files"
    }

    fn run(&self, ctx: &CheckContext<'_>) -> Findings {
        self.forbidden
            .iter()
            .map(|req| forbidden_finding(req, ctx.root))
            .collect()
    }
}

/// `qualifier` names the overlay a requirement came from, e.g. `python`.
pub(super) fn required_finding(
    req: &FileRequirement,
    root: &Path,
    qualifier: Option<&str>,
) -> Finding {
    let kind = if req.is_directory() { "directory" } else { "file" };
    let label = qualifier.map_or_else(|| kind.to_string(), |q| format!("{q} {kind}"));

    if req.is_satisfied_at(root) {
        Finding::pass(format!("{} ({label})", req.path))
    } else {
        let finding = Finding::fail(format!("{} ({label} missing)", req.path));
        match req.reason.as_deref() {
            Some(reason) => finding.with_hint(reason),
            None => finding,
        }
    }
}

/// A forbidden path passes when absent and fails, with its reason, when present.
pub(super) fn forbidden_finding(req: &FileRequirement, root: &Path) -> Finding {
    if !req.is_present_at(root) {
        return Finding::pass(format!("No forbidden file: {}", req.path));
    }

    let reason = req.reason.as_deref().unwrap_or("Forbidden file");
    let hint = req
        .alternative
        .as_deref()
        .map_or_else(|| format!("Remove {}", req.path), |alt| format!("Use instead: {alt}"));
    Finding::fail(format!("{} found - {reason}", req.path)).with_hint(hint)
}

#[cfg(test)]
#[path = "structure_tests.rs"]
mod tests;
