use super::{CheckContext, CheckRunner, Finding, Findings};

/// Packaging files superseded by `pyproject.toml` + `uv.lock`.
pub const LEGACY_FILES: &[&str] = &[
    "requirements.txt",
    "requirements-dev.txt",
    "dev-requirements.txt",
    "setup.py",
    "setup.cfg",
    "Pipfile",
    "Pipfile.lock",
    "environment.yml",
    "conda.yaml",
];

pub struct LegacyFilesRunner;

impl CheckRunner for LegacyFilesRunner {
    fn name(&self) -> &'static str {
        "legacy-files"
    }

    fn run(&self, ctx: &CheckContext<'_>) -> Findings {
        LEGACY_FILES
            .iter()
            .map(|name| {
                if ctx.root.join(name).exists() {
                    Finding::fail(format!("Legacy file found: {name}"))
                        .with_hint("Remove and migrate to pyproject.toml with uv")
                } else {
                    Finding::pass(format!("No legacy file: {name}"))
                }
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "legacy_tests.rs"]
mod tests;
