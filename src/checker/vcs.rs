use std::fs;

use super::{CheckContext, CheckRunner, Finding, Findings};

pub const GIT_DIR: &str = ".git";
pub const IGNORE_FILE: &str = ".gitignore";

/// Checks the repository marker and the ignore file.
#[derive(Debug, Clone)]
pub struct VcsRunner {
    patterns: Vec<String>,
    require_repository: bool,
}

impl VcsRunner {
    /// Full check: a missing repository stops the runner before the ignore file.
    #[must_use]
    pub const fn repository(patterns: Vec<String>) -> Self {
        Self {
            patterns,
            require_repository: true,
        }
    }

    #[must_use]
    pub const fn ignore_file_only(patterns: Vec<String>) -> Self {
        Self {
            patterns,
            require_repository: false,
        }
    }
}

impl CheckRunner for VcsRunner {
    fn name(&self) -> &'static str {
        "vcs"
    }

    fn run(&self, ctx: &CheckContext<'_>) -> Findings {
        let mut findings = Findings::new();

        if self.require_repository {
            if !ctx.root.join(GIT_DIR).is_dir() {
                findings.push(Finding::fail("Not a git repository").with_hint("Run `git init`"));
                return findings;
            }
            findings.push(Finding::pass("Git repository initialized"));
        }

        let ignore_path = ctx.root.join(IGNORE_FILE);
        if !ignore_path.is_file() {
            findings.push(Finding::fail(format!("{IGNORE_FILE} file missing")));
            return findings;
        }
        findings.push(Finding::pass(format!("{IGNORE_FILE} file present")));

        let content = match fs::read_to_string(&ignore_path) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!(path = %ignore_path.display(), error = %e, "failed to read ignore file");
                findings.push(Finding::fail(format!("Error reading {IGNORE_FILE}: {e}")));
                return findings;
            }
        };

        for pattern in &self.patterns {
            findings.push(if ignores_pattern(&content, pattern) {
                Finding::pass(format!("{IGNORE_FILE} ignores {pattern}"))
            } else {
                Finding::fail(format!("{IGNORE_FILE} missing pattern: {pattern}"))
                    .with_hint(format!("Add '{pattern}' to {IGNORE_FILE}"))
            });
        }
        findings
    }
}

/// Line-based match; leading and trailing slashes are not significant.
fn ignores_pattern(content: &str, pattern: &str) -> bool {
    let wanted = normalize(pattern);
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .any(|line| normalize(line) == wanted)
}

fn normalize(pattern: &str) -> &str {
    pattern.trim().trim_start_matches('/').trim_end_matches('/')
}

#[cfg(test)]
#[path = "vcs_tests.rs"]
mod tests;
