use std::fs;

use super::{CheckContext, CheckRunner, Finding, Findings};

pub const AGENTS_FILE: &str = "AGENTS.md";

/// Trimmed documents shorter than this are treated as stubs.
pub const MIN_CONTENT_CHARS: usize = 100;

const PLACEHOLDER_MARKERS: &[&str] = &["TODO", "PLACEHOLDER"];

pub const WORKFLOW_INDICATORS: &[&str] =
    &["UV-ONLY", "uv pip install", "uv run", "MANDATORY", "UV-First"];

pub const MIN_WORKFLOW_INDICATORS: usize = 3;

/// Commands that must only appear behind `uv run` (or as `uv <cmd>`).
pub const FORBIDDEN_COMMANDS: &[&str] = &[
    "pip install",
    "python -m pip",
    "python script.py",
    "pytest",
    "python -m venv",
];

/// Bytes before an occurrence searched for `uv run`.
pub const LOOKBEHIND_WINDOW: usize = 20;

const RUN_PREFIX: &str = "uv run";
const DIRECT_PREFIX: &str = "uv ";

/// Validates the agent instruction document.
///
/// The structural phase checks headings and content; the workflow phase
/// checks the uv-first instructions. Audits of non-Python projects run the
/// structural phase only.
#[derive(Debug, Clone, Copy)]
pub struct DocsRunner {
    structure: bool,
    workflow: bool,
}

impl DocsRunner {
    #[must_use]
    pub const fn structure_only() -> Self {
        Self {
            structure: true,
            workflow: false,
        }
    }

    #[must_use]
    pub const fn workflow_only() -> Self {
        Self {
            structure: false,
            workflow: true,
        }
    }

    #[must_use]
    pub const fn full() -> Self {
        Self {
            structure: true,
            workflow: true,
        }
    }
}

impl CheckRunner for DocsRunner {
    fn name(&self) -> &'static str {
        "docs"
    }

    fn run(&self, ctx: &CheckContext<'_>) -> Findings {
        let mut findings = Findings::new();
        let path = ctx.root.join(AGENTS_FILE);

        if !path.is_file() {
            findings.push(
                Finding::fail(format!("{AGENTS_FILE} file missing"))
                    .with_hint("Add agent instructions describing the project workflow"),
            );
            return findings;
        }

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to read agent document");
                findings.push(Finding::fail(format!("Error reading {AGENTS_FILE}: {e}")));
                return findings;
            }
        };

        if self.structure {
            findings.extend(check_structure(&content));
        }
        if self.workflow {
            findings.extend(check_workflow(&content));
        }
        findings
    }
}

fn check_structure(content: &str) -> Findings {
    let mut findings = Findings::new();

    let has_title = content.lines().any(|line| line.starts_with("# "));
    let has_section = content.lines().any(|line| line.starts_with("## "));
    findings.push(if has_title && has_section {
        Finding::pass(format!("{AGENTS_FILE} has title and sections"))
    } else {
        Finding::fail(format!("{AGENTS_FILE} lacks markdown structure"))
            .with_hint("Start with a '# ' title and organize content under '## ' sections")
    });

    findings.push(if content.trim().chars().count() < MIN_CONTENT_CHARS {
        Finding::fail(format!("{AGENTS_FILE} appears empty or placeholder"))
    } else if contains_placeholder(content) {
        Finding::fail(format!("{AGENTS_FILE} contains TODO/placeholder content"))
    } else {
        Finding::pass(format!("{AGENTS_FILE} has meaningful content"))
    });

    findings
}

fn contains_placeholder(content: &str) -> bool {
    let upper = content.to_uppercase();
    PLACEHOLDER_MARKERS.iter().any(|marker| upper.contains(marker))
}

fn check_workflow(content: &str) -> Findings {
    let mut findings = Findings::new();

    let found: Vec<&str> = WORKFLOW_INDICATORS
        .iter()
        .copied()
        .filter(|indicator| content.contains(indicator))
        .collect();
    findings.push(if found.len() >= MIN_WORKFLOW_INDICATORS {
        Finding::pass(format!("{AGENTS_FILE} documents uv-first workflow"))
    } else {
        Finding::fail(format!("{AGENTS_FILE} missing uv-first workflow section")).with_hint(
            format!(
                "Found {} of {MIN_WORKFLOW_INDICATORS} required markers ({}); document UV-ONLY, uv pip install and uv run usage",
                found.len(),
                found.join(", ")
            ),
        )
    });

    for pattern in FORBIDDEN_COMMANDS {
        findings.push(if has_bare_occurrence(content, pattern) {
            Finding::fail(format!("{AGENTS_FILE} uses bare `{pattern}`"))
                .with_hint(format!("Use `uv run` or the uv equivalent of `{pattern}`"))
        } else {
            Finding::pass(format!("{AGENTS_FILE} avoids bare `{pattern}`"))
        });
    }

    findings
}

/// True when some occurrence of `pattern` is not preceded by a uv invocation.
fn has_bare_occurrence(content: &str, pattern: &str) -> bool {
    content
        .match_indices(pattern)
        .any(|(offset, _)| !is_uv_prefixed(content, offset))
}

fn is_uv_prefixed(content: &str, offset: usize) -> bool {
    let mut start = offset.saturating_sub(LOOKBEHIND_WINDOW);
    while !content.is_char_boundary(start) {
        start += 1;
    }
    let window = &content[start..offset];
    window.contains(RUN_PREFIX) || window.ends_with(DIRECT_PREFIX)
}

#[cfg(test)]
#[path = "docs_tests.rs"]
mod tests;
