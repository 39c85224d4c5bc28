use std::fs;

use tempfile::TempDir;

use super::*;
use crate::project::ProjectType;

const UV_GUIDE: &str = "# Agent Guide

## Workflow

UV-ONLY: this project is managed with uv. It is MANDATORY to add packages
with `uv add` or `uv pip install`, and to run every tool through `uv run`.

## Testing

Run the suite with `uv run pytest` from the repository root.
";

fn run(runner: DocsRunner, content: Option<&str>) -> Findings {
    let dir = TempDir::new().unwrap();
    if let Some(content) = content {
        fs::write(dir.path().join(AGENTS_FILE), content).unwrap();
    }
    runner.run(&CheckContext::new(dir.path(), ProjectType::Python))
}

fn failed_descriptions(findings: &Findings) -> Vec<&str> {
    findings.failed().iter().map(|f| f.description.as_str()).collect()
}

#[test]
fn missing_document_is_single_failure_in_every_mode() {
    for runner in [DocsRunner::structure_only(), DocsRunner::workflow_only(), DocsRunner::full()] {
        let findings = run(runner, None);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings.failed()[0].description, "AGENTS.md file missing");
    }
}

#[test]
fn well_formed_guide_passes_everything() {
    let findings = run(DocsRunner::full(), Some(UV_GUIDE));

    assert!(findings.failed().is_empty(), "{:?}", failed_descriptions(&findings));
    // 2 structural + 1 indicator + one per forbidden command
    assert_eq!(findings.len(), 3 + FORBIDDEN_COMMANDS.len());
}

#[test]
fn structure_phase_only_emits_two_findings() {
    let findings = run(DocsRunner::structure_only(), Some(UV_GUIDE));
    assert_eq!(findings.len(), 2);
}

#[test]
fn missing_headings_fail() {
    let body = "Plain text without any markdown headings at all. ".repeat(4);
    let findings = run(DocsRunner::structure_only(), Some(&body));

    assert_eq!(failed_descriptions(&findings), vec!["AGENTS.md lacks markdown structure"]);
}

#[test]
fn short_document_is_placeholder() {
    let findings = run(DocsRunner::structure_only(), Some("# Title\n## Section\nshort\n"));

    assert!(failed_descriptions(&findings).contains(&"AGENTS.md appears empty or placeholder"));
}

#[test]
fn placeholder_marker_is_case_insensitive() {
    let body = format!("{UV_GUIDE}\nTodo: describe deployment.\n");
    let findings = run(DocsRunner::structure_only(), Some(&body));

    assert_eq!(
        failed_descriptions(&findings),
        vec!["AGENTS.md contains TODO/placeholder content"]
    );
}

#[test]
fn too_few_indicators_fail_with_found_list() {
    let body = "# Guide\n## Setup\nUse uv run for everything. This text is long enough to count as real content for the checker.\n";
    let findings = run(DocsRunner::workflow_only(), Some(body));

    let failed = &findings.failed()[0];
    assert_eq!(failed.description, "AGENTS.md missing uv-first workflow section");
    assert!(failed.hint.as_deref().unwrap().contains("uv run"));
}

#[test]
fn bare_pytest_is_flagged_once() {
    let body = format!("{UV_GUIDE}\nAlternatively call pytest directly, or pytest -x.\n");
    let findings = run(DocsRunner::workflow_only(), Some(&body));

    assert_eq!(failed_descriptions(&findings), vec!["AGENTS.md uses bare `pytest`"]);
}

#[test]
fn direct_uv_prefix_is_allowed() {
    let body = format!("{UV_GUIDE}\nYou may also `uv pip install -e .`\n");
    let findings = run(DocsRunner::workflow_only(), Some(&body));

    assert!(findings.failed().is_empty());
}

#[test]
fn every_occurrence_is_examined() {
    // First occurrence is prefixed, the second is not.
    let body = format!("{UV_GUIDE}\nUse `uv run python -m venv .venv`\nNever run python -m venv by hand.\n");
    let findings = run(DocsRunner::workflow_only(), Some(&body));

    assert_eq!(failed_descriptions(&findings), vec!["AGENTS.md uses bare `python -m venv`"]);
}

#[test]
fn lookbehind_window_boundary() {
    let inside = format!("uv run{}pytest", " ".repeat(LOOKBEHIND_WINDOW - "uv run".len()));
    let outside = format!("uv run{}pytest", " ".repeat(LOOKBEHIND_WINDOW - "uv run".len() + 1));

    assert!(!has_bare_occurrence(&inside, "pytest"));
    assert!(has_bare_occurrence(&outside, "pytest"));
}

#[test]
fn lookbehind_handles_multibyte_text() {
    let content = "ünïcödé → ✓ uv run pytest";
    assert!(!has_bare_occurrence(content, "pytest"));
    assert!(has_bare_occurrence("✓✓✓✓✓✓✓✓ pytest", "pytest"));
}
