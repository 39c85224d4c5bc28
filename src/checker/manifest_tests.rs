use std::fs;

use tempfile::TempDir;

use super::*;
use crate::project::ProjectType;

const COMPLETE: &str = r#"
[project]
name = "demo"
version = "0.1.0"
description = "Demo project"
dependencies = ["httpx>=0.27"]

[build-system]
requires = ["hatchling"]
build-backend = "hatchling.build"
"#;

fn run(manifest: Option<&str>) -> Findings {
    let dir = TempDir::new().unwrap();
    if let Some(content) = manifest {
        fs::write(dir.path().join("pyproject.toml"), content).unwrap();
    }
    let requirements = ManifestRequirements::default();
    ManifestRunner::new(&requirements).run(&CheckContext::new(dir.path(), ProjectType::Python))
}

fn failed(findings: &Findings) -> Vec<&str> {
    findings.failed().iter().map(|f| f.description.as_str()).collect()
}

#[test]
fn complete_manifest_passes() {
    let findings = run(Some(COMPLETE));

    assert!(findings.failed().is_empty(), "{:?}", failed(&findings));
    // section + 3 fields + dependencies + build-system
    assert_eq!(findings.passed().len(), 6);
}

#[test]
fn missing_manifest_is_single_failure() {
    let findings = run(None);

    assert_eq!(findings.len(), 1);
    assert_eq!(failed(&findings), vec!["pyproject.toml missing"]);
}

#[test]
fn unparsable_manifest_is_single_failure() {
    let findings = run(Some("[project\nname = "));

    assert_eq!(findings.len(), 1);
    assert!(findings.failed()[0].description.starts_with("Error parsing pyproject.toml"));
}

#[test]
fn missing_field_fails() {
    let findings = run(Some(&COMPLETE.replace("version = \"0.1.0\"\n", "")));

    assert_eq!(failed(&findings), vec!["project.version missing"]);
}

#[test]
fn missing_dependencies_has_hint() {
    let findings = run(Some(&COMPLETE.replace("dependencies = [\"httpx>=0.27\"]\n", "")));

    let finding = &findings.failed()[0];
    assert_eq!(finding.description, "project.dependencies missing");
    assert_eq!(finding.hint.as_deref(), Some("Declare dependencies in pyproject.toml"));
}

#[test]
fn missing_project_section_fails_every_field() {
    let findings = run(Some("[build-system]\nrequires = []\n"));

    assert_eq!(
        failed(&findings),
        vec![
            "[project] section missing from pyproject.toml",
            "project.name missing",
            "project.version missing",
            "project.description missing",
            "project.dependencies missing",
        ]
    );
    assert_eq!(findings.passed().len(), 1);
}

#[test]
fn missing_build_system_fails() {
    let content = COMPLETE.split("[build-system]").next().unwrap();
    let findings = run(Some(content));

    assert_eq!(failed(&findings), vec!["[build-system] section missing"]);
}

#[test]
fn project_key_that_is_not_a_table_counts_as_missing() {
    let findings = run(Some("project = \"demo\"\n[build-system]\n"));

    assert_eq!(findings.failed().len(), 5);
}
