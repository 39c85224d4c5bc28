#![allow(dead_code)]

use std::fs;
use std::path::Path;

use project_audit::rules::BUNDLED_STANDARDS;
use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the project-audit binary.
#[macro_export]
macro_rules! project_audit {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("project-audit"))
    };
}

/// Agent instructions that satisfy every documentation check.
pub const UV_AGENTS_MD: &str = "# Agent Guide

## Workflow

UV-ONLY: this project is managed with uv. It is MANDATORY to add packages
with `uv add` or `uv pip install`, and to run every tool through `uv run`.

## Testing

Run the suite with `uv run pytest` from the repository root.
";

/// PEP 621 manifest with every required field and a build backend.
pub const COMPLETE_PYPROJECT: &str = r#"[project]
name = "demo"
version = "0.1.0"
description = "Demo project"
dependencies = ["httpx>=0.27"]

[build-system]
requires = ["hatchling"]
build-backend = "hatchling.build"
"#;

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Creates a directory in the temp directory.
    pub fn create_dir(&self, relative_path: &str) {
        let path = self.dir.path().join(relative_path);
        fs::create_dir_all(&path).expect("Failed to create directory");
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Writes the bundled standards into `./standards`.
    pub fn with_standards(self) -> Self {
        for (name, content) in BUNDLED_STANDARDS {
            self.create_file(&format!("standards/{name}"), content);
        }
        self
    }

    /// A uv-managed Python project that passes every bundled rule.
    pub fn compliant_python_project() -> Self {
        let fixture = Self::new().with_standards();
        fixture.create_dir(".git");
        fixture.create_dir("src/demo");
        fixture.create_dir("tests");
        fixture.create_file("README.md", "# Demo\n");
        fixture.create_file("AGENTS.md", UV_AGENTS_MD);
        fixture.create_file(".gitignore", ".venv/\n__pycache__/\n*.egg-info/\n");
        fixture.create_file("pyproject.toml", COMPLETE_PYPROJECT);
        fixture.create_file("uv.lock", "version = 1\n");
        fixture
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
