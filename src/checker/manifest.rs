use std::fs;

use toml::Table;

use crate::rules::ManifestRequirements;

use super::{CheckContext, CheckRunner, Finding, Findings};

/// Validates the Python project manifest (`pyproject.toml`).
pub struct ManifestRunner<'a> {
    requirements: &'a ManifestRequirements,
}

impl<'a> ManifestRunner<'a> {
    #[must_use]
    pub const fn new(requirements: &'a ManifestRequirements) -> Self {
        Self { requirements }
    }

    fn check_table(&self, table: &Table) -> Findings {
        let req = self.requirements;
        let section = req.section.as_str();
        let mut findings = Findings::new();

        match table.get(section).and_then(toml::Value::as_table) {
            Some(metadata) => {
                findings.push(Finding::pass(format!("[{section}] section present")));
                for field in &req.required_fields {
                    findings.push(field_finding(section, field, metadata.contains_key(field)));
                }
                findings.push(if metadata.contains_key(&req.dependencies_field) {
                    Finding::pass(format!("{section}.{} defined", req.dependencies_field))
                } else {
                    Finding::fail(format!("{section}.{} missing", req.dependencies_field))
                        .with_hint(format!("Declare dependencies in {}", req.file))
                });
            }
            None => {
                // Nothing under a missing section can be satisfied.
                findings.push(
                    Finding::fail(format!("[{section}] section missing from {}", req.file))
                        .with_hint("Run `uv init` or add PEP 621 metadata"),
                );
                for field in &req.required_fields {
                    findings.push(field_finding(section, field, false));
                }
                findings.push(Finding::fail(format!(
                    "{section}.{} missing",
                    req.dependencies_field
                )));
            }
        }

        for required in &req.required_sections {
            findings.push(if table.contains_key(required) {
                Finding::pass(format!("[{required}] section present"))
            } else {
                Finding::fail(format!("[{required}] section missing"))
            });
        }

        findings
    }
}

fn field_finding(section: &str, field: &str, present: bool) -> Finding {
    if present {
        Finding::pass(format!("{section}.{field} defined"))
    } else {
        Finding::fail(format!("{section}.{field} missing"))
    }
}

impl CheckRunner for ManifestRunner<'_> {
    fn name(&self) -> &'static str {
        "manifest"
    }

    fn run(&self, ctx: &CheckContext<'_>) -> Findings {
        let file = self.requirements.file.as_str();
        let path = ctx.root.join(file);

        if !path.is_file() {
            return std::iter::once(
                Finding::fail(format!("{file} missing")).with_hint("Run `uv init`"),
            )
            .collect();
        }

        let parsed = fs::read_to_string(&path)
            .map_err(|e| e.to_string())
            .and_then(|content| toml::from_str::<Table>(&content).map_err(|e| e.to_string()));

        match parsed {
            Ok(table) => self.check_table(&table),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to load manifest");
                std::iter::once(Finding::fail(format!("Error parsing {file}: {}", e.trim())))
                    .collect()
            }
        }
    }
}

#[cfg(test)]
#[path = "manifest_tests.rs"]
mod tests;
