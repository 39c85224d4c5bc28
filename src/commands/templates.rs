use std::fs;
use std::path::Path;

use crate::cli::TemplatesArgs;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, ProjectAuditError, Result};

#[must_use]
pub fn run_templates(args: &TemplatesArgs, quiet: bool) -> i32 {
    match list_templates(&args.dir) {
        Ok(names) => {
            if !quiet {
                if names.is_empty() {
                    println!("No templates found in {}", args.dir.display());
                } else {
                    println!("Available templates:");
                    for name in names {
                        println!("  - {name}");
                    }
                }
            }
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// Names of the subdirectories of `dir`, sorted.
///
/// # Errors
/// Returns `Config` if `dir` is not a directory, or an IO error if it cannot be listed.
pub fn list_templates(dir: &Path) -> Result<Vec<String>> {
    if !dir.is_dir() {
        return Err(ProjectAuditError::Config(format!(
            "Templates directory not found: {}",
            dir.display()
        )));
    }

    let mut names = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    names.sort();
    Ok(names)
}

#[cfg(test)]
#[path = "templates_tests.rs"]
mod tests;
