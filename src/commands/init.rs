use std::fs;
use std::path::PathBuf;

use crate::cli::InitArgs;
use crate::rules::BUNDLED_STANDARDS;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, ProjectAuditError, Result};

#[must_use]
pub fn run_init(args: &InitArgs, quiet: bool) -> i32 {
    match run_init_impl(args) {
        Ok(written) => {
            if !quiet {
                for path in written {
                    println!("Created standards file: {}", path.display());
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

/// Writes the bundled standards documents into `args.output`.
///
/// Nothing is written when any target exists and `--force` is absent.
///
/// # Errors
/// Returns an error if a document already exists (without --force) or cannot be written.
pub fn run_init_impl(args: &InitArgs) -> Result<Vec<PathBuf>> {
    let targets: Vec<(PathBuf, &str)> = BUNDLED_STANDARDS
        .iter()
        .map(|(name, content)| (args.output.join(name), *content))
        .collect();

    if !args.force
        && let Some((existing, _)) = targets.iter().find(|(path, _)| path.exists())
    {
        return Err(ProjectAuditError::Config(format!(
            "Standards file already exists: {}. Use --force to overwrite.",
            existing.display()
        )));
    }

    fs::create_dir_all(&args.output)?;
    for (path, content) in &targets {
        fs::write(path, content)?;
        tracing::debug!(path = %path.display(), "wrote standards document");
    }

    Ok(targets.into_iter().map(|(path, _)| path).collect())
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
