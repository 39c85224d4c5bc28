use std::fs;
use std::path::Path;

use crate::cli::ColorChoice;
use crate::output::ColorMode;
use crate::rules::{FileRuleLoader, RuleLoader, RuleSet};

#[must_use]
pub const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

/// Load standards from `standards` when given, otherwise by discovery.
///
/// # Errors
/// Returns a configuration error if no standards directory is found or a
/// document is missing or malformed.
pub fn load_rules(standards: Option<&Path>) -> crate::Result<RuleSet> {
    let loader = FileRuleLoader::new();
    match standards {
        Some(dir) => loader.load_from_dir(dir),
        None => loader.load(),
    }
}

/// Write output to a file or stdout.
///
/// When `output_path` is `Some`, the content is written to the file (creating parent
/// directories if needed). The `quiet` flag only affects stdout output.
///
/// # Errors
/// Returns an error if the file or its parent directories cannot be written.
pub fn write_output(output_path: Option<&Path>, content: &str, quiet: bool) -> crate::Result<()> {
    if let Some(path) = output_path {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
    } else if !quiet {
        print!("{content}");
    }
    Ok(())
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
