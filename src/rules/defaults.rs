use std::path::Path;

use crate::error::Result;

use super::loader::{STRUCTURE_STANDARDS_FILE, UV_STANDARDS_FILE, parse_document};
use super::model::RuleSet;

/// Structure standards shipped with the binary.
pub const DEFAULT_STRUCTURE_STANDARDS: &str =
    include_str!("../../standards/project-structure.yaml");

/// uv-first requirements shipped with the binary.
pub const DEFAULT_UV_STANDARDS: &str = include_str!("../../standards/python-uv-requirements.yaml");

/// Bundled documents as `(file name, content)` pairs, in write order.
pub const BUNDLED_STANDARDS: &[(&str, &str)] = &[
    (STRUCTURE_STANDARDS_FILE, DEFAULT_STRUCTURE_STANDARDS),
    (UV_STANDARDS_FILE, DEFAULT_UV_STANDARDS),
];

/// Parse the bundled standards into a validated rule set.
///
/// # Errors
/// Returns a configuration error if the bundled documents are malformed.
pub fn bundled_rule_set() -> Result<RuleSet> {
    let rules = RuleSet {
        structure: parse_document(
            Path::new(STRUCTURE_STANDARDS_FILE),
            DEFAULT_STRUCTURE_STANDARDS,
        )?,
        python: parse_document(Path::new(UV_STANDARDS_FILE), DEFAULT_UV_STANDARDS)?,
    };
    rules.validate()?;
    Ok(rules)
}
