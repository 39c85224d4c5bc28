mod json;
mod text;

pub use json::JsonFormatter;
pub use text::{ColorMode, TextFormatter};

use crate::error::Result;
use crate::report::{AuditReport, UvComplianceResult};

/// Trait for rendering audit results.
pub trait OutputFormatter {
    /// Render a structure audit and its optional uv compliance result.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format_audit(&self, report: &AuditReport) -> Result<String>;

    /// Render a standalone uv compliance result.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format_compliance(&self, result: &UvComplianceResult) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    #[must_use]
    pub fn formatter(self, color: ColorMode) -> Box<dyn OutputFormatter> {
        match self {
            Self::Text => Box::new(TextFormatter::new(color)),
            Self::Json => Box::new(JsonFormatter),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
