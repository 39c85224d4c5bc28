use crate::error::Result;
use crate::report::{AuditReport, UvComplianceResult};

use super::OutputFormatter;

/// Pretty-printed JSON of the report model.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_audit(&self, report: &AuditReport) -> Result<String> {
        Ok(serde_json::to_string_pretty(report)?)
    }

    fn format_compliance(&self, result: &UvComplianceResult) -> Result<String> {
        Ok(serde_json::to_string_pretty(result)?)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
