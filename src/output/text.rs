use std::fmt::Write;

use crate::checker::Finding;
use crate::error::Result;
use crate::report::{AuditReport, AuditResult, UvComplianceResult};

use super::OutputFormatter;

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// ANSI color codes
mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const RESET: &str = "\x1b[0m";
}

pub struct TextFormatter {
    use_colors: bool,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                // Respect NO_COLOR environment variable
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    fn paint(&self, text: &str, color: &str) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        format!("{color}{text}{}", ansi::RESET)
    }

    fn format_findings(&self, output: &mut String, passed: &[Finding], failed: &[Finding]) {
        if !passed.is_empty() {
            writeln!(output, "\nPassed:").ok();
            for finding in passed {
                writeln!(output, "  {} {}", self.paint("✓", ansi::GREEN), finding.description)
                    .ok();
            }
        }
        if !failed.is_empty() {
            writeln!(output, "\nFailed:").ok();
            for finding in failed {
                writeln!(output, "  {} {}", self.paint("✗", ansi::RED), finding.description).ok();
                if let Some(hint) = &finding.hint {
                    writeln!(output, "     {}", self.paint(&format!("→ {hint}"), ansi::YELLOW))
                        .ok();
                }
            }
        }
    }

    fn format_structure(&self, output: &mut String, result: &AuditResult) {
        writeln!(
            output,
            "{} {}",
            self.paint("Project audit:", ansi::CYAN),
            result.project_path.display()
        )
        .ok();

        if let Some(error) = &result.error {
            writeln!(output, "{} {error}", self.paint("Error:", ansi::RED)).ok();
            return;
        }

        writeln!(output, "Project type: {}", result.project_type).ok();
        self.format_findings(output, &result.passed, &result.failed);
        writeln!(
            output,
            "\nScore: {}/{} ({:.1}%)",
            result.score, result.total, result.percentage
        )
        .ok();
        writeln!(output, "Quality: {}", result.quality_level).ok();
    }

    fn format_uv(&self, output: &mut String, result: &UvComplianceResult) {
        writeln!(
            output,
            "{} {}",
            self.paint("uv compliance:", ansi::CYAN),
            result.project_path.display()
        )
        .ok();

        if !result.applicable {
            writeln!(output, "Not applicable: not a Python project").ok();
            return;
        }
        if let Some(error) = &result.error {
            writeln!(output, "{} {error}", self.paint("Error:", ansi::RED)).ok();
            return;
        }

        self.format_findings(output, &result.passed, &result.failed);
        writeln!(
            output,
            "\nScore: {}/{} ({:.1}%)",
            result.score, result.total, result.percentage
        )
        .ok();
        if let Some(level) = result.compliance_level {
            writeln!(output, "Compliance: {level}").ok();
        }
        let verdict = if result.uv_compliant {
            self.paint("uv-compliant", ansi::GREEN)
        } else {
            self.paint("not uv-compliant", ansi::RED)
        };
        writeln!(output, "Status: {verdict}").ok();
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}

impl OutputFormatter for TextFormatter {
    fn format_audit(&self, report: &AuditReport) -> Result<String> {
        let mut output = String::new();
        self.format_structure(&mut output, &report.structure);

        if let Some(uv) = &report.uv_compliance {
            writeln!(output).ok();
            self.format_uv(&mut output, uv);
        }

        writeln!(output).ok();
        if report.quality_gate_passed {
            writeln!(output, "{}", self.paint("✓ Quality gate passed", ansi::GREEN)).ok();
        } else {
            writeln!(output, "{}", self.paint("✗ Quality gate failed", ansi::RED)).ok();
            let structure_ok = report.structure.meets_quality_gate();
            if structure_ok && report.uv_compliance.as_ref().is_some_and(|c| !c.uv_compliant) {
                writeln!(output, "  Python projects must be uv-compliant").ok();
            }
        }
        Ok(output)
    }

    fn format_compliance(&self, result: &UvComplianceResult) -> Result<String> {
        let mut output = String::new();
        self.format_uv(&mut output, result);
        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
