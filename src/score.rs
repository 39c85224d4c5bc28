use std::fmt;

use serde::Serialize;

use crate::checker::Findings;

/// Structure percentage required by the quality gate.
pub const QUALITY_GATE: f64 = 75.0;

/// uv compliance percentage required for the compliance flag.
pub const COMPLIANCE_THRESHOLD: f64 = 90.0;

/// Counts derived from one run's findings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Score {
    pub score: usize,
    pub total: usize,
    /// `100 * score / total`, or 0 when nothing was checked.
    pub percentage: f64,
}

impl Score {
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn from_counts(passed: usize, failed: usize) -> Self {
        let total = passed + failed;
        let percentage = if total == 0 {
            0.0
        } else {
            passed as f64 / total as f64 * 100.0
        };
        Self {
            score: passed,
            total,
            percentage,
        }
    }

    #[must_use]
    pub const fn failed(&self) -> usize {
        self.total - self.score
    }
}

impl From<&Findings> for Score {
    fn from(findings: &Findings) -> Self {
        Self::from_counts(findings.passed().len(), findings.failed().len())
    }
}

/// Structure audit tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum QualityTier {
    Excellent,
    Good,
    Acceptable,
    #[serde(rename = "Needs Improvement")]
    NeedsImprovement,
    Poor,
}

impl QualityTier {
    #[must_use]
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 90.0 {
            Self::Excellent
        } else if percentage >= QUALITY_GATE {
            Self::Good
        } else if percentage >= 60.0 {
            Self::Acceptable
        } else if percentage >= 40.0 {
            Self::NeedsImprovement
        } else {
            Self::Poor
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Acceptable => "Acceptable",
            Self::NeedsImprovement => "Needs Improvement",
            Self::Poor => "Poor",
        }
    }
}

impl fmt::Display for QualityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// uv compliance tier. Independent of the compliance flag's cutoff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ComplianceTier {
    #[serde(rename = "Fully UV-Compliant")]
    Fully,
    #[serde(rename = "Mostly UV-Compliant")]
    Mostly,
    #[serde(rename = "Partially UV-Compliant")]
    Partially,
    #[serde(rename = "Non-UV-Compliant")]
    NonCompliant,
}

impl ComplianceTier {
    #[must_use]
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 95.0 {
            Self::Fully
        } else if percentage >= 80.0 {
            Self::Mostly
        } else if percentage >= 60.0 {
            Self::Partially
        } else {
            Self::NonCompliant
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fully => "Fully UV-Compliant",
            Self::Mostly => "Mostly UV-Compliant",
            Self::Partially => "Partially UV-Compliant",
            Self::NonCompliant => "Non-UV-Compliant",
        }
    }
}

impl fmt::Display for ComplianceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
#[path = "score_tests.rs"]
mod tests;
