use serde::Serialize;

/// Outcome of a single check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FindingStatus {
    Passed,
    Failed,
}

/// One check outcome. Never mutated once pushed into `Findings`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub status: FindingStatus,
    pub description: String,
    /// Remediation text ("use instead").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl Finding {
    #[must_use]
    pub fn pass(description: impl Into<String>) -> Self {
        Self {
            status: FindingStatus::Passed,
            description: description.into(),
            hint: None,
        }
    }

    #[must_use]
    pub fn fail(description: impl Into<String>) -> Self {
        Self {
            status: FindingStatus::Failed,
            description: description.into(),
            hint: None,
        }
    }

    #[must_use]
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    #[must_use]
    pub const fn is_passed(&self) -> bool {
        matches!(self.status, FindingStatus::Passed)
    }

    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self.status, FindingStatus::Failed)
    }
}

/// Append-only collection of findings, split by outcome in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Findings {
    passed: Vec<Finding>,
    failed: Vec<Finding>,
}

impl Findings {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, finding: Finding) {
        match finding.status {
            FindingStatus::Passed => self.passed.push(finding),
            FindingStatus::Failed => self.failed.push(finding),
        }
    }

    /// Append another batch, keeping its internal order after ours.
    pub fn extend(&mut self, other: Self) {
        self.passed.extend(other.passed);
        self.failed.extend(other.failed);
    }

    #[must_use]
    pub fn passed(&self) -> &[Finding] {
        &self.passed
    }

    #[must_use]
    pub fn failed(&self) -> &[Finding] {
        &self.failed
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.passed.len() + self.failed.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn into_parts(self) -> (Vec<Finding>, Vec<Finding>) {
        (self.passed, self.failed)
    }
}

impl FromIterator<Finding> for Findings {
    fn from_iter<I: IntoIterator<Item = Finding>>(iter: I) -> Self {
        let mut findings = Self::new();
        for finding in iter {
            findings.push(finding);
        }
        findings
    }
}

#[cfg(test)]
#[path = "finding_tests.rs"]
mod tests;
