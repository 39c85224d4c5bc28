use std::io::{self, Read};
use std::process::{Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use super::{CheckContext, CheckRunner, Finding, Findings};

pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(5);

const POLL_INTERVAL: Duration = Duration::from_millis(25);

/// Result of asking an external tool for its version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolStatus {
    Available { version: String },
    /// Ran but exited unsuccessfully. `None` when killed by a signal.
    Failed { code: Option<i32> },
    TimedOut { after: Duration },
    /// Not installed, or not executable.
    Missing,
}

pub trait ToolProbe {
    /// Name shown in findings, e.g. `uv`.
    fn tool(&self) -> &str;

    fn probe(&self) -> ToolStatus;
}

/// Runs `<program> --version` with a deadline.
#[derive(Debug, Clone)]
pub struct CommandProbe {
    program: String,
    args: Vec<String>,
    timeout: Duration,
}

impl CommandProbe {
    #[must_use]
    pub fn new(program: impl Into<String>, args: &[&str]) -> Self {
        Self {
            program: program.into(),
            args: args.iter().map(ToString::to_string).collect(),
            timeout: DEFAULT_PROBE_TIMEOUT,
        }
    }

    #[must_use]
    pub fn uv() -> Self {
        Self::new("uv", &["--version"])
    }

    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn execute(&self) -> io::Result<ToolStatus> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()?;

        let deadline = Instant::now() + self.timeout;
        let status = loop {
            if let Some(status) = child.try_wait()? {
                break status;
            }
            let now = Instant::now();
            if now >= deadline {
                // Best effort: the child may exit between try_wait and kill.
                let _ = child.kill();
                let _ = child.wait();
                return Ok(ToolStatus::TimedOut {
                    after: self.timeout,
                });
            }
            thread::sleep(POLL_INTERVAL.min(deadline - now));
        };

        if !status.success() {
            return Ok(ToolStatus::Failed {
                code: status.code(),
            });
        }

        // Unreadable output after a clean exit is a failure.
        let mut stdout = String::new();
        if let Some(mut pipe) = child.stdout.take()
            && let Err(e) = pipe.read_to_string(&mut stdout)
        {
            tracing::debug!(program = %self.program, error = %e, "unreadable version output");
            return Ok(ToolStatus::Failed {
                code: status.code(),
            });
        }
        Ok(ToolStatus::Available {
            version: stdout.trim().to_string(),
        })
    }
}

impl ToolProbe for CommandProbe {
    fn tool(&self) -> &str {
        &self.program
    }

    fn probe(&self) -> ToolStatus {
        match self.execute() {
            Ok(status) => status,
            Err(e) => {
                tracing::debug!(program = %self.program, error = %e, "tool probe failed");
                ToolStatus::Missing
            }
        }
    }
}

/// Reports whether the package manager is installed.
pub struct ToolRunner<'a> {
    probe: &'a dyn ToolProbe,
}

impl<'a> ToolRunner<'a> {
    #[must_use]
    pub const fn new(probe: &'a dyn ToolProbe) -> Self {
        Self { probe }
    }
}

impl CheckRunner for ToolRunner<'_> {
    fn name(&self) -> &'static str {
        "tool"
    }

    fn run(&self, _ctx: &CheckContext<'_>) -> Findings {
        let tool = self.probe.tool();
        let status = self.probe.probe();
        match &status {
            ToolStatus::TimedOut { after } => {
                tracing::warn!(tool, timeout_secs = after.as_secs(), "version probe timed out");
            }
            other => tracing::debug!(tool, status = ?other, "version probe finished"),
        }

        let finding = match status {
            ToolStatus::Available { version } => Finding::pass(format!("{tool} installed: {version}")),
            ToolStatus::Failed { code: Some(code) } => {
                Finding::fail(format!("{tool} --version exited with code {code}"))
            }
            ToolStatus::Failed { code: None } => {
                Finding::fail(format!("{tool} --version was terminated"))
            }
            ToolStatus::TimedOut { after } => Finding::fail(format!(
                "{tool} --version timed out after {}s",
                after.as_secs_f64()
            )),
            ToolStatus::Missing => Finding::fail(format!("{tool} not installed or not in PATH"))
                .with_hint("Install uv: https://docs.astral.sh/uv/"),
        };
        std::iter::once(finding).collect()
    }
}

#[cfg(test)]
#[path = "tool_tests.rs"]
mod tests;
