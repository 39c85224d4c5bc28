use std::path::Path;
use std::time::Duration;

use super::*;
use crate::project::ProjectType;

struct FakeProbe(ToolStatus);

impl ToolProbe for FakeProbe {
    fn tool(&self) -> &str {
        "uv"
    }

    fn probe(&self) -> ToolStatus {
        self.0.clone()
    }
}

fn run(status: ToolStatus) -> Findings {
    let probe = FakeProbe(status);
    ToolRunner::new(&probe).run(&CheckContext::new(Path::new("."), ProjectType::Python))
}

#[test]
fn available_tool_passes_with_version() {
    let findings = run(ToolStatus::Available {
        version: "uv 0.5.1".to_string(),
    });

    assert_eq!(findings.passed()[0].description, "uv installed: uv 0.5.1");
}

#[test]
fn missing_tool_fails_with_install_hint() {
    let findings = run(ToolStatus::Missing);

    assert_eq!(findings.len(), 1);
    let finding = &findings.failed()[0];
    assert_eq!(finding.description, "uv not installed or not in PATH");
    assert!(finding.hint.as_deref().unwrap().contains("Install uv"));
}

#[test]
fn failed_and_timed_out_tools_fail() {
    assert!(run(ToolStatus::Failed { code: Some(2) }).failed()[0]
        .description
        .contains("exited with code 2"));
    assert!(run(ToolStatus::TimedOut {
        after: Duration::from_secs(5)
    })
    .failed()[0]
        .description
        .contains("timed out after 5s"));
}

#[test]
fn nonexistent_program_is_missing() {
    let probe = CommandProbe::new("project-audit-no-such-tool", &["--version"]);
    assert_eq!(probe.probe(), ToolStatus::Missing);
}

#[cfg(unix)]
#[test]
fn command_probe_reads_version() {
    let probe = CommandProbe::new("sh", &["-c", "echo 'uv 9.9.9'"]);
    assert_eq!(
        probe.probe(),
        ToolStatus::Available {
            version: "uv 9.9.9".to_string()
        }
    );
}

#[cfg(unix)]
#[test]
fn command_probe_reports_exit_code() {
    let probe = CommandProbe::new("sh", &["-c", "exit 3"]);
    assert_eq!(probe.probe(), ToolStatus::Failed { code: Some(3) });
}

#[cfg(unix)]
#[test]
fn unreadable_version_output_is_failure_not_missing() {
    let probe = CommandProbe::new("sh", &["-c", "printf '\\377\\376'"]);
    assert_eq!(probe.probe(), ToolStatus::Failed { code: Some(0) });
}

#[cfg(unix)]
#[test]
fn command_probe_times_out() {
    let timeout = Duration::from_millis(100);
    let probe = CommandProbe::new("sh", &["-c", "sleep 5"]).with_timeout(timeout);
    assert_eq!(probe.probe(), ToolStatus::TimedOut { after: timeout });
}
