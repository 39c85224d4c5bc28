use crate::audit::Auditor;
use crate::cli::{AuditArgs, Cli};
use crate::{EXIT_AUDIT_FAILED, EXIT_CONFIG_ERROR, EXIT_SUCCESS, ProjectAuditError, Result};

use super::context::{color_choice_to_mode, load_rules, write_output};

#[must_use]
pub fn run_audit(args: &AuditArgs, cli: &Cli) -> i32 {
    exit_code(run_audit_impl(args, cli))
}

#[must_use]
pub fn run_uv(args: &AuditArgs, cli: &Cli) -> i32 {
    exit_code(run_uv_impl(args, cli))
}

fn exit_code(result: Result<i32>) -> i32 {
    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

fn prepare(cli: &Cli) -> Result<Auditor> {
    let rules = load_rules(cli.standards.as_deref())?;
    Ok(Auditor::new(rules))
}

/// Run the structure audit (plus uv compliance for Python-workflow projects).
///
/// A missing project path is still rendered as an error-tagged report before
/// the `NotFound` error is returned.
///
/// # Errors
/// Returns an error if the project path does not exist, the standards cannot
/// be loaded, or the report cannot be written.
pub fn run_audit_impl(args: &AuditArgs, cli: &Cli) -> Result<i32> {
    let auditor = prepare(cli)?;
    let report = auditor.audit_full(&args.path);

    let formatter = args.format.formatter(color_choice_to_mode(cli.color));
    let output = formatter.format_audit(&report)?;
    write_output(args.output.as_deref(), &output, cli.quiet)?;

    if report.structure.is_error() {
        return Err(ProjectAuditError::NotFound(args.path.clone()));
    }
    Ok(if report.quality_gate_passed {
        EXIT_SUCCESS
    } else {
        EXIT_AUDIT_FAILED
    })
}

/// Run the uv compliance audit only.
///
/// # Errors
/// Returns an error if the project path does not exist, the standards cannot
/// be loaded, or the report cannot be written.
pub fn run_uv_impl(args: &AuditArgs, cli: &Cli) -> Result<i32> {
    let auditor = prepare(cli)?;
    let result = auditor.validate_manifest_compliance(&args.path);

    let formatter = args.format.formatter(color_choice_to_mode(cli.color));
    let output = formatter.format_compliance(&result)?;
    write_output(args.output.as_deref(), &output, cli.quiet)?;

    if result.is_not_found() {
        return Err(ProjectAuditError::NotFound(args.path.clone()));
    }
    Ok(if result.uv_compliant {
        EXIT_SUCCESS
    } else {
        EXIT_AUDIT_FAILED
    })
}

#[cfg(test)]
#[path = "audit_tests.rs"]
mod tests;
