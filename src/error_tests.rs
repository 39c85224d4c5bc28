use std::path::PathBuf;

use super::*;

#[test]
fn error_display_config() {
    let err = ProjectAuditError::Config("absolute path in required_files".to_string());
    assert_eq!(
        err.to_string(),
        "Configuration error: absolute path in required_files"
    );
}

#[test]
fn error_display_standards_not_found() {
    let err = ProjectAuditError::StandardsNotFound {
        path: PathBuf::from("standards/project-structure.yaml"),
    };
    assert_eq!(
        err.to_string(),
        "Standards file not found: standards/project-structure.yaml"
    );
}

#[test]
fn error_display_not_found() {
    let err = ProjectAuditError::NotFound(PathBuf::from("/nope"));
    assert_eq!(err.to_string(), "Project path does not exist: /nope");
}

#[test]
fn error_display_file_read() {
    let err = ProjectAuditError::FileRead {
        path: PathBuf::from("AGENTS.md"),
        source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
    };
    assert!(err.to_string().contains("AGENTS.md"));
}

#[test]
fn yaml_parse_error_keeps_source() {
    let source = serde_yaml::from_str::<Vec<String>>("key: [unclosed").unwrap_err();
    let err = ProjectAuditError::YamlParse {
        path: PathBuf::from("rules.yaml"),
        source,
    };
    assert!(std::error::Error::source(&err).is_some());
    assert!(err.to_string().contains("rules.yaml"));
}

#[test]
fn error_type_returns_correct_type() {
    assert_eq!(
        ProjectAuditError::Config("test".to_string()).error_type(),
        "Config"
    );
    assert_eq!(
        ProjectAuditError::StandardsNotFound {
            path: PathBuf::from("x.yaml")
        }
        .error_type(),
        "Config"
    );
    assert_eq!(
        ProjectAuditError::NotFound(PathBuf::from("x")).error_type(),
        "NotFound"
    );
    assert_eq!(
        ProjectAuditError::Io(std::io::Error::other("test")).error_type(),
        "IO"
    );
}

#[test]
fn configuration_errors_are_classified() {
    assert!(ProjectAuditError::Config("bad".into()).is_configuration_error());
    assert!(!ProjectAuditError::NotFound(PathBuf::from("x")).is_configuration_error());
    assert!(!ProjectAuditError::Io(std::io::Error::other("x")).is_configuration_error());
}
