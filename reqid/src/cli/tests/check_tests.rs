use crate::cli::check::{check_report, config_error_hint};
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::tempdir;

#[test]
fn check_lists_stages() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("reqid.hcl");
    fs::write(
        &path,
        r#"
method_restrict = ["GET"]
path_except     = ["/health"]
query = {
  enabled = true
}
named_stages = ["drop-tracking-query"]
"#,
    )
    .unwrap();

    // Act
    let lines = check_report(&path).unwrap();

    // Assert
    assert_eq!(
        lines,
        vec![
            "✔ Config loaded successfully",
            "✔ 4 stages",
            r#"  1. method_restrict ["GET"]"#,
            r#"  2. path_except ["/health"]"#,
            "  3. query enable",
            "  4. named drop-tracking-query",
        ]
    );
}

#[test]
fn check_rejects_unknown_named_stage_with_hint() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("reqid.hcl");
    fs::write(&path, r#"named_stages = ["gzip-only"]"#).unwrap();

    // Act
    let err = check_report(&path).unwrap_err();

    // Assert
    assert!(format!("{err:#}").contains("unknown named stage 'gzip-only'"));
    let hint = config_error_hint(&err).unwrap();
    assert!(hint.contains("normalize-accept-encoding"));
}

#[test]
fn check_rejects_invalid_hcl_without_hint() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("reqid.hcl");
    fs::write(&path, "method_restrict = [").unwrap();

    let err = check_report(&path).unwrap_err();

    assert!(err.to_string().starts_with("invalid configuration file"));
    assert!(config_error_hint(&err).is_none());
}
