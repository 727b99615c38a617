#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::io::Write;

use sclmx_core::{DegradedFetchPolicy, ScanConfig, SclmError};
use tempfile::NamedTempFile;

#[test]
fn test_load_full_config_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
project = "PAYROLL"
alternate = "PAYALT"
group = "DEV1"
types = ["COBOL", "COPYBOOK"]
job_card = "//SCLMJOB JOB (ACCT),'SCLM',CLASS=A"
degraded_fetch = "reconcile"
"#
    )
    .unwrap();

    let config = ScanConfig::load(file.path()).unwrap();
    assert_eq!(config.project, "PAYROLL");
    assert_eq!(config.types, vec!["COBOL", "COPYBOOK"]);
    assert_eq!(config.degraded_fetch, DegradedFetchPolicy::Reconcile);

    let location = config.location();
    assert_eq!(location.alternate, "PAYALT");
    assert_eq!(location.group, "DEV1");
}

#[test]
fn test_missing_required_field_is_invalid_config() {
    let err = ScanConfig::from_toml_str("project = \"P\"\ngroup = \"G\"\n").unwrap_err();
    assert!(matches!(err, SclmError::InvalidConfig { reason } if reason.contains("alternate")));
}

#[test]
fn test_unknown_key_is_invalid_config() {
    let err = ScanConfig::from_toml_str(
        "project = \"P\"\nalternate = \"A\"\ngroup = \"G\"\nlanguage = \"COBOL\"\n",
    )
    .unwrap_err();
    assert!(matches!(err, SclmError::InvalidConfig { .. }));
}

#[test]
fn test_unknown_policy_is_invalid_config() {
    let err = ScanConfig::from_toml_str(
        "project = \"P\"\nalternate = \"A\"\ngroup = \"G\"\ndegraded_fetch = \"ignore\"\n",
    )
    .unwrap_err();
    assert!(matches!(err, SclmError::InvalidConfig { .. }));
}

#[test]
fn test_blank_type_entry_rejected() {
    let err = ScanConfig::from_toml_str(
        "project = \"P\"\nalternate = \"A\"\ngroup = \"G\"\ntypes = [\"COBOL\", \"\"]\n",
    )
    .unwrap_err();
    assert!(matches!(err, SclmError::InvalidConfig { reason } if reason.contains("type filter")));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = ScanConfig::load(&dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, SclmError::Io { .. }));
}
