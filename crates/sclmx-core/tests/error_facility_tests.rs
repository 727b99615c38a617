use sclmx_core::errors::{ExError, ExErrorKind, SclmError};

#[test]
fn test_invalid_timestamp_verifiable_by_kind() {
    let err = SclmError::InvalidTimestamp {
        value: "2024/13/01 00:00:00".to_string(),
        reason: "input is out of range".to_string(),
    };

    let ex_err: ExError = err.into();

    assert_eq!(ex_err.kind(), ExErrorKind::InvalidTimestamp);
    assert_eq!(ex_err.code(), "ERR_INVALID_TIMESTAMP");
    assert!(ex_err.message().contains("2024/13/01 00:00:00"));
}

#[test]
fn test_unclassified_carries_member_path() {
    let err = SclmError::Unclassified {
        path: "PRJ.ALT.GRP.COBOL(A)".to_string(),
    };

    let ex_err: ExError = err.into();

    assert_eq!(ex_err.kind(), ExErrorKind::Unclassified);
    assert_eq!(ex_err.op(), Some("describe"));
    assert_eq!(ex_err.member(), Some("PRJ.ALT.GRP.COBOL(A)"));
}

#[test]
fn test_remote_unavailable_distinct_from_io() {
    let err = SclmError::RemoteUnavailable {
        status: "transport failed".to_string(),
    };

    let ex_err: ExError = err.into();

    assert_eq!(ex_err.kind(), ExErrorKind::RemoteUnavailable);
    assert_ne!(ex_err.kind(), ExErrorKind::Io);
    assert_eq!(ex_err.op(), Some("reconcile"));
    assert!(ex_err.to_string().starts_with("[ERR_REMOTE_UNAVAILABLE] in operation 'reconcile'"));
}

#[test]
fn test_duplicate_member_structured_fields() {
    let ex_err: ExError = SclmError::DuplicateMember {
        path: "PRJ.ALT.GRP.ASM(B)".to_string(),
    }
    .into();

    assert_eq!(ex_err.code(), "ERR_DUPLICATE_MEMBER");
    assert!(ex_err.to_string().contains("(member: PRJ.ALT.GRP.ASM(B))"));
}

#[test]
fn test_missing_field_message_names_field() {
    let ex_err: ExError = SclmError::MissingField { field: "change_date" }.into();
    assert_eq!(ex_err.kind(), ExErrorKind::MissingField);
    assert!(ex_err.message().contains("change_date"));
}

#[test]
fn test_io_and_json_errors_convert() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no spool");
    assert!(matches!(SclmError::from(io), SclmError::Io { message } if message.contains("no spool")));

    let json = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let ex_err: ExError = SclmError::from(json).into();
    assert_eq!(ex_err.kind(), ExErrorKind::Serialization);
}

#[test]
fn test_error_kind_code_mapping() {
    // Codes are part of the CI adapter contract and must not drift
    let kinds = vec![
        (ExErrorKind::InvalidTimestamp, "ERR_INVALID_TIMESTAMP"),
        (ExErrorKind::InvalidVersion, "ERR_INVALID_VERSION"),
        (ExErrorKind::MissingField, "ERR_MISSING_FIELD"),
        (ExErrorKind::Unclassified, "ERR_UNCLASSIFIED"),
        (ExErrorKind::DuplicateMember, "ERR_DUPLICATE_MEMBER"),
        (ExErrorKind::RemoteUnavailable, "ERR_REMOTE_UNAVAILABLE"),
        (ExErrorKind::InvalidConfig, "ERR_INVALID_CONFIG"),
        (ExErrorKind::Io, "ERR_IO"),
        (ExErrorKind::Serialization, "ERR_SERIALIZATION"),
    ];

    for (kind, expected_code) in kinds {
        assert_eq!(kind.code(), expected_code);
    }
}
