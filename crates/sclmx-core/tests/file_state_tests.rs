#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use std::cmp::Ordering;

use proptest::prelude::*;
use sclmx_core::model::{format_timestamp, parse_timestamp, sort_for_display};
use sclmx_core::{EditType, FileState, MemberPath, SclmError};

use common::{file, file_in_group};

#[test]
fn test_identity_path_format() {
    let f = file("COBOL", "PAYROLL", 3, "2024/01/15 10:30:00", "JDOE");
    assert_eq!(f.identity_path(), "PRJ.ALT.GRP.COBOL(PAYROLL)");
}

#[test]
fn test_same_member_ignores_version_date_user_and_classification() {
    let a = file("COBOL", "A", 1, "2024/01/01 00:00:00", "U1");
    let b = file_in_group("COBOL", "A", 7, "2025/06/30 23:59:59", "U2", "CG9")
        .classified(EditType::Edited);
    assert!(a.same_member(&b));
    assert_ne!(a, b);
}

#[test]
fn test_different_type_is_different_member() {
    let a = file("COBOL", "A", 1, "2024/01/01 00:00:00", "U1");
    let b = file("COPYBOOK", "A", 1, "2024/01/01 00:00:00", "U1");
    assert!(!a.same_member(&b));
}

#[test]
fn test_canonical_cmp_equal_only_when_all_fields_match() {
    let a = file("COBOL", "A", 1, "2024/01/01 00:00:00", "U1");
    assert_eq!(
        a.canonical_cmp(&a.clone().classified(EditType::Deleted)),
        Ordering::Equal
    );

    let newer = file("COBOL", "A", 1, "2024/01/01 00:00:01", "U1");
    assert_eq!(a.canonical_cmp(&newer), Ordering::Less);

    let other_group = file_in_group("COBOL", "A", 1, "2024/01/01 00:00:00", "U1", "CG2");
    assert_eq!(a.canonical_cmp(&other_group), Ordering::Less);
}

#[test]
fn test_canonical_cmp_orders_by_version_before_date() {
    let v2_old = file("COBOL", "A", 2, "2020/01/01 00:00:00", "U1");
    let v1_new = file("COBOL", "A", 1, "2024/01/01 00:00:00", "U1");
    assert_eq!(v1_new.canonical_cmp(&v2_old), Ordering::Less);
}

#[test]
fn test_display_order_newest_first_with_tiebreaks() {
    let mut files = vec![
        file("COBOL", "B", 1, "2024/01/01 00:00:00", "U1"),
        file("ASM", "Z", 1, "2024/01/01 00:00:00", "U1"),
        file("COBOL", "A", 1, "2024/03/01 00:00:00", "U1"),
        file("COBOL", "B", 1, "2024/01/01 00:00:00", "U0"),
    ];
    sort_for_display(&mut files);

    let order: Vec<(&str, &str, &str)> = files
        .iter()
        .map(|f| (f.member_type(), f.name(), f.change_user_id()))
        .collect();
    assert_eq!(
        order,
        vec![
            ("COBOL", "A", "U1"),
            ("ASM", "Z", "U1"),
            ("COBOL", "B", "U0"),
            ("COBOL", "B", "U1"),
        ]
    );
}

#[test]
fn test_display_order_version_descending() {
    let low = file("COBOL", "A", 1, "2024/01/01 00:00:00", "U1");
    let high = file("COBOL", "A", 5, "2024/01/01 00:00:00", "U1");
    assert_eq!(high.display_cmp(&low), Ordering::Less);
}

#[test]
fn test_describe_classified_record() {
    let f = file("COBOL", "PAYROLL", 3, "2024/01/15 10:30:00", "JDOE").classified(EditType::Edited);
    assert_eq!(
        f.describe().unwrap(),
        "EDIT: [PRJ.ALT.GRP.COBOL(PAYROLL)] CG1 <2024/01/15 10:30:00> | JDOE, ver.:3"
    );
}

#[test]
fn test_describe_unclassified_fails() {
    let f = file("COBOL", "PAYROLL", 3, "2024/01/15 10:30:00", "JDOE");
    assert_eq!(
        f.describe().unwrap_err(),
        SclmError::Unclassified {
            path: "PRJ.ALT.GRP.COBOL(PAYROLL)".to_string()
        }
    );
}

#[test]
fn test_parse_timestamp_rejects_malformed_text() {
    for text in ["2024-01-01 00:00:00", "2024/1/01 00:00:00", "2024/02/30 00:00:00", ""] {
        assert!(
            matches!(parse_timestamp(text), Err(SclmError::InvalidTimestamp { .. })),
            "expected {:?} to be rejected",
            text
        );
    }
}

#[test]
fn test_serde_uses_canonical_date_and_flat_path() {
    let f = file("COBOL", "A", 2, "2024/05/06 07:08:09", "U1").classified(EditType::Added);
    let json = serde_json::to_value(&f).unwrap();
    assert_eq!(json["change_date"], "2024/05/06 07:08:09");
    assert_eq!(json["type"], "COBOL");
    assert_eq!(json["name"], "A");
    let back: FileState = serde_json::from_value(json).unwrap();
    assert_eq!(back, f);
}

fn arb_file() -> impl Strategy<Value = FileState> {
    (
        prop::sample::select(vec!["COBOL", "ASM", "JCL"]),
        prop::sample::select(vec!["A", "B", "C"]),
        0u64..4,
        0i64..4,
        prop::sample::select(vec!["U1", "U2"]),
        prop::sample::select(vec!["CG1", "CG2"]),
    )
        .prop_map(|(member_type, name, version, day, user, group)| {
            let date = parse_timestamp("2024/01/01 00:00:00").unwrap() + chrono::Duration::days(day);
            FileState::new(
                MemberPath::new("PRJ", "ALT", "GRP", member_type, name),
                version,
                date,
                user,
                group,
            )
        })
}

proptest! {
    #[test]
    fn prop_same_member_iff_identity_paths_equal(a in arb_file(), b in arb_file()) {
        prop_assert_eq!(a.same_member(&b), a.identity_path() == b.identity_path());
    }

    #[test]
    fn prop_canonical_cmp_is_antisymmetric(a in arb_file(), b in arb_file()) {
        prop_assert_eq!(a.canonical_cmp(&b), b.canonical_cmp(&a).reverse());
        prop_assert_eq!(a.canonical_cmp(&b) == Ordering::Equal, a == b);
    }

    #[test]
    fn prop_canonical_cmp_is_transitive(a in arb_file(), b in arb_file(), c in arb_file()) {
        if a.canonical_cmp(&b).is_le() && b.canonical_cmp(&c).is_le() {
            prop_assert!(a.canonical_cmp(&c).is_le());
        }
    }

    #[test]
    fn prop_display_sort_is_deterministic(files in prop::collection::vec(arb_file(), 0..12)) {
        let mut forward = files.clone();
        let mut reversed: Vec<FileState> = files.into_iter().rev().collect();
        sort_for_display(&mut forward);
        sort_for_display(&mut reversed);
        prop_assert_eq!(&forward, &reversed);
        for pair in forward.windows(2) {
            prop_assert!(pair[0].change_date() >= pair[1].change_date());
        }
    }

    #[test]
    fn prop_timestamp_round_trip(
        year in 1900i32..2100,
        month in 1u32..=12,
        day in 1u32..=28,
        hour in 0u32..24,
        minute in 0u32..60,
        second in 0u32..60,
    ) {
        let text = format!("{:04}/{:02}/{:02} {:02}:{:02}:{:02}", year, month, day, hour, minute, second);
        let parsed = parse_timestamp(&text).unwrap();
        prop_assert_eq!(&format_timestamp(&parsed), &text);
        prop_assert_eq!(format_timestamp(&parse_timestamp(&format_timestamp(&parsed)).unwrap()), text);
    }
}
