//! Integration tests for the compare / overview / normalize commands.
//!
//! All tests use real snapshot files in a TempDir.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use codeshape_core::errors::ExErrorKind;
use codeshape_core::logging_facility::test_capture::init_test_capture;
use codeshape_core::snapshot::Indent;
use codeshape_core::ScopeRules;
use codeshape_core_types::schema::{
    EVENT_END, EVENT_END_ERROR, EVENT_START, FIELD_ERR_CODE, FIELD_SNAPSHOT_PATH,
};
use codeshape_engine::{compare, normalize, overview, CompareOptions};
use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

// ---------------------------------------------------------------------------
// Setup helpers
// ---------------------------------------------------------------------------

fn write_json(dir: &Path, name: &str, value: &Value) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, serde_json::to_string_pretty(value).unwrap()).unwrap();
    path
}

fn old_doc() -> Value {
    json!([{
        "Name": "Billing",
        "Classes": [
            {"Namespace": "DataTorque.Billing", "Name": "Invoice", "BaseType": null,
             "Properties": ["int Id"]},
            {"Namespace": "DataTorque.Iho.Core", "Name": "Entity", "BaseType": null}
        ]
    }])
}

fn new_doc() -> Value {
    json!([{
        "Name": "Billing",
        "Classes": [
            {"Namespace": "DataTorque.Billing", "Name": "Invoice", "BaseType": null,
             "Properties": ["int Id", "System.Decimal Total"]},
            {"Namespace": "DataTorque.Iho.Core", "Name": "Entity", "BaseType": null}
        ]
    }])
}

// ---------------------------------------------------------------------------
// compare
// ---------------------------------------------------------------------------

#[test]
fn test_compare_writes_pruned_change_set() {
    let dir = TempDir::new().unwrap();
    let old = write_json(dir.path(), "old.json", &old_doc());
    let new = write_json(dir.path(), "new.json", &new_doc());
    let out = dir.path().join("changes.json");

    let outcome = compare(&old, &new, &out, CompareOptions::default()).unwrap();

    assert_eq!(outcome.changes.projects, 1);
    assert_eq!(outcome.changes.classes, 1);
    assert_eq!(outcome.changes.properties, 1);
    assert!(!outcome.is_unchanged());

    let written: Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(
        written,
        json!([{
            "Name": "Billing",
            "Classes": [{"Namespace": "DataTorque.Billing", "Name": "Invoice",
                         "BaseType": null, "Properties": ["System.Decimal Total"]}]
        }])
    );
}

#[test]
fn test_compare_identical_writes_empty_array() {
    let dir = TempDir::new().unwrap();
    let old = write_json(dir.path(), "old.json", &old_doc());
    let out = dir.path().join("changes.json");

    let outcome = compare(&old, &old, &out, CompareOptions::default()).unwrap();

    assert!(outcome.is_unchanged());
    assert_eq!(fs::read_to_string(&out).unwrap().trim(), "[]");
}

#[test]
fn test_compare_missing_baseline_is_missing_input() {
    let dir = TempDir::new().unwrap();
    let new = write_json(dir.path(), "new.json", &new_doc());
    let out = dir.path().join("changes.json");

    let err = compare(
        &dir.path().join("absent.json"),
        &new,
        &out,
        CompareOptions::default(),
    )
    .unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::MissingInput);
    assert!(!out.exists(), "No change-set written on failure");
}

#[test]
fn test_compare_logs_start_and_end() {
    let capture = init_test_capture();
    let dir = TempDir::new().unwrap();
    let old = write_json(dir.path(), "old.json", &old_doc());
    let new = write_json(dir.path(), "new.json", &new_doc());
    let out = dir.path().join("logged.json");
    let new_display = new.display().to_string();

    compare(&old, &new, &out, CompareOptions::default()).unwrap();

    let starts = capture.count_events(|e| {
        e.op.as_deref() == Some("compare")
            && e.event.as_deref() == Some(EVENT_START)
            && e.fields.get(FIELD_SNAPSHOT_PATH) == Some(&new_display)
    });
    assert_eq!(starts, 1, "Exactly one start event for this compare");
    capture.assert_event_exists("compare", EVENT_END);
}

#[test]
fn test_compare_failure_logs_end_error_with_code() {
    let capture = init_test_capture();
    let dir = TempDir::new().unwrap();
    let null_doc = dir.path().join("null.json");
    fs::write(&null_doc, "null").unwrap();

    let err = compare(
        &null_doc,
        &null_doc,
        &dir.path().join("out.json"),
        CompareOptions::default(),
    )
    .unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::MissingInput);
    let found = capture.count_events(|e| {
        e.op.as_deref() == Some("compare")
            && e.event.as_deref() == Some(EVENT_END_ERROR)
            && e.fields.get(FIELD_ERR_CODE).map(String::as_str) == Some("ERR_MISSING_INPUT")
    });
    assert!(found >= 1);
}

// ---------------------------------------------------------------------------
// overview
// ---------------------------------------------------------------------------

#[test]
fn test_overview_counts_and_scopes() {
    let dir = TempDir::new().unwrap();
    let path = write_json(dir.path(), "new.json", &new_doc());

    let report = overview(&path, &ScopeRules::default()).unwrap();

    assert_eq!(report.overview.projects, 1);
    assert_eq!(report.overview.classes, 2);
    assert_eq!(report.overview.properties, 2);
    assert_eq!(report.scopes.framework, 1);
    assert_eq!(report.scopes.leaf, 1);
    assert_eq!(report.scopes.out_of_scope, 0);
    assert_eq!(report.digest.len(), 64);
}

#[test]
fn test_overview_respects_custom_rules() {
    let dir = TempDir::new().unwrap();
    let path = write_json(dir.path(), "new.json", &new_doc());
    let rules = ScopeRules {
        in_scope_prefix: "Acme.".to_string(),
        framework_prefix: "Acme.Core".to_string(),
    };

    let report = overview(&path, &rules).unwrap();

    assert_eq!(report.scopes.out_of_scope, 2);
}

// ---------------------------------------------------------------------------
// normalize
// ---------------------------------------------------------------------------

#[test]
fn test_normalize_round_trip_reports_digest_match() {
    let dir = TempDir::new().unwrap();
    let input = write_json(dir.path(), "in.json", &new_doc());
    let out = dir.path().join("normalized.json");

    let outcome = normalize(&input, &out, Indent::Tab).unwrap();

    assert!(outcome.round_trip_ok());
    assert!(!outcome.byte_identical, "Pretty JSON input uses spaces");
    assert_eq!(outcome.overview.classes, 2);

    // Normalizing the normalized file is a byte-for-byte fixed point.
    let again = normalize(&out, &dir.path().join("again.json"), Indent::Tab).unwrap();
    assert!(again.byte_identical);
    assert_eq!(again.output_digest, outcome.output_digest);
}

#[test]
fn test_normalize_invalid_input_is_invalid_format() {
    let dir = TempDir::new().unwrap();
    let input = write_json(
        dir.path(),
        "in.json",
        &json!([{"Name": "P", "Classes": [{"Namespace": "NS", "Name": "A",
            "Properties": ["too many tokens here"]}]}]),
    );

    let err = normalize(&input, &dir.path().join("out.json"), Indent::Tab).unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::InvalidFormat);
}
