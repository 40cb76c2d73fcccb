// Integration tests for snapshot documents on disk

use codeshape_core::errors::ExErrorKind;
use codeshape_core::snapshot::Indent;
use codeshape_core::{Class, Project, Property, TypeRef};
use codeshape_store::{read_snapshot, read_snapshot_text, write_snapshot};
use std::fs;
use tempfile::TempDir;

fn setup_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp directory")
}

fn snapshot() -> Vec<Project> {
    vec![Project::new(
        "P",
        vec![Class::builder("NS", "A")
            .property(Property::new(TypeRef::parse("int"), "X"))
            .build()],
    )]
}

#[test]
fn test_write_read_roundtrip() {
    let dir = setup_dir();
    let path = dir.path().join("snapshot.json");

    write_snapshot(&path, &snapshot(), Indent::Tab).unwrap();
    let read = read_snapshot(&path).unwrap();

    assert_eq!(read, snapshot());
    assert!(read_snapshot_text(&path).unwrap().contains("\t"));
}

#[test]
fn test_missing_file_is_missing_input() {
    let dir = setup_dir();
    let path = dir.path().join("absent.json");

    let err = read_snapshot(&path).unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::MissingInput);
    assert_eq!(err.op(), Some("read_snapshot"));
    assert!(err.path().unwrap().ends_with("absent.json"));
}

#[test]
fn test_null_document_is_missing_input_with_path() {
    let dir = setup_dir();
    let path = dir.path().join("null.json");
    fs::write(&path, "null").unwrap();

    let err = read_snapshot(&path).unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::MissingInput);
    assert!(err.path().unwrap().ends_with("null.json"));
}

#[test]
fn test_malformed_document_is_invalid_format() {
    let dir = setup_dir();
    let path = dir.path().join("bad.json");
    fs::write(
        &path,
        r#"[{"Name": "P", "Classes": [{"Namespace": "NS", "Name": "A", "Properties": ["a b c"]}]}]"#,
    )
    .unwrap();

    let err = read_snapshot(&path).unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::InvalidFormat);
    assert!(err.to_string().contains("bad.json"));
}

#[test]
fn test_write_creates_nested_directories() {
    let dir = setup_dir();
    let path = dir.path().join("reports").join("2026").join("changes.json");

    write_snapshot(&path, &[], Indent::Spaces).unwrap();

    assert_eq!(read_snapshot(&path).unwrap(), Vec::<Project>::new());
}

#[test]
fn test_non_utf8_document_is_invalid_format() {
    let dir = setup_dir();
    let path = dir.path().join("latin1.json");
    fs::write(&path, b"[{\"Name\": \"Caf\xe9\", \"Classes\": []}]").unwrap();

    let err = read_snapshot(&path).unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::InvalidFormat);
    assert!(err.path().unwrap().ends_with("latin1.json"));

    let err = read_snapshot_text(&path).unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::InvalidFormat);
    assert_eq!(err.op(), Some("decode_snapshot"));
}
