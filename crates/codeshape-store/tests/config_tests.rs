// Integration tests for codeshape.toml loading

use codeshape_core::errors::ExErrorKind;
use codeshape_core::snapshot::Indent;
use codeshape_store::{load_config, Config};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_explicit_config_is_loaded() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("codeshape.toml");
    fs::write(
        &path,
        "[scope]\nin_scope_prefix = \"Acme.\"\nframework_prefix = \"Acme.Core\"\n\n[output]\nindent = \"spaces\"\n",
    )
    .unwrap();

    let config = load_config(Some(&path)).unwrap();

    assert_eq!(config.scope.in_scope_prefix, "Acme.");
    assert_eq!(config.scope.framework_prefix, "Acme.Core");
    assert_eq!(config.output.indent, Indent::Spaces);
}

#[test]
fn test_explicit_missing_config_is_not_found() {
    let dir = TempDir::new().unwrap();
    let err = load_config(Some(&dir.path().join("nope.toml"))).unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::NotFound);
}

#[test]
fn test_malformed_config_is_invalid_config() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("codeshape.toml");
    fs::write(&path, "[scope\n").unwrap();

    let err = load_config(Some(&path)).unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::InvalidConfig);
}

#[test]
fn test_defaults_match_documented_values() {
    let config = Config::default();
    assert_eq!(config.scope.in_scope_prefix, "DataTorque.");
    assert_eq!(config.scope.framework_prefix, "DataTorque.Iho");
    assert_eq!(config.output.indent, Indent::Tab);
}
