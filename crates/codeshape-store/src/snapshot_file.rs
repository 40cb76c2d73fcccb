//! Snapshot documents on disk
//!
//! A missing file or a `null` document is a `MissingInput` error that the
//! caller may handle; it is never fatal at this layer.

use crate::atomic::atomic_write;
use crate::errors::{decode_error, io_error, snapshot_not_found, Result};
use codeshape_core::snapshot::{decode_snapshot, encode_snapshot, Indent};
use codeshape_core::{CodeShapeError, ExError, Project};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

fn read_snapshot_bytes(path: &Path) -> Result<Vec<u8>> {
    match fs::read(path) {
        Ok(bytes) => Ok(bytes),
        Err(e) if e.kind() == ErrorKind::NotFound => Err(snapshot_not_found(path)),
        Err(e) => Err(io_error("read_snapshot", path, e)),
    }
}

/// Read a snapshot file as text
///
/// Content that is not UTF-8 is a format error, not an I/O failure.
pub fn read_snapshot_text(path: &Path) -> Result<String> {
    String::from_utf8(read_snapshot_bytes(path)?).map_err(|e| {
        decode_error(
            path,
            CodeShapeError::Decode {
                message: e.to_string(),
            },
        )
    })
}

/// Read and decode a snapshot file
pub fn read_snapshot(path: &Path) -> Result<Vec<Project>> {
    let bytes = read_snapshot_bytes(path)?;
    let projects = decode_snapshot(&bytes).map_err(|e| decode_error(path, e))?;

    tracing::debug!(
        path = %path.display(),
        bytes = bytes.len(),
        projects = projects.len(),
        "read snapshot"
    );
    Ok(projects)
}

/// Encode and atomically write a snapshot file
pub fn write_snapshot(path: &Path, projects: &[Project], indent: Indent) -> Result<()> {
    let text = encode_snapshot(projects, indent)
        .map_err(|e| ExError::from(e).with_path(path.display().to_string()))?;
    atomic_write(path, text.as_bytes())?;

    tracing::debug!(
        path = %path.display(),
        bytes = text.len(),
        projects = projects.len(),
        "wrote snapshot"
    );
    Ok(())
}
