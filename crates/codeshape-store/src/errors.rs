//! Error handling for codeshape-store
//!
//! Wraps codeshape-core ExError with store-specific helpers

use codeshape_core::errors::{CodeShapeError, ExError, ExErrorKind};
use std::path::Path;

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Create an IO error
pub fn io_error(operation: &str, path: &Path, err: std::io::Error) -> ExError {
    ExError::new(ExErrorKind::Io)
        .with_op(operation.to_string())
        .with_path(path.display().to_string())
        .with_message(err.to_string())
}

/// Create a missing snapshot error
pub fn snapshot_not_found(path: &Path) -> ExError {
    ExError::from(CodeShapeError::SnapshotNotFound {
        path: path.display().to_string(),
    })
    .with_op("read_snapshot")
}

/// Attach the snapshot path to a decode failure
///
/// An absent (null) document keeps its `MissingInput` kind; format
/// failures stay `InvalidFormat`.
pub fn decode_error(path: &Path, err: CodeShapeError) -> ExError {
    let path = path.display().to_string();
    match err {
        CodeShapeError::SnapshotAbsent { .. } => {
            ExError::from(CodeShapeError::SnapshotAbsent { path }).with_op("read_snapshot")
        }
        other => ExError::from(other).with_path(path),
    }
}

/// Create a configuration error
pub fn config_error(path: &Path, reason: &str) -> ExError {
    ExError::from(CodeShapeError::Config {
        message: reason.to_string(),
    })
    .with_op("load_config")
    .with_path(path.display().to_string())
}

/// Create an error for an explicitly requested config file that is missing
pub fn config_not_found(path: &Path) -> ExError {
    ExError::new(ExErrorKind::NotFound)
        .with_op("load_config")
        .with_path(path.display().to_string())
        .with_message("Config file not found")
}
