//! Whole-document snapshot decode / encode.
//!
//! Decoding is a pure function of its input bytes: each call returns a
//! fresh `Vec<Project>` and keeps no state between calls.

use serde::ser::Serialize;
use serde::Deserialize;
use serde_json::ser::PrettyFormatter;

use crate::errors::{CodeShapeError, Result};
use crate::model::Project;

/// Path reported for a snapshot decoded from memory rather than a file.
pub const IN_MEMORY_SOURCE: &str = "<in-memory>";

/// Indentation used when encoding a snapshot document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Indent {
    /// One tab per level, the layout of previously persisted snapshots
    #[default]
    Tab,
    /// Two spaces per level
    Spaces,
}

impl Indent {
    fn as_bytes(&self) -> &'static [u8] {
        match self {
            Indent::Tab => b"\t",
            Indent::Spaces => b"  ",
        }
    }
}

/// Decode a snapshot document into its projects.
///
/// # Errors
///
/// - `CodeShapeError::SnapshotAbsent` if the top level is JSON `null`
/// - `CodeShapeError::Decode` for any malformed content, including a
///   compact form with more than two tokens or a non-object where an
///   object is required. The first such error aborts the whole decode.
///
/// # Example
///
/// ```
/// use codeshape_core::snapshot::decode_snapshot;
///
/// let doc = br#"[{"Name": "P", "Classes": [{"Namespace": "NS", "Name": "A",
///     "BaseType": null, "Properties": ["int X"]}]}]"#;
/// let projects = decode_snapshot(doc).unwrap();
/// assert_eq!(projects[0].classes()[0].properties()[0].name(), "X");
/// ```
pub fn decode_snapshot(bytes: &[u8]) -> Result<Vec<Project>> {
    let projects: Option<Vec<Project>> = serde_json::from_slice(bytes)?;
    let projects = projects.ok_or_else(|| CodeShapeError::SnapshotAbsent {
        path: IN_MEMORY_SOURCE.to_string(),
    })?;

    tracing::debug!(
        bytes = bytes.len(),
        projects = projects.len(),
        "decoded snapshot"
    );
    Ok(projects)
}

/// Encode projects as a pretty-printed snapshot document.
///
/// # Errors
///
/// Returns `CodeShapeError::Encode` if serialization fails.
pub fn encode_snapshot(projects: &[Project], indent: Indent) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    projects
        .serialize(&mut serializer)
        .map_err(|e| CodeShapeError::Encode {
            message: e.to_string(),
        })?;
    String::from_utf8(buf).map_err(|e| CodeShapeError::Encode {
        message: e.to_string(),
    })
}
