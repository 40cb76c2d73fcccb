//! Compare two snapshot files and persist the change-set.

use codeshape_core::diff::{diff, SnapshotOverview};
use codeshape_core::snapshot::{compute_snapshot_digest, Indent};
use codeshape_core::ExError;
use codeshape_store::errors::Result;
use codeshape_store::{read_snapshot, write_snapshot};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Debug, Clone, Copy, Default)]
pub struct CompareOptions {
    /// Indentation of the written change-set
    pub indent: Indent,
}

/// Result of a successful compare.
#[derive(Debug, Clone, Serialize)]
pub struct CompareOutcome {
    /// Counts over the change-set (not over either input)
    pub changes: SnapshotOverview,
    /// Digest of the written change-set
    pub digest: String,
    pub out_path: PathBuf,
}

impl CompareOutcome {
    /// True when `new` holds nothing new or different.
    pub fn is_unchanged(&self) -> bool {
        self.changes.is_empty()
    }
}

/// Diff `new_path` against `old_path` and write the change-set to `out_path`.
///
/// An empty change-set is still written, as `[]`.
///
/// # Errors
///
/// - `MissingInput` if either snapshot is missing or `null`
/// - `InvalidFormat` if either snapshot is malformed
/// - `Io` / `Serialization` if the change-set cannot be written
pub fn compare(
    old_path: &Path,
    new_path: &Path,
    out_path: &Path,
    options: CompareOptions,
) -> Result<CompareOutcome> {
    let start = Instant::now();
    codeshape_core::log_op_start!(
        "compare",
        snapshot_path = %new_path.display(),
        baseline_path = %old_path.display()
    );

    match run_compare(old_path, new_path, out_path, options) {
        Ok(outcome) => {
            let duration_ms = start.elapsed().as_millis() as u64;
            codeshape_core::log_op_end!(
                "compare",
                duration_ms = duration_ms,
                project_count = outcome.changes.projects,
                class_count = outcome.changes.classes,
                snapshot_digest = outcome.digest.as_str()
            );
            Ok(outcome)
        }
        Err(e) => {
            let duration_ms = start.elapsed().as_millis() as u64;
            codeshape_core::log_op_error!("compare", e.clone(), duration_ms = duration_ms);
            Err(e)
        }
    }
}

fn run_compare(
    old_path: &Path,
    new_path: &Path,
    out_path: &Path,
    options: CompareOptions,
) -> Result<CompareOutcome> {
    let old = read_snapshot(old_path)?;
    let new = read_snapshot(new_path)?;

    let changes = diff(&old, &new);
    write_snapshot(out_path, &changes, options.indent)?;

    let digest = compute_snapshot_digest(&changes).map_err(ExError::from)?;
    Ok(CompareOutcome {
        changes: SnapshotOverview::from_projects(&changes),
        digest,
        out_path: out_path.to_path_buf(),
    })
}
