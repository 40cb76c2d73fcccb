//! Decode a snapshot file and write it back in canonical form.
//!
//! Re-reads the written file to confirm it decodes to the same content.

use codeshape_core::diff::SnapshotOverview;
use codeshape_core::snapshot::{compute_snapshot_digest, Indent};
use codeshape_core::{ExError, ExErrorKind};
use codeshape_store::errors::Result;
use codeshape_store::{read_snapshot, read_snapshot_text, write_snapshot};
use serde::Serialize;
use std::path::Path;
use std::time::Instant;

#[derive(Debug, Clone, Serialize)]
pub struct NormalizeOutcome {
    pub overview: SnapshotOverview,
    pub input_digest: String,
    pub output_digest: String,
    /// The written file is textually identical to the input
    pub byte_identical: bool,
}

impl NormalizeOutcome {
    /// Both files decode to the same content.
    pub fn round_trip_ok(&self) -> bool {
        self.input_digest == self.output_digest
    }
}

/// Decode `in_path` and re-encode it to `out_path`.
///
/// # Errors
///
/// - `MissingInput` / `InvalidFormat` for an unusable input
/// - `DeterminismViolation` if the written file decodes to different
///   content than the input
pub fn normalize(in_path: &Path, out_path: &Path, indent: Indent) -> Result<NormalizeOutcome> {
    let start = Instant::now();
    codeshape_core::log_op_start!("normalize", snapshot_path = %in_path.display());

    match run_normalize(in_path, out_path, indent) {
        Ok(outcome) => {
            let duration_ms = start.elapsed().as_millis() as u64;
            codeshape_core::log_op_end!(
                "normalize",
                duration_ms = duration_ms,
                snapshot_digest = outcome.output_digest.as_str(),
                byte_identical = outcome.byte_identical
            );
            Ok(outcome)
        }
        Err(e) => {
            let duration_ms = start.elapsed().as_millis() as u64;
            codeshape_core::log_op_error!("normalize", e.clone(), duration_ms = duration_ms);
            Err(e)
        }
    }
}

fn run_normalize(in_path: &Path, out_path: &Path, indent: Indent) -> Result<NormalizeOutcome> {
    let input_text = read_snapshot_text(in_path)?;
    let projects = read_snapshot(in_path)?;
    write_snapshot(out_path, &projects, indent)?;

    let reread = read_snapshot(out_path)?;
    let output_text = read_snapshot_text(out_path)?;

    let outcome = NormalizeOutcome {
        overview: SnapshotOverview::from_projects(&projects),
        input_digest: compute_snapshot_digest(&projects).map_err(ExError::from)?,
        output_digest: compute_snapshot_digest(&reread).map_err(ExError::from)?,
        byte_identical: input_text == output_text,
    };

    if !outcome.round_trip_ok() {
        return Err(ExError::new(ExErrorKind::DeterminismViolation)
            .with_op("normalize")
            .with_path(out_path.display().to_string())
            .with_message(format!(
                "re-encoded snapshot decodes differently: {} != {}",
                outcome.input_digest, outcome.output_digest
            )));
    }
    Ok(outcome)
}
