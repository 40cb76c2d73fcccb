//! Digest computation for snapshots.
//!
//! The digest is a SHA-256 hash of the compact (single-line) encoding, so
//! it is stable across indentation choices and process runs.

use sha2::{Digest, Sha256};

use crate::errors::{CodeShapeError, Result};
use crate::model::Project;

/// Compute the hex SHA-256 digest of a snapshot's canonical encoding.
///
/// Content-equal snapshots have equal digests; order matters.
///
/// ## Errors
///
/// Returns `CodeShapeError::Encode` if serialization fails.
///
/// ## Example
///
/// ```
/// use codeshape_core::snapshot::compute_snapshot_digest;
/// use codeshape_core::Project;
///
/// let digest = compute_snapshot_digest(&[Project::new("P", Vec::new())]).unwrap();
/// assert_eq!(digest.len(), 64);
/// ```
pub fn compute_snapshot_digest(projects: &[Project]) -> Result<String> {
    let canonical = serde_json::to_string(projects).map_err(|e| CodeShapeError::Encode {
        message: e.to_string(),
    })?;
    Ok(hash_string(&canonical))
}

fn hash_string(input: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digest_deterministic() {
        let projects = vec![Project::new("P", Vec::new())];
        assert_eq!(
            compute_snapshot_digest(&projects).unwrap(),
            compute_snapshot_digest(&projects.clone()).unwrap()
        );
    }

    #[test]
    fn test_digest_is_order_sensitive() {
        let a = vec![Project::new("A", Vec::new()), Project::new("B", Vec::new())];
        let b = vec![Project::new("B", Vec::new()), Project::new("A", Vec::new())];
        assert_ne!(
            compute_snapshot_digest(&a).unwrap(),
            compute_snapshot_digest(&b).unwrap()
        );
    }
}
