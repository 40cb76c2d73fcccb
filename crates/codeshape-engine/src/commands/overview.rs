//! Summarize a snapshot file.

use codeshape_core::diff::SnapshotOverview;
use codeshape_core::snapshot::compute_snapshot_digest;
use codeshape_core::{ExError, Project, Scope, ScopeRules};
use codeshape_store::errors::Result;
use codeshape_store::read_snapshot;
use serde::Serialize;
use std::path::Path;
use std::time::Instant;

/// Class counts per [`Scope`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScopeCounts {
    pub framework: usize,
    pub leaf: usize,
    pub out_of_scope: usize,
}

impl ScopeCounts {
    pub fn from_projects(projects: &[Project], rules: &ScopeRules) -> Self {
        projects
            .iter()
            .flat_map(|p| p.classes())
            .fold(Self::default(), |mut counts, class| {
                match class.scope(rules) {
                    Scope::Framework => counts.framework += 1,
                    Scope::Leaf => counts.leaf += 1,
                    Scope::OutOfScope => counts.out_of_scope += 1,
                }
                counts
            })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct OverviewReport {
    pub overview: SnapshotOverview,
    pub scopes: ScopeCounts,
    pub digest: String,
}

/// Count the entities in a snapshot file and classify its classes.
///
/// # Errors
///
/// - `MissingInput` if the snapshot is missing or `null`
/// - `InvalidFormat` if the snapshot is malformed
pub fn overview(path: &Path, rules: &ScopeRules) -> Result<OverviewReport> {
    let start = Instant::now();
    codeshape_core::log_op_start!("overview", snapshot_path = %path.display());

    match run_overview(path, rules) {
        Ok(report) => {
            let duration_ms = start.elapsed().as_millis() as u64;
            codeshape_core::log_op_end!(
                "overview",
                duration_ms = duration_ms,
                project_count = report.overview.projects,
                class_count = report.overview.classes,
                property_count = report.overview.properties,
                method_count = report.overview.methods
            );
            Ok(report)
        }
        Err(e) => {
            let duration_ms = start.elapsed().as_millis() as u64;
            codeshape_core::log_op_error!("overview", e.clone(), duration_ms = duration_ms);
            Err(e)
        }
    }
}

fn run_overview(path: &Path, rules: &ScopeRules) -> Result<OverviewReport> {
    let projects = read_snapshot(path)?;
    Ok(OverviewReport {
        overview: SnapshotOverview::from_projects(&projects),
        scopes: ScopeCounts::from_projects(&projects, rules),
        digest: compute_snapshot_digest(&projects).map_err(ExError::from)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use codeshape_core::Class;

    #[test]
    fn test_scope_counts() {
        let projects = vec![Project::new(
            "P",
            vec![
                Class::builder("DataTorque.Iho.Core", "Entity").build(),
                Class::builder("DataTorque.Billing", "Invoice").build(),
                Class::builder("DataTorque.Billing", "Line").build(),
                Class::builder("System", "Object").build(),
            ],
        )];
        let counts = ScopeCounts::from_projects(&projects, &ScopeRules::default());
        assert_eq!(
            counts,
            ScopeCounts {
                framework: 1,
                leaf: 2,
                out_of_scope: 1,
            }
        );
    }
}
