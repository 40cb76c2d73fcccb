//! Change-set diff engine.
//!
//! Reduces two full snapshots to a pruned tree holding only what is new or
//! different in `new` relative to `old`.
//!
//! ## Entry point
//!
//! ```
//! use codeshape_core::diff::{diff, SnapshotOverview};
//! use codeshape_core::Project;
//!
//! let old = vec![Project::new("P", Vec::new())];
//! let changes = diff(&old, &old);
//! assert!(changes.is_empty());
//! assert_eq!(SnapshotOverview::from_projects(&changes).projects, 0);
//! ```
//!
//! ## Guarantees
//!
//! - **Determinism**: identical inputs produce identical output, in the
//!   order of the `new` snapshot.
//! - **Pruning**: unchanged subtrees never appear in the output.
//! - **One-directional**: entities present only in `old` are not reported.

pub mod engine;
pub mod summary;

pub use engine::diff;
pub use summary::{render_overview, SnapshotOverview};
