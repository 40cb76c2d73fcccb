//! codeshape store - snapshot documents and configuration on disk
//!
//! Provides:
//! - Reading and writing snapshot documents with atomic writes
//! - Loading the optional `codeshape.toml` configuration
//!
//! Decoding and encoding themselves live in `codeshape_core::snapshot`;
//! this crate only adds the filesystem boundary and path context.

mod atomic;
pub mod config;
pub mod errors;
pub mod snapshot_file;

// Re-export key types
pub use config::{load_config, Config, OutputConfig, DEFAULT_CONFIG_FILE};
pub use errors::Result;
pub use snapshot_file::{read_snapshot, read_snapshot_text, write_snapshot};
