//! Atomic write primitives
//!
//! Uses temp→rename pattern to ensure no partial snapshot files

use crate::errors::{io_error, Result};
use std::fs;
use std::path::Path;

/// Atomically write bytes to a file, creating parent directories
pub fn atomic_write(target_path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = target_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| io_error("create_snapshot_dir", parent, e))?;
        }
    }

    let mut temp_name = target_path.as_os_str().to_owned();
    temp_name.push(".tmp");
    let temp_path = Path::new(&temp_name);

    fs::write(temp_path, content).map_err(|e| io_error("write_snapshot_temp", temp_path, e))?;
    fs::rename(temp_path, target_path)
        .map_err(|e| io_error("rename_snapshot_temp", target_path, e))?;

    Ok(())
}
