//! Output path resolution.

use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;

use crate::config::Config;
use crate::error::Result;
use crate::fs::naming::recording_filename;

/// Where a recording is written.
///
/// An explicit path wins; otherwise a name derived from the station and start
/// time is placed in the configured output directory.
pub fn resolve_output_path(
    config: &Config,
    explicit: Option<&Path>,
    station_id: &str,
    from: &NaiveDateTime,
) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }

    let filename = recording_filename(station_id, from)?;
    Ok(config.output_directory().join(filename))
}

/// Ensure the parent directory of `path` exists, creating it if necessary.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
