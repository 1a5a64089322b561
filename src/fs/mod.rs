//! Filesystem module.
//!
//! Provides:
//! - Output path resolution and directory creation
//! - Recording file naming

pub mod naming;
pub mod paths;

pub use naming::{recording_filename, sanitize_path_component};
pub use paths::{ensure_parent_dir, resolve_output_path};
