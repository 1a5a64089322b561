//! Download module for time-shift recording.
//!
//! This module provides:
//! - Playlist URL and header construction
//! - Cover art codec selection
//! - The download orchestrator driving ffmpeg

pub mod service;
pub mod stream;

pub use service::{DownloadRequest, DownloadService};
pub use stream::{build_command, generate_lsid, ImageCodec, StreamDescriptor};
