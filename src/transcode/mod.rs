//! External transcoder (ffmpeg) invocation.
//!
//! This module provides:
//! - An immutable command description (inputs, outputs, global flags)
//! - The `Transcoder`/`TranscoderFactory` seams and their ffmpeg implementation

pub mod command;
pub mod ffmpeg;

use std::path::PathBuf;

use thiserror::Error;

pub use command::{TranscodeCommand, TranscodeInput, TranscodeOutput};
pub use ffmpeg::{Ffmpeg, FfmpegFactory, Transcoder, TranscoderFactory};

/// Failure to run the transcoder.
#[derive(Error, Debug)]
pub enum TranscodeError {
    #[error("FFmpeg not found at {0}. Please install ffmpeg or configure its directory.")]
    NotFound(PathBuf),

    #[error("Failed to run ffmpeg: {0}")]
    Io(#[from] std::io::Error),

    #[error("{message}")]
    AbnormalExit { code: Option<i32>, message: String },
}
