//! ffmpeg process execution.

use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::process::Stdio;

use async_trait::async_trait;
use tokio::io::AsyncReadExt;
use tokio::process::Command;

use crate::transcode::command::TranscodeCommand;
use crate::transcode::TranscodeError;

/// Lines of ffmpeg stderr kept in failure messages.
const STDERR_TAIL_LINES: usize = 20;

/// Longest stderr line kept, in bytes. Longer lines are truncated.
const STDERR_LINE_MAX_BYTES: usize = 256;

/// Runs a [`TranscodeCommand`] to completion.
#[async_trait]
pub trait Transcoder: Send + Sync {
    async fn execute(&self, command: &TranscodeCommand) -> Result<(), TranscodeError>;
}

/// Produces configured [`Transcoder`] handles.
pub trait TranscoderFactory: Send + Sync {
    fn create(&self) -> Box<dyn Transcoder>;
}

/// Creates [`Ffmpeg`] handles for the binary in an optional directory.
///
/// Without a directory the binary is looked up on `PATH`.
#[derive(Debug, Clone, Default)]
pub struct FfmpegFactory {
    directory: Option<PathBuf>,
}

impl FfmpegFactory {
    pub fn new(directory: Option<PathBuf>) -> Self {
        Self { directory }
    }
}

impl TranscoderFactory for FfmpegFactory {
    fn create(&self) -> Box<dyn Transcoder> {
        Box::new(Ffmpeg::at_path(self.directory.as_deref()))
    }
}

/// An ffmpeg executable.
#[derive(Debug, Clone)]
pub struct Ffmpeg {
    executable: PathBuf,
}

impl Ffmpeg {
    /// Use `ffmpeg` from `directory`, or from `PATH` when `None`.
    pub fn at_path(directory: Option<&Path>) -> Self {
        let name = format!("ffmpeg{}", std::env::consts::EXE_SUFFIX);
        let executable = match directory {
            Some(dir) => dir.join(name),
            None => PathBuf::from(name),
        };
        Self { executable }
    }

    /// Use an explicit executable path.
    pub fn with_executable(executable: impl Into<PathBuf>) -> Self {
        Self {
            executable: executable.into(),
        }
    }

    pub fn executable(&self) -> &Path {
        &self.executable
    }
}

#[async_trait]
impl Transcoder for Ffmpeg {
    async fn execute(&self, command: &TranscodeCommand) -> Result<(), TranscodeError> {
        let args = command.build_arguments();
        tracing::debug!("Running {} with {} arguments", self.executable.display(), args.len());

        // kill_on_drop: a cancelled download must not leave ffmpeg running.
        let mut child = Command::new(&self.executable)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    TranscodeError::NotFound(self.executable.clone())
                } else {
                    TranscodeError::Io(e)
                }
            })?;

        let mut tail = StderrTail::default();
        if let Some(mut stderr) = child.stderr.take() {
            let mut buf = [0u8; 4096];
            loop {
                let n = stderr.read(&mut buf).await?;
                if n == 0 {
                    break;
                }
                tail.push(&buf[..n]);
            }
        }
        let status = child.wait().await?;

        if !status.success() {
            let tail = tail.into_message();
            let message = if tail.is_empty() {
                format!("ffmpeg exited with {}", status)
            } else {
                format!("ffmpeg exited with {}: {}", status, tail)
            };
            return Err(TranscodeError::AbnormalExit {
                code: status.code(),
                message,
            });
        }

        Ok(())
    }
}

/// Last lines of a byte stream, split on `\r` as well as `\n`.
///
/// Memory stays bounded however long the process runs.
#[derive(Debug, Default)]
struct StderrTail {
    lines: VecDeque<String>,
    current: Vec<u8>,
}

impl StderrTail {
    fn push(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            match byte {
                b'\r' | b'\n' => self.finish_line(),
                _ if self.current.len() < STDERR_LINE_MAX_BYTES => self.current.push(byte),
                _ => {}
            }
        }
    }

    fn finish_line(&mut self) {
        let line = String::from_utf8_lossy(&self.current).trim().to_string();
        self.current.clear();
        if line.is_empty() {
            return;
        }
        if self.lines.len() == STDERR_TAIL_LINES {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
    }

    fn into_message(mut self) -> String {
        self.finish_line();
        Vec::from(self.lines).join("\n")
    }
}
