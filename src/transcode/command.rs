//! Immutable description of one transcoder invocation.

use std::path::{Path, PathBuf};

/// One `-i` input with the options that precede it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscodeInput {
    url: String,
    arguments: Vec<String>,
}

impl TranscodeInput {
    pub fn from_url(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            arguments: Vec::new(),
        }
    }

    pub fn argument(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.arguments.push(key.into());
        self.arguments.push(value.into());
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Options followed by `-i <url>`.
    pub fn build_arguments(&self) -> Vec<String> {
        let mut args = self.arguments.clone();
        args.push("-i".to_string());
        args.push(self.url.clone());
        args
    }
}

/// One output file with the options that precede it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscodeOutput {
    path: PathBuf,
    arguments: Vec<String>,
}

impl TranscodeOutput {
    pub fn to_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            arguments: Vec::new(),
        }
    }

    pub fn argument(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.arguments.push(key.into());
        self.arguments.push(value.into());
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Options followed by the output path.
    pub fn build_arguments(&self) -> Vec<String> {
        let mut args = self.arguments.clone();
        args.push(self.path.to_string_lossy().into_owned());
        args
    }
}

/// Inputs, outputs and global flags of a transcoder run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranscodeCommand {
    inputs: Vec<TranscodeInput>,
    outputs: Vec<TranscodeOutput>,
    overwrite_output: bool,
}

impl TranscodeCommand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(mut self, input: TranscodeInput) -> Self {
        self.inputs.push(input);
        self
    }

    pub fn output(mut self, output: TranscodeOutput) -> Self {
        self.outputs.push(output);
        self
    }

    pub fn overwrite_output(mut self, overwrite: bool) -> Self {
        self.overwrite_output = overwrite;
        self
    }

    pub fn inputs(&self) -> &[TranscodeInput] {
        &self.inputs
    }

    pub fn outputs(&self) -> &[TranscodeOutput] {
        &self.outputs
    }

    pub fn overwrites_output(&self) -> bool {
        self.overwrite_output
    }

    /// Full argument list, excluding the program name.
    pub fn build_arguments(&self) -> Vec<String> {
        let mut args = vec![
            "-hide_banner".to_string(),
            "-nostdin".to_string(),
            "-nostats".to_string(),
            if self.overwrite_output { "-y" } else { "-n" }.to_string(),
        ];
        for input in &self.inputs {
            args.extend(input.build_arguments());
        }
        for output in &self.outputs {
            args.extend(output.build_arguments());
        }
        args
    }
}
