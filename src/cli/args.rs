//! Command-line argument definitions using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::Config;

/// radiko time-shift recorder CLI.
#[derive(Parser, Debug)]
#[command(
    name = "rdkdler",
    version,
    about = "Record radiko time-shift programs",
    long_about = "A CLI tool to record radiko time-shift programs with ffmpeg.\n\n\
                  Premium (area-free) recording is used when account credentials are configured."
)]
pub struct Args {
    /// Path to configuration file. Defaults to the platform config directory.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// radiko premium mail address.
    #[arg(long, global = true, env = "RDKDLER_MAIL")]
    pub mail: Option<String>,

    /// radiko premium password.
    #[arg(long, global = true, env = "RDKDLER_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Directory containing the ffmpeg binary.
    #[arg(long = "ffmpeg-dir", global = true, env = "RDKDLER_FFMPEG_DIR")]
    pub ffmpeg_directory: Option<PathBuf>,

    /// Enable debug logging.
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Record a time-shift program.
    Download(DownloadArgs),

    /// Show the area radiko assigns to this connection.
    Area,
}

#[derive(clap::Args, Debug)]
pub struct DownloadArgs {
    /// Station id, e.g. TBS.
    #[arg(short, long)]
    pub station: String,

    /// Program start, e.g. 2025-12-22T10:00:00 or 202512221000.
    #[arg(short, long)]
    pub from: String,

    /// Program end, same formats as --from.
    #[arg(short, long)]
    pub to: String,

    /// Output file. Defaults to <output dir>/<station>_<start>.m4a.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Directory for recordings without --output.
    #[arg(short = 'd', long = "directory")]
    pub output_directory: Option<PathBuf>,

    /// Cover image URL (.jpg, .jpeg or .png) to embed.
    #[arg(long)]
    pub cover: Option<String>,
}

impl Args {
    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(&self, config: &mut Config) {
        if let Some(mail) = &self.mail {
            config.account.mail = Some(mail.clone());
        }

        if let Some(password) = &self.password {
            config.account.password = Some(password.clone());
        }

        if let Some(dir) = &self.ffmpeg_directory {
            config.ffmpeg.directory = Some(dir.clone());
        }

        if let Command::Download(download) = &self.command {
            if let Some(dir) = &download.output_directory {
                config.output.directory = Some(dir.clone());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_download() {
        let args = Args::try_parse_from([
            "rdkdler",
            "download",
            "--station",
            "TBS",
            "--from",
            "202512221000",
            "--to",
            "202512221100",
            "--cover",
            "https://example.com/cover.png",
        ])
        .unwrap();

        match args.command {
            Command::Download(download) => {
                assert_eq!(download.station, "TBS");
                assert_eq!(download.from, "202512221000");
                assert_eq!(download.to, "202512221100");
                assert_eq!(download.cover.as_deref(), Some("https://example.com/cover.png"));
                assert!(download.output.is_none());
            }
            Command::Area => panic!("expected download"),
        }
    }

    #[test]
    fn test_download_requires_times() {
        assert!(Args::try_parse_from(["rdkdler", "download", "--station", "TBS"]).is_err());
    }

    #[test]
    fn test_merge_into_config() {
        let args = Args::try_parse_from([
            "rdkdler",
            "--mail",
            "user@example.com",
            "--password",
            "secret",
            "--ffmpeg-dir",
            "/opt/ffmpeg",
            "download",
            "-s",
            "TBS",
            "-f",
            "202512221000",
            "-t",
            "202512221100",
            "-d",
            "/recordings",
        ])
        .unwrap();

        let mut config = Config::default();
        args.merge_into_config(&mut config);

        assert_eq!(
            config.account.credentials(),
            Some(("user@example.com", "secret"))
        );
        assert_eq!(config.ffmpeg.directory, Some(PathBuf::from("/opt/ffmpeg")));
        assert_eq!(config.output.directory, Some(PathBuf::from("/recordings")));
    }

    #[test]
    fn test_merge_keeps_config_values() {
        let args = Args::try_parse_from(["rdkdler", "area"]).unwrap();

        let mut config = Config::default();
        config.ffmpeg.directory = Some(PathBuf::from("/usr/local/bin"));
        args.merge_into_config(&mut config);

        assert_eq!(config.ffmpeg.directory, Some(PathBuf::from("/usr/local/bin")));
    }
}
