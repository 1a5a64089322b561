//! rdkdler - radiko time-shift recorder
//!
//! This library provides radiko authentication and ffmpeg-driven recording of
//! time-shift programs.
//!
//! # Features
//!
//! - Two-phase (auth1/auth2) authentication with token caching
//! - Premium login for area-free recording
//! - Area (prefecture) lookup
//! - Cover art embedding
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use chrono::NaiveDate;
//! use rdkdler::{Authenticator, DownloadRequest, DownloadService, FfmpegFactory, ReqwestHttpClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Arc::new(ReqwestHttpClient::default());
//!     let authenticator = Arc::new(Authenticator::new(client));
//!     let service = DownloadService::new(authenticator, Arc::new(FfmpegFactory::new(None)));
//!
//!     let day = NaiveDate::from_ymd_opt(2025, 12, 22).unwrap();
//!     let request = DownloadRequest::new(
//!         "TBS",
//!         day.and_hms_opt(10, 0, 0).unwrap(),
//!         day.and_hms_opt(11, 0, 0).unwrap(),
//!         "TBS.m4a",
//!     );
//!     service.download(&request).await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod auth;
pub mod cli;
pub mod config;
pub mod download;
pub mod error;
pub mod fs;
pub mod output;
pub mod transcode;

#[cfg(test)]
pub(crate) mod test_support;

// Re-exports for convenience
pub use api::{AreaPrefecture, AreaService, HttpClient, ReqwestHttpClient};
pub use auth::{AuthResult, Authenticate, Authenticator};
pub use config::Config;
pub use download::{DownloadRequest, DownloadService};
pub use error::{Error, Result};
pub use transcode::FfmpegFactory;
