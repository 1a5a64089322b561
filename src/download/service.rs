//! Time-shift recording orchestration.

use std::path::PathBuf;
use std::sync::Arc;

use chrono::NaiveDateTime;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use tokio::sync::Mutex;

use crate::auth::Authenticate;
use crate::download::stream::{build_command, generate_lsid, StreamDescriptor};
use crate::error::{Error, Result};
use crate::transcode::{TranscodeError, TranscoderFactory};

/// What to record and where to put it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadRequest {
    pub station_id: String,
    pub from: NaiveDateTime,
    pub to: NaiveDateTime,
    pub output: PathBuf,
    pub cover_url: Option<String>,
}

impl DownloadRequest {
    pub fn new(
        station_id: impl Into<String>,
        from: NaiveDateTime,
        to: NaiveDateTime,
        output: impl Into<PathBuf>,
    ) -> Self {
        Self {
            station_id: station_id.into(),
            from,
            to,
            output: output.into(),
            cover_url: None,
        }
    }

    /// Embed the image at `cover_url` as cover art.
    pub fn with_cover(mut self, cover_url: impl Into<String>) -> Self {
        self.cover_url = Some(cover_url.into());
        self
    }

    fn validate(&self) -> Result<()> {
        if self.station_id.trim().is_empty() {
            return Err(Error::Validation("station id must not be blank".to_string()));
        }
        if self.to <= self.from {
            return Err(Error::Validation(format!(
                "end time {} must be after start time {}",
                self.to, self.from
            )));
        }
        Ok(())
    }
}

/// Records time-shifted programs through the transcoder.
///
/// Downloads on one service run one at a time.
pub struct DownloadService {
    authenticator: Arc<dyn Authenticate>,
    transcoder_factory: Arc<dyn TranscoderFactory>,
    // Also serializes downloads.
    rng: Mutex<Box<dyn RngCore + Send>>,
}

impl DownloadService {
    pub fn new(
        authenticator: Arc<dyn Authenticate>,
        transcoder_factory: Arc<dyn TranscoderFactory>,
    ) -> Self {
        Self {
            authenticator,
            transcoder_factory,
            rng: Mutex::new(Box::new(StdRng::from_entropy())),
        }
    }

    /// Replace the random source used for `lsid` generation.
    pub fn with_rng(mut self, rng: impl RngCore + Send + 'static) -> Self {
        self.rng = Mutex::new(Box::new(rng));
        self
    }

    /// Record `request.from..request.to` of a station into `request.output`.
    ///
    /// Auth failures propagate unchanged. An abnormal transcoder exit becomes
    /// [`Error::Download`]; nothing is retried.
    pub async fn download(&self, request: &DownloadRequest) -> Result<()> {
        request.validate()?;

        let mut rng = self.rng.lock().await;

        let auth = self.authenticator.auth().await?;
        tracing::debug!("Recording with token for area {}", auth.area_id);

        let lsid = generate_lsid(&mut **rng);
        let stream = StreamDescriptor::new(
            &request.station_id,
            &request.from,
            &request.to,
            &auth,
            &lsid,
        );
        tracing::debug!("Playlist URL: {}", stream.url);

        let command = build_command(&stream, &request.output, request.cover_url.as_deref());
        if command.inputs().len() > 1 {
            tracing::debug!("Embedding cover art from {}", command.inputs()[1].url());
        }

        tracing::info!(
            "Recording {} from {} to {} into {}",
            request.station_id,
            request.from,
            request.to,
            request.output.display()
        );

        let transcoder = self.transcoder_factory.create();
        match transcoder.execute(&command).await {
            Ok(()) => {
                tracing::info!("Saved {}", request.output.display());
                Ok(())
            }
            Err(e @ TranscodeError::AbnormalExit { .. }) => Err(Error::Download { source: e }),
            Err(e) => Err(e.into()),
        }
    }
}
