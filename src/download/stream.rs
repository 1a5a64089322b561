//! Time-shift playlist URL and transcoder arguments.

use std::path::Path;

use chrono::NaiveDateTime;
use rand::RngCore;

use crate::auth::AuthResult;
use crate::transcode::{TranscodeCommand, TranscodeInput, TranscodeOutput};

const PLAYLIST_URL: &str = "https://radiko.jp/v2/api/ts/playlist.m3u8";

const X_RADIKO_AREAID: &str = "X-Radiko-AreaId";
const X_RADIKO_AUTHTOKEN: &str = "X-Radiko-AuthToken";

/// Timestamp format used by the playlist query.
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";

/// Length of the per-request `lsid` in hex characters.
pub const LSID_LEN: usize = 32;

/// Format a local time as `YYYYMMDDhhmmss`.
pub fn format_timestamp(time: &NaiveDateTime) -> String {
    time.format(TIMESTAMP_FORMAT).to_string()
}

/// A fresh 32-character lowercase hex correlation id.
pub fn generate_lsid<R: RngCore + ?Sized>(rng: &mut R) -> String {
    let mut buf = [0u8; LSID_LEN / 2];
    rng.fill_bytes(&mut buf);
    hex::encode(buf)
}

/// Playlist URL plus the headers ffmpeg must send with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamDescriptor {
    pub url: String,
    pub headers: String,
}

impl StreamDescriptor {
    pub fn new(
        station_id: &str,
        from: &NaiveDateTime,
        to: &NaiveDateTime,
        auth: &AuthResult,
        lsid: &str,
    ) -> Self {
        let from = format_timestamp(from);
        let to = format_timestamp(to);

        let url = format!(
            "{PLAYLIST_URL}?station_id={station_id}&start_at={from}&ft={from}&end_at={to}&to={to}&seek={from}&l=15&lsid={lsid}&type=c"
        );
        let headers = [
            format!("{}: {}", X_RADIKO_AREAID, auth.area_id),
            format!("{}: {}", X_RADIKO_AUTHTOKEN, auth.authtoken),
        ]
        .join("\r\n");

        Self { url, headers }
    }
}

/// Codec used to embed a cover image as an attached picture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageCodec {
    Mjpeg,
    Png,
}

impl ImageCodec {
    /// Codec for a cover URL, chosen by its (case-insensitive) extension.
    pub fn from_cover_url(cover_url: &str) -> Option<Self> {
        let lower = cover_url.to_lowercase();
        if lower.ends_with(".jpg") || lower.ends_with(".jpeg") {
            Some(ImageCodec::Mjpeg)
        } else if lower.ends_with(".png") {
            Some(ImageCodec::Png)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ImageCodec::Mjpeg => "mjpeg",
            ImageCodec::Png => "png",
        }
    }
}

/// Build the ffmpeg invocation recording `stream` into `output`.
///
/// A cover whose extension has no known codec is ignored.
pub fn build_command(
    stream: &StreamDescriptor,
    output: &Path,
    cover_url: Option<&str>,
) -> TranscodeCommand {
    let input = TranscodeInput::from_url(stream.url.as_str())
        .argument("-fflags", "+discardcorrupt")
        .argument("-headers", stream.headers.as_str());

    let mut audio = TranscodeOutput::to_path(output)
        .argument("-map", "0:a")
        .argument("-c:a", "copy")
        .argument("-bsf:a", "aac_adtstoasc");

    let mut command = TranscodeCommand::new().input(input);

    let cover = cover_url.and_then(|url| ImageCodec::from_cover_url(url).map(|codec| (url, codec)));
    if let Some((url, codec)) = cover {
        command = command.input(TranscodeInput::from_url(url));
        audio = audio
            .argument("-map", "1:v")
            .argument("-c:v", codec.as_str())
            .argument("-disposition:v:0", "attached_pic");
    }

    command.output(audio).overwrite_output(true)
}
