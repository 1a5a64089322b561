//! Recording file names.

use chrono::NaiveDateTime;

use crate::error::{Error, Result};

/// Default container for recordings.
pub const DEFAULT_EXTENSION: &str = "m4a";

/// Sanitize a path component, replacing separators and reserved characters.
///
/// Returns an error on path traversal, null bytes or an empty result.
pub fn sanitize_path_component(name: &str) -> Result<String> {
    if name.contains("..") {
        return Err(Error::Validation(format!(
            "Path traversal detected: '{}'",
            name
        )));
    }

    if name.contains('\0') {
        return Err(Error::Validation(format!(
            "Null bytes not allowed: '{}'",
            name
        )));
    }

    let sanitized: String = name
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    if sanitized.trim().is_empty() {
        return Err(Error::Validation(
            "Path component cannot be empty or whitespace-only".to_string(),
        ));
    }

    Ok(sanitized)
}

/// File name for a recording: `<station>_<YYYYMMDDhhmm>.m4a`.
pub fn recording_filename(station_id: &str, from: &NaiveDateTime) -> Result<String> {
    let station = sanitize_path_component(station_id.trim())?;
    Ok(format!(
        "{}_{}.{}",
        station,
        from.format("%Y%m%d%H%M"),
        DEFAULT_EXTENSION
    ))
}
