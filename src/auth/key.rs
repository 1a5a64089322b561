//! Partial key derivation for the auth2 handshake.

use std::fmt;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// Key material embedded in radiko's HTML5 player.
///
/// Preserve byte-for-byte: the server checks slices of exactly this value.
pub const DEFAULT_AUTH_KEY: &str = "bcd151073c03b352e1ef2fd66c32209da9ca0afa";

/// Fixed key material the partial key is sliced from.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthKey(Vec<u8>);

impl AuthKey {
    pub fn new(key: impl Into<Vec<u8>>) -> Self {
        Self(key.into())
    }

    /// Base64 of key bytes `[offset, min(len, offset + length))`.
    ///
    /// Out-of-range values clip to a shorter or empty slice.
    pub fn partial_key(&self, offset: usize, length: usize) -> String {
        let end = self.0.len().min(offset.saturating_add(length));
        let slice = self.0.get(offset..end).unwrap_or_default();
        STANDARD.encode(slice)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for AuthKey {
    fn default() -> Self {
        Self::new(DEFAULT_AUTH_KEY)
    }
}

impl fmt::Debug for AuthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AuthKey(<{} bytes redacted>)", self.0.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_key_known_values() {
        let key = AuthKey::default();
        assert_eq!(key.partial_key(10, 16), "MDNiMzUyZTFlZjJmZDY2Yw==");
        assert_eq!(key.partial_key(0, 5), "YmNkMTU=");
        assert_eq!(
            key.partial_key(0, 40),
            "YmNkMTUxMDczYzAzYjM1MmUxZWYyZmQ2NmMzMjIwOWRhOWNhMGFmYQ=="
        );
    }

    #[test]
    fn test_partial_key_clips_to_key_length() {
        let key = AuthKey::default();
        assert_eq!(key.partial_key(35, 10), "YTBhZmE=");
        assert_eq!(key.partial_key(0, usize::MAX), key.partial_key(0, key.len()));
    }

    #[test]
    fn test_partial_key_out_of_range() {
        let key = AuthKey::default();
        assert_eq!(key.partial_key(40, 4), "");
        assert_eq!(key.partial_key(100, 3), "");
        assert_eq!(key.partial_key(usize::MAX, usize::MAX), "");
        assert_eq!(key.partial_key(3, 0), "");
    }

    #[test]
    fn test_partial_key_matches_slice() {
        let key = AuthKey::new("0123456789");
        for offset in 0..12 {
            for length in 0..12 {
                let end = 10.min(offset + length);
                let expected = if offset >= 10 {
                    String::new()
                } else {
                    STANDARD.encode(&b"0123456789"[offset..end])
                };
                assert_eq!(key.partial_key(offset, length), expected);
            }
        }
    }

    #[test]
    fn test_debug_is_redacted() {
        let debug = format!("{:?}", AuthKey::default());
        assert!(!debug.contains(DEFAULT_AUTH_KEY));
        assert!(debug.contains("40 bytes"));
    }
}
