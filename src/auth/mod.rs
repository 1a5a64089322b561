//! radiko authentication.
//!
//! This module provides:
//! - Partial key derivation from the player's key material
//! - Premium login/logout
//! - Two-phase (auth1/auth2) token acquisition with caching

pub mod authenticator;
pub mod key;

pub use authenticator::{
    AuthResult, Authenticate, Authenticator, DEFAULT_REAUTHENTICATION_INTERVAL,
};
pub use key::{AuthKey, DEFAULT_AUTH_KEY};
