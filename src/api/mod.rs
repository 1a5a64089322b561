//! radiko HTTP access.
//!
//! This module provides:
//! - The `HttpClient` seam and its reqwest implementation
//! - Request/response types and the shared body-validation contract
//! - Area (prefecture) lookup

pub mod area;
pub mod client;
pub mod types;

pub use area::{AreaPrefecture, AreaService};
pub use client::{HttpClient, ReqwestHttpClient, DEFAULT_TIMEOUT};
pub use types::{HttpRequest, HttpResponse};
