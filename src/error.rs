//! Error types.
//!
//! Per-source failures ([`SourceError`]) never abort a run; the orchestrator turns
//! them into [`SourceOutcome`](crate::pipeline::SourceOutcome) values. Only
//! [`OutputError`] and [`ConfigError`] are fatal, and the binary wraps those with
//! `anyhow` context.

use std::path::PathBuf;

/// Why a single source contributed no lines.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// Neither an http(s) URL nor an existing file. Treated as a skip, not a failure.
    #[error("not a URL or existing file: {0}")]
    InvalidReference(String),

    /// Transport-level failure (DNS, connect, body read, bad URL).
    #[error("request failed: {0}")]
    Fetch(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("HTTP error: {0}")]
    Status(reqwest::StatusCode),

    #[error("failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Content looked like Base64 but could not be turned back into text.
    #[error("failed to decode Base64 content: {0}")]
    Decode(#[from] DecodeError),
}

impl SourceError {
    /// Skips are reported apart from real failures.
    pub fn is_skip(&self) -> bool {
        matches!(self, Self::InvalidReference(_))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("invalid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("decoded bytes are not UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// The result file could not be written. Fatal for the run.
#[derive(Debug, thiserror::Error)]
#[error("cannot write output file {path:?}: {source}")]
pub struct OutputError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read sources file {path:?}: {source}")]
    SourcesFile {
        path: PathBuf,
        source: std::io::Error,
    },
}
