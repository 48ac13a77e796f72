//! Resolves a source reference (URL or local path) to its raw text.

use std::path::Path;
use std::time::Duration;

use tracing::debug;

use crate::error::SourceError;

// Only the http(s) prefix decides; anything else is tried as a path
#[inline(always)]
pub fn is_remote(reference: &str) -> bool {
    reference.starts_with("http://") || reference.starts_with("https://")
}

/// Reads one source and returns its trimmed text.
///
/// URLs are fetched with a plain GET, anything else is tried as a local file. A
/// reference that is neither yields [`SourceError::InvalidReference`], which callers
/// treat as a skip rather than a failure.
pub async fn read_source(reference: &str, timeout: Option<Duration>) -> Result<String, SourceError> {
    if is_remote(reference) {
        return fetch_url(reference, timeout).await;
    }

    let path = Path::new(reference);
    let is_file = tokio::fs::metadata(path)
        .await
        .map(|meta| meta.is_file())
        .unwrap_or(false);
    if !is_file {
        return Err(SourceError::InvalidReference(reference.to_owned()));
    }

    debug!(path = %path.display(), "reading local source");
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| SourceError::Read {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(content.trim().to_owned())
}

// One client per source so no connection outlives its fetch.
async fn fetch_url(url: &str, timeout: Option<Duration>) -> Result<String, SourceError> {
    debug!(url, "downloading");

    let mut builder = reqwest::Client::builder();
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    let client = builder.build()?;

    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(SourceError::Status(status));
    }

    let body = response.text().await?;
    Ok(body.trim().to_owned())
}
