//! Source resolution: turn a caller-supplied path or URL into a readable local file.
//!
//! Remote documents are downloaded into a fresh directory under the configured temp root.
//! The directory is owned by the returned [`ResolvedSource`] and removed when it drops, so
//! concurrent downloads sharing a basename never overwrite each other and nothing is left
//! behind after a conversion.

use crate::parsing::types::ParseError;
use reqwest::{Client, StatusCode, Url};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// File name used when the URL path has no final segment.
pub const FALLBACK_FILE_NAME: &str = "downloaded_file";

const TEMP_DIR_PREFIX: &str = "mineru-";

/// A local file ready to be read by the upstream client.
#[derive(Debug)]
pub enum ResolvedSource {
    /// Caller supplied an existing local path; it is used in place.
    Local(PathBuf),
    /// Caller supplied a URL; the body lives in a scoped temp directory.
    Downloaded {
        /// Path of the downloaded file.
        path: PathBuf,
        /// Owning handle; dropping it deletes the download.
        dir: TempDir,
    },
}

impl ResolvedSource {
    /// Path to the readable file regardless of how it was obtained.
    pub fn path(&self) -> &Path {
        match self {
            Self::Local(path) => path,
            Self::Downloaded { path, .. } => path,
        }
    }
}

/// Resolves file references into local files.
#[derive(Clone)]
pub struct SourceResolver {
    client: Client,
    temp_root: PathBuf,
}

impl SourceResolver {
    /// Create a resolver that downloads into `temp_root`.
    pub fn new(client: Client, temp_root: impl Into<PathBuf>) -> Self {
        Self {
            client,
            temp_root: temp_root.into(),
        }
    }

    /// Resolve a path or HTTP/HTTPS URL to a local file.
    pub async fn resolve(&self, file_source: &str) -> Result<ResolvedSource, ParseError> {
        match remote_url(file_source) {
            Some(url) => self.download(url).await,
            None => resolve_local(file_source).await,
        }
    }

    async fn download(&self, url: Url) -> Result<ResolvedSource, ParseError> {
        tracing::info!(url = %url, "Downloading document");
        let download_failed = |reason: String| ParseError::DownloadFailed {
            url: url.to_string(),
            reason,
        };

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|err| download_failed(err.to_string()))?;

        let status = response.status();
        if status != StatusCode::OK {
            tracing::warn!(url = %url, %status, "Download rejected");
            return Err(download_failed(format!("HTTP {status}")));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|err| download_failed(err.to_string()))?;

        let dir = tempfile::Builder::new()
            .prefix(TEMP_DIR_PREFIX)
            .tempdir_in(&self.temp_root)
            .map_err(|err| ParseError::io(&self.temp_root, err))?;
        let path = dir.path().join(file_name_from_url(&url));
        tokio::fs::write(&path, &bytes)
            .await
            .map_err(|err| ParseError::io(&path, err))?;

        tracing::info!(path = %path.display(), bytes = bytes.len(), "Downloaded file");
        Ok(ResolvedSource::Downloaded { path, dir })
    }
}

async fn resolve_local(file_source: &str) -> Result<ResolvedSource, ParseError> {
    let path = PathBuf::from(file_source);
    match tokio::fs::try_exists(&path).await {
        Ok(true) => {
            tracing::debug!(path = %path.display(), "Resolved local file");
            Ok(ResolvedSource::Local(path))
        }
        _ => Err(ParseError::NotFound { path }),
    }
}

/// Parse `file_source` as a URL when its scheme is `http` or `https`.
pub fn remote_url(file_source: &str) -> Option<Url> {
    Url::parse(file_source)
        .ok()
        .filter(|url| matches!(url.scheme(), "http" | "https"))
}

/// Derive the download file name from the last non-empty URL path segment.
pub fn file_name_from_url(url: &Url) -> String {
    url.path_segments()
        .and_then(|mut segments| segments.rev().find(|segment| !segment.is_empty()))
        .unwrap_or(FALLBACK_FILE_NAME)
        .to_string()
}
