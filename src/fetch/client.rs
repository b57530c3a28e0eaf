//! HTTP client wrapper that fetches one URL and saves it to disk.
//!
//! This module provides the `Fetcher` struct which runs the whole
//! request → classify → name → write cycle for a single URL.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::Local;
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info, instrument, warn};
use url::Url;

use super::classify::{ContentKind, classify};
use super::error::FetchError;
use super::filename::{derive_filename, strip_marker, with_collision_suffix};

/// Highest numeric suffix tried before giving up on a colliding filename.
const MAX_COLLISION_SUFFIX: u32 = 999;

/// Configuration for a [`Fetcher`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchConfig {
    /// Directory that receives saved files. Created on demand.
    pub output_dir: PathBuf,
}

impl FetchConfig {
    /// Creates a configuration writing into `output_dir`.
    #[must_use]
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }
}

/// A successfully fetched and saved resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedFile {
    /// Filename inside the output directory.
    pub filename: String,
    /// Full path of the written file.
    pub path: PathBuf,
    /// Classification that chose the extension.
    pub kind: ContentKind,
    /// Number of body bytes written.
    pub bytes: u64,
}

/// Fetches URLs and persists their bodies.
///
/// Create once and reuse for every URL of a run; the inner client pools
/// connections. Requests carry no custom headers and use the client's
/// default redirect, TLS and timeout behaviour.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
    config: FetchConfig,
}

impl Fetcher {
    /// Creates a fetcher for the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Client`] if the HTTP client cannot be built
    /// (for example, no usable TLS backend).
    pub fn new(config: FetchConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .gzip(true)
            .build()
            .map_err(|source| FetchError::Client { source })?;
        Ok(Self { client, config })
    }

    /// Returns the active configuration.
    #[must_use]
    pub fn config(&self) -> &FetchConfig {
        &self.config
    }

    /// Fetches `url` and writes the response body into the output directory.
    ///
    /// A single leading `@` is stripped first. The saved name is
    /// `<base>_<YYYYMMDD_HHMMSS>.<json|txt>`; if that name is already taken,
    /// `_1`, `_2`, ... is appended before the extension instead of overwriting.
    ///
    /// # Errors
    ///
    /// Returns `FetchError` if:
    /// - The output directory cannot be created
    /// - The URL is not an absolute http/https URL
    /// - The request fails (network error, timeout)
    /// - The server returns a non-success status
    /// - Writing the file fails
    #[must_use = "fetch result carries the saved filename or the failure reason"]
    #[instrument(skip(self), fields(output_dir = %self.config.output_dir.display()))]
    pub async fn fetch(&self, url: &str) -> Result<FetchedFile, FetchError> {
        let url = strip_marker(url);
        let output_dir = &self.config.output_dir;

        tokio::fs::create_dir_all(output_dir)
            .await
            .map_err(|e| FetchError::io(output_dir.clone(), e))?;

        let parsed = parse_http_url(url)?;

        debug!("sending request");
        let response = self
            .client
            .get(parsed.clone())
            .send()
            .await
            .map_err(|e| FetchError::from_request(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::http_status(url, status.as_u16()));
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::from_request(url, e))?;

        let kind = classify(content_type.as_deref(), &body);
        debug!(
            content_type = content_type.as_deref().unwrap_or(""),
            %kind,
            bytes = body.len(),
            "classified response"
        );

        let filename = derive_filename(&parsed, kind, &Local::now());
        let (filename, path) = write_new_file(output_dir, &filename, &body).await?;

        info!(path = %path.display(), bytes = body.len(), "file saved");

        Ok(FetchedFile {
            filename,
            path,
            kind,
            bytes: body.len() as u64,
        })
    }
}

/// Parses and checks that the URL is absolute http/https with a host.
fn parse_http_url(raw: &str) -> Result<Url, FetchError> {
    let parsed = Url::parse(raw).map_err(|e| FetchError::invalid_url(raw, e.to_string()))?;
    match parsed.scheme() {
        "http" | "https" => {}
        scheme => {
            return Err(FetchError::invalid_url(
                raw,
                format!("scheme '{scheme}' is not supported"),
            ));
        }
    }
    if parsed.host().is_none() {
        return Err(FetchError::invalid_url(raw, "URL has no host"));
    }
    Ok(parsed)
}

/// Writes `body` to a file that did not exist before.
///
/// Uses create-new opens so an existing file (from this run or another
/// process) is never truncated. Returns the filename actually used.
async fn write_new_file(
    dir: &Path,
    filename: &str,
    body: &[u8],
) -> Result<(String, PathBuf), FetchError> {
    let mut candidate = filename.to_string();
    let mut suffix = 0;

    loop {
        let path = dir.join(&candidate);
        match OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await
        {
            Ok(mut file) => {
                if let Err(e) = write_all_and_flush(&mut file, body).await {
                    debug!(path = %path.display(), "cleaning up partial file after error");
                    let _ = tokio::fs::remove_file(&path).await;
                    return Err(FetchError::io(path, e));
                }
                if suffix > 0 {
                    warn!(
                        requested = %filename,
                        saved = %candidate,
                        "filename already existed, saved under a suffixed name"
                    );
                }
                return Ok((candidate, path));
            }
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                suffix += 1;
                if suffix > MAX_COLLISION_SUFFIX {
                    return Err(FetchError::NameExhausted {
                        dir: dir.to_path_buf(),
                        filename: filename.to_string(),
                    });
                }
                candidate = with_collision_suffix(filename, suffix);
            }
            Err(e) => return Err(FetchError::io(path, e)),
        }
    }
}

async fn write_all_and_flush(file: &mut tokio::fs::File, body: &[u8]) -> std::io::Result<()> {
    file.write_all(body).await?;
    file.flush().await
}
