//! Download cache for JRE distributions
//!
//! Distributions are cached under `<root>/<identity>/<file>` where the file
//! name is derived from the source URI. A file that is already present is
//! returned without touching the network; retry, checksum verification, and
//! eviction are out of scope.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};
use tempfile::NamedTempFile;
use tracing::{debug, info};

use javapack_platform::default_cache_root;

use crate::{CoreError, Result};

/// Content cache keyed by distribution identity and source URI
pub struct DownloadCache {
    root: PathBuf,
}

impl DownloadCache {
    /// Create a cache rooted at an explicit directory
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    /// Create a cache at the default platform location
    pub fn open() -> Result<Self> {
        Ok(Self::new(default_cache_root()?))
    }

    /// The cache root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Where a given (key, uri) pair is stored on disk
    pub fn cached_path(&self, key: &str, uri: &str) -> PathBuf {
        self.root.join(sanitize(key)).join(uri_to_filename(uri))
    }

    /// Guarantee a local copy of `uri` for the distribution named by `key`
    ///
    /// Blocks until the file is available or the fetch fails. A failed fetch
    /// leaves no partial file behind.
    pub fn fetch(&self, key: &str, uri: &str) -> Result<PathBuf> {
        let dest = self.cached_path(key, uri);

        if dest.exists() {
            debug!(path = %dest.display(), "cache hit");
            return Ok(dest);
        }

        let parent = dest.parent().unwrap_or(&self.root);
        fs::create_dir_all(parent)?;

        info!(uri = %uri, "downloading");

        let mut response = reqwest::blocking::get(uri)?;
        if !response.status().is_success() {
            return Err(CoreError::Fetch {
                uri: uri.to_string(),
                message: format!("HTTP {}", response.status()),
            });
        }

        // Download to a sibling temp file so an interrupted fetch never
        // masquerades as a cached distribution.
        let mut tmp = NamedTempFile::new_in(parent)?;
        let size = io::copy(&mut response, tmp.as_file_mut())?;
        tmp.persist(&dest).map_err(|e| e.error)?;

        debug!(path = %dest.display(), size, "download complete");
        Ok(dest)
    }
}

/// Derive a file name from a URI, preserving the archive extension
///
/// Takes the last path segment with any query string removed; falls back to
/// a hash of the URI when no usable segment exists.
fn uri_to_filename(uri: &str) -> String {
    if let Some(segment) = uri.rsplit('/').next() {
        let segment = segment.split('?').next().unwrap_or(segment);
        let sanitized = sanitize(segment);
        if !sanitized.is_empty() && sanitized != "." && sanitized != ".." {
            return sanitized;
        }
    }

    let mut hasher = Sha256::new();
    hasher.update(uri.as_bytes());
    format!("download_{}", &hex::encode(hasher.finalize())[..16])
}

/// Keep alphanumerics, dash, underscore, and dot; replace everything else
fn sanitize(component: &str) -> String {
    component
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '_' || c == '.' {
                c
            } else {
                '_'
            }
        })
        .collect()
}
