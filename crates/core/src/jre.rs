//! Detect, install, and configure lifecycle for a JRE
//!
//! The orchestrator composes identity resolution, the download cache, and
//! archive installation into the three operations the surrounding build
//! tool calls, in order: `detect`, `install`, `configure`. The calls are
//! independent; `configure` does not require `install` to have run.

use std::path::Path;
use std::time::{Duration, Instant};

use tracing::info;

use javapack_platform::BuildPaths;

use crate::cache::DownloadCache;
use crate::details::JreDetails;
use crate::extract::install_archive;
use crate::opts::memory_opts;
use crate::props::Properties;
use crate::Result;

/// Wall-clock timings of one completed install
#[derive(Debug, Clone, Copy)]
pub struct InstallReport {
    /// Time spent guaranteeing the local distribution file
    pub download: Duration,
    /// Time spent replacing and unpacking the runtime directory
    pub expand: Duration,
}

/// One JRE provisioning run for one application directory
pub struct Jre {
    paths: BuildPaths,
    details: JreDetails,
    properties: Properties,
    cache: DownloadCache,
}

impl Jre {
    /// Create a provisioning run from its collaborators
    pub fn new(
        paths: BuildPaths,
        details: JreDetails,
        properties: Properties,
        cache: DownloadCache,
    ) -> Self {
        Self {
            paths,
            details,
            properties,
            cache,
        }
    }

    /// The identity of the selected distribution, `jre-<vendor>-<version>`
    ///
    /// Always succeeds and has no side effects; the same metadata always
    /// yields the same string.
    pub fn detect(&self) -> String {
        self.details.id()
    }

    /// Download (or reuse) the distribution and unpack it into the runtime
    /// directory
    ///
    /// Safe to call repeatedly: the cache may short-circuit the fetch, and
    /// extraction always replaces the runtime directory wholesale.
    pub fn install(&self) -> Result<InstallReport> {
        let start = Instant::now();
        info!(
            vendor = %self.details.vendor,
            version = %self.details.version,
            uri = %self.details.uri,
            "downloading JRE"
        );
        let archive = self.cache.fetch(&self.details.id(), &self.details.uri)?;
        let download = start.elapsed();
        info!(elapsed = ?download, "distribution ready");

        let start = Instant::now();
        info!(dest = %self.paths.runtime_dir.display(), "expanding JRE");
        install_archive(&archive, &self.paths.runtime_dir)?;
        let expand = start.elapsed();
        info!(elapsed = ?expand, "JRE expanded");

        Ok(InstallReport { download, expand })
    }

    /// Append the resolved memory flags to the caller-owned options list
    ///
    /// Appends zero to three flags in the fixed order heap, permgen, stack;
    /// existing entries are never read or removed.
    pub fn configure(&self, java_opts: &mut Vec<String>) -> Result<()> {
        java_opts.extend(memory_opts(&self.properties)?);
        Ok(())
    }

    /// The directory the runtime is installed into
    pub fn runtime_dir(&self) -> &Path {
        &self.paths.runtime_dir
    }

    /// The distribution metadata this run was constructed with
    pub fn details(&self) -> &JreDetails {
        &self.details
    }
}
