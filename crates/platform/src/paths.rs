//! Application and cache path layout

use std::env;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::PlatformError;

/// Directory inside the application where the runtime is installed
pub const RUNTIME_DIR: &str = ".java";

/// Properties file read from the application directory
pub const PROPERTIES_FILE: &str = "system.properties";

/// Environment variable overriding the download cache root
pub const CACHE_DIR_ENV: &str = "JAVAPACK_CACHE_DIR";

/// On-disk layout of one application directory
///
/// The runtime directory is owned exclusively by the installer for the
/// duration of a build; nothing else may write into it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildPaths {
    /// Root of the application being prepared
    pub app_dir: PathBuf,
    /// Where the unpacked runtime lives (`<app_dir>/.java`)
    pub runtime_dir: PathBuf,
    /// User-supplied configuration (`<app_dir>/system.properties`)
    pub properties_file: PathBuf,
}

impl BuildPaths {
    /// Create the layout for an application directory
    pub fn new<P: AsRef<Path>>(app_dir: P) -> Self {
        let app_dir = app_dir.as_ref().to_path_buf();
        Self {
            runtime_dir: app_dir.join(RUNTIME_DIR),
            properties_file: app_dir.join(PROPERTIES_FILE),
            app_dir,
        }
    }
}

/// Resolve the default download cache root
///
/// `JAVAPACK_CACHE_DIR` wins when set; otherwise the platform cache directory
/// is used (`~/.cache/javapack/downloads` on Linux).
pub fn default_cache_root() -> Result<PathBuf, PlatformError> {
    if let Ok(dir) = env::var(CACHE_DIR_ENV) {
        debug!(dir = %dir, "cache root overridden by {}", CACHE_DIR_ENV);
        return expand_path(dir);
    }

    let base = dirs::cache_dir().ok_or(PlatformError::NoCacheDirectory)?;
    Ok(base.join("javapack").join("downloads"))
}

/// Expand a path, resolving `~` to the user's home directory
pub fn expand_path<P: AsRef<Path>>(path: P) -> Result<PathBuf, PlatformError> {
    let path = path.as_ref();
    let path_str = path.to_string_lossy();

    if path_str.starts_with("~/") {
        let home = dirs::home_dir().ok_or(PlatformError::NoHomeDirectory)?;
        Ok(home.join(&path_str[2..]))
    } else if path_str == "~" {
        dirs::home_dir().ok_or(PlatformError::NoHomeDirectory)
    } else {
        Ok(path.to_path_buf())
    }
}
