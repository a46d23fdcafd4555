//! javapack-core: the JRE provisioning pipeline
//!
//! This crate implements the build step that prepares a Java application to
//! run: resolving which runtime the application needs, downloading and
//! caching its distribution, unpacking it into the application directory,
//! and deriving the memory options for the eventual start command.

mod cache;
mod details;
mod error;
mod extract;
mod jre;
mod opts;
mod props;

pub use cache::DownloadCache;
pub use details::{JreDetails, URI_KEY, VENDOR_KEY, VERSION_KEY};
pub use error::CoreError;
pub use extract::install_archive;
pub use jre::{InstallReport, Jre};
pub use opts::{
    HEAP_SIZE, PERMGEN_SIZE, STACK_SIZE, memory_opts, resolve_heap_size, resolve_permgen_size,
    resolve_stack_size,
};
pub use props::Properties;

// Re-export the path layout so callers rarely need the platform crate directly
pub use javapack_platform::BuildPaths;

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
