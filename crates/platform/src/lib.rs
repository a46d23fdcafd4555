//! Platform abstractions for javapack
//!
//! This crate provides the on-disk conventions shared by the rest of the
//! workspace:
//! - Application directory layout (runtime directory, properties file)
//! - Download cache root resolution
//! - Path expansion for user-supplied locations

mod error;
mod paths;

pub use error::PlatformError;
pub use paths::{
    BuildPaths, CACHE_DIR_ENV, PROPERTIES_FILE, RUNTIME_DIR, default_cache_root, expand_path,
};
