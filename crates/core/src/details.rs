//! JRE distribution metadata and identity

use serde::{Deserialize, Serialize};

use crate::props::Properties;
use crate::{CoreError, Result};

/// Property key naming the runtime vendor
pub const VENDOR_KEY: &str = "java.runtime.vendor";

/// Property key naming the runtime version
pub const VERSION_KEY: &str = "java.runtime.version";

/// Property key naming the distribution download location
pub const URI_KEY: &str = "java.runtime.uri";

/// Metadata describing one JRE distribution
///
/// Read-only for the lifetime of a build. The identity derived from it is
/// used both as the user-facing detection label and as the cache key, so it
/// must be stable across builds with identical metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JreDetails {
    pub vendor: String,
    pub version: String,
    pub uri: String,
}

impl JreDetails {
    /// Create details from explicit values
    pub fn new(vendor: &str, version: &str, uri: &str) -> Self {
        Self {
            vendor: vendor.to_string(),
            version: version.to_string(),
            uri: uri.to_string(),
        }
    }

    /// Resolve details from system properties, with optional overrides
    ///
    /// Each field falls back to its `java.runtime.*` property when no
    /// override is given; a field present in neither place is an error.
    pub fn resolve(
        props: &Properties,
        vendor: Option<String>,
        version: Option<String>,
        uri: Option<String>,
    ) -> Result<Self> {
        Ok(Self {
            vendor: detail(props, vendor, VENDOR_KEY)?,
            version: detail(props, version, VERSION_KEY)?,
            uri: detail(props, uri, URI_KEY)?,
        })
    }

    /// The stable identity of this distribution: `jre-<vendor>-<version>`
    pub fn id(&self) -> String {
        format!("jre-{}-{}", self.vendor, self.version)
    }
}

fn detail(props: &Properties, override_value: Option<String>, key: &str) -> Result<String> {
    override_value
        .or_else(|| props.get(key).map(str::to_string))
        .ok_or_else(|| CoreError::MissingDetail(key.to_string()))
}
