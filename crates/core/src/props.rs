//! Java-style properties files
//!
//! The application directory may carry a `system.properties` file with flat
//! string keys (`java.heap.size=512m`). This module parses that format:
//! `#` and `!` comment lines, blank lines skipped, `key=value` or
//! `key: value` with both sides trimmed.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::Result;

/// Read-only string-keyed configuration store
#[derive(Debug, Clone, Default)]
pub struct Properties {
    entries: BTreeMap<String, String>,
}

impl Properties {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Load properties from a file
    ///
    /// A missing file is not an error: every lookup is simply absent.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no properties file");
            return Ok(Self::new());
        }

        let text = fs::read_to_string(path)?;
        let props = Self::parse(&text);
        debug!(path = %path.display(), count = props.len(), "loaded properties");
        Ok(props)
    }

    /// Parse properties from text
    pub fn parse(text: &str) -> Self {
        let mut entries = BTreeMap::new();

        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
                continue;
            }

            // First '=' or ':' separates key from value; a bare key maps to ""
            match line.find(['=', ':']) {
                Some(pos) => {
                    let key = line[..pos].trim();
                    let value = line[pos + 1..].trim();
                    entries.insert(key.to_string(), value.to_string());
                }
                None => {
                    entries.insert(line.to_string(), String::new());
                }
            }
        }

        Self { entries }
    }

    /// Look up a value by key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Set a value, replacing any previous one
    pub fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
