//! Memory option resolution
//!
//! Reads the well-known memory sizing keys from system properties and
//! formats them into JVM startup flags. An absent key contributes no flag;
//! a value containing whitespace is a fatal configuration error. The empty
//! string contains no whitespace and is formatted verbatim.

use crate::props::Properties;
use crate::{CoreError, Result};

/// Property key for the maximum heap size (`-Xmx`)
pub const HEAP_SIZE: &str = "java.heap.size";

/// Property key for the maximum PermGen size (`-XX:MaxPermSize=`)
pub const PERMGEN_SIZE: &str = "java.permgen.size";

/// Property key for the thread stack size (`-Xss`)
pub const STACK_SIZE: &str = "java.stack.size";

/// Resolve all memory options in their fixed order: heap, permgen, stack
pub fn memory_opts(props: &Properties) -> Result<Vec<String>> {
    let mut opts = Vec::new();

    for resolved in [
        resolve_heap_size(props)?,
        resolve_permgen_size(props)?,
        resolve_stack_size(props)?,
    ] {
        if let Some(opt) = resolved {
            opts.push(opt);
        }
    }

    Ok(opts)
}

/// Resolve the heap size flag, e.g. `-Xmx512m`
pub fn resolve_heap_size(props: &Properties) -> Result<Option<String>> {
    resolve(props, HEAP_SIZE, "heap size", "-Xmx")
}

/// Resolve the PermGen size flag, e.g. `-XX:MaxPermSize=128m`
pub fn resolve_permgen_size(props: &Properties) -> Result<Option<String>> {
    resolve(props, PERMGEN_SIZE, "PermGen size", "-XX:MaxPermSize=")
}

/// Resolve the stack size flag, e.g. `-Xss1m`
pub fn resolve_stack_size(props: &Properties) -> Result<Option<String>> {
    resolve(props, STACK_SIZE, "stack size", "-Xss")
}

fn resolve(
    props: &Properties,
    key: &str,
    name: &'static str,
    prefix: &str,
) -> Result<Option<String>> {
    let Some(value) = props.get(key) else {
        return Ok(None);
    };

    if value.chars().any(char::is_whitespace) {
        return Err(CoreError::EmbeddedWhitespace {
            name,
            value: value.to_string(),
        });
    }

    Ok(Some(format!("{}{}", prefix, value)))
}
