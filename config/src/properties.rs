//! User-properties resource reading.
//!
//! Role assignment can fall back to a line-oriented properties file in
//! the form `username = role1,role2`. The read is a scoped, one-shot
//! acquisition: the file is read fully and a missing or unreadable
//! resource degrades to an empty property set with a warning, never an
//! error. The console stays bootable with a maximally-restrictive
//! policy instead of crashing.

use std::collections::HashMap;
use std::path::Path;

use tracing::{debug, warn};

/// Load the user-properties resource, if one is configured.
///
/// Returns an empty map when no path is configured, the file is
/// missing, or the file cannot be read; each of those cases logs a
/// warning and never fails.
pub fn load_user_properties(path: Option<&Path>) -> HashMap<String, String> {
    let Some(path) = path else {
        warn!("No user properties file is configured, using an empty property set");
        return HashMap::new();
    };

    match std::fs::read_to_string(path) {
        Ok(content) => {
            let properties = parse_properties(&content);
            debug!("Loaded {} user properties from {:?}", properties.len(), path);
            properties
        }
        Err(e) => {
            warn!("Could not locate or read user properties file {:?}: {}", path, e);
            HashMap::new()
        }
    }
}

/// Parse line-oriented `key=value` properties text.
///
/// Blank lines and lines starting with `#` or `!` are skipped; a line
/// without a `=` separator is ignored. Keys and values are trimmed.
pub fn parse_properties(content: &str) -> HashMap<String, String> {
    let mut properties = HashMap::new();

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
            continue;
        }
        if let Some((key, value)) = line.split_once('=') {
            let key = key.trim();
            if key.is_empty() {
                continue;
            }
            properties.insert(key.to_string(), value.trim().to_string());
        }
    }

    properties
}
