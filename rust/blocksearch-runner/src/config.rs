use std::env;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use blocksearch_core::SearchOptions;

pub const MAX_RETAINED_BYTES_VAR: &str = "BLOCKSEARCH_MAX_RETAINED_BYTES";
pub const IDS_MAX_DEPTH_VAR: &str = "BLOCKSEARCH_IDS_MAX_DEPTH";

/// Reads `SearchOptions` from a JSON file; no file means defaults.
pub fn load_options(path: Option<&Path>) -> Result<SearchOptions> {
    let Some(path) = path else {
        return Ok(SearchOptions::default());
    };
    let text = fs::read_to_string(path).with_context(|| format!("reading options file {:?}", path))?;
    serde_json::from_str(&text).with_context(|| format!("parsing options file {:?}", path))
}

/// Environment wins over the file. Values that do not parse are ignored.
pub fn apply_overrides(mut options: SearchOptions, lookup: impl Fn(&str) -> Option<String>) -> SearchOptions {
    if let Some(bytes) = lookup(MAX_RETAINED_BYTES_VAR).and_then(|s| s.trim().parse::<u64>().ok()) {
        options.max_retained_bytes = bytes;
    }
    if let Some(depth) = lookup(IDS_MAX_DEPTH_VAR).and_then(|s| s.trim().parse::<u32>().ok()) {
        options.ids_max_depth = Some(depth);
    }
    options
}

pub fn from_env(path: Option<&Path>) -> Result<SearchOptions> {
    let options = load_options(path)?;
    Ok(apply_overrides(options, |key| env::var(key).ok()))
}
