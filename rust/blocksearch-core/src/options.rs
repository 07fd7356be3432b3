use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_RETAINED_BYTES: u64 = 4 * 1024 * 1024 * 1024;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchOptions {
    /// Approximate memory a single search call may hold before giving up.
    pub max_retained_bytes: u64,
    /// Last depth bound iterative deepening tries; `None` keeps deepening.
    pub ids_max_depth: Option<u32>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self { max_retained_bytes: DEFAULT_MAX_RETAINED_BYTES, ids_max_depth: None }
    }
}
