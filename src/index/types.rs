use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Hash of one n-gram window
pub type WindowHash = u32;

/// Position in the index's string list of the first occurrence of a value
pub type StringId = usize;

/// Length of the n-grams used for indexing and searching
pub const WINDOW_LEN: usize = 3;

/// Initial value of both hash accumulators
pub const HASH_SEED: u32 = 5381;

/// Multiplier applied to the odd-offset accumulator when combining
pub const HASH_MULTIPLIER: u32 = 1_566_083_941;

/// Configuration for the index builder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    /// Unique-string count at which window hashing runs on the rayon pool
    pub parallel_threshold: usize,
    /// String count at which the CLI shows a build spinner
    pub progress_threshold: usize,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: 4096,
            progress_threshold: 100_000,
        }
    }
}

impl IndexConfig {
    /// Load a JSON config file. Missing fields take their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        serde_json::from_str(&data)
            .with_context(|| format!("Invalid config {}", path.display()))
    }

    /// Config that never hashes in parallel
    pub fn sequential() -> Self {
        Self {
            parallel_threshold: usize::MAX,
            ..Self::default()
        }
    }
}
