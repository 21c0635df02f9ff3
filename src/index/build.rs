use crate::index::reader::Index;
use crate::index::types::{IndexConfig, StringId, WindowHash};
use crate::utils::index_window_hashes;
use rayon::prelude::*;
use rustc_hash::{FxHashMap, FxHashSet};
use tracing::debug;

/// Builds an [`Index`] from a complete string collection
#[derive(Debug, Clone, Default)]
pub struct IndexBuilder {
    config: IndexConfig,
}

impl IndexBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: IndexConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &IndexConfig {
        &self.config
    }

    /// Build the n-gram table for `strings`.
    ///
    /// Every distinct value is recorded once in the bucket of each of its
    /// windows. Duplicate values resolve to the id of their first occurrence,
    /// so buckets never hold the same value twice. Strings shorter than one
    /// window stay in the string list but add nothing to the table.
    pub fn build<T>(&self, strings: Vec<T>) -> Index<T>
    where
        T: AsRef<[u8]> + Sync,
    {
        let canonical = canonical_ids(&strings);
        let parallel = canonical.len() >= self.config.parallel_threshold;
        let mut table: FxHashMap<WindowHash, Vec<StringId>> = FxHashMap::default();

        if parallel {
            // Hash in parallel, merge in corpus order so buckets match a sequential build
            let per_string: Vec<Vec<WindowHash>> = canonical
                .par_iter()
                .map(|&id| index_window_hashes(strings[id].as_ref()))
                .collect();

            for (&id, hashes) in canonical.iter().zip(per_string) {
                record(&mut table, id, hashes);
            }
        } else {
            for &id in &canonical {
                record(&mut table, id, index_window_hashes(strings[id].as_ref()));
            }
        }

        debug!(
            strings = strings.len(),
            unique = canonical.len(),
            buckets = table.len(),
            parallel,
            "built index"
        );

        Index { strings, table }
    }
}

/// Ids of the first occurrence of each distinct value, in input order
fn canonical_ids<T: AsRef<[u8]>>(strings: &[T]) -> Vec<StringId> {
    let mut seen: FxHashSet<&[u8]> = FxHashSet::default();
    let mut ids = Vec::with_capacity(strings.len());
    for (id, s) in strings.iter().enumerate() {
        if seen.insert(s.as_ref()) {
            ids.push(id);
        }
    }
    ids
}

/// Push `id` into the bucket of each hash. `hashes` must be unique.
fn record(table: &mut FxHashMap<WindowHash, Vec<StringId>>, id: StringId, hashes: Vec<WindowHash>) {
    for hash in hashes {
        table.entry(hash).or_default().push(id);
    }
}

impl<T: AsRef<[u8]> + Sync> Index<T> {
    /// Build an index with the default configuration
    pub fn new(strings: Vec<T>) -> Self {
        IndexBuilder::new().build(strings)
    }

    /// Build an index with a custom configuration
    pub fn with_config(strings: Vec<T>, config: &IndexConfig) -> Self {
        IndexBuilder::with_config(config.clone()).build(strings)
    }
}
