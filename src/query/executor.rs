use crate::index::reader::Index;
use crate::index::types::{StringId, WindowHash};
use crate::query::planner::QueryPlan;
use crate::utils::contains;
use rustc_hash::FxHashSet;
use tracing::trace;

/// Runs [`QueryPlan`]s against one index
pub struct QueryExecutor<'a, T> {
    index: &'a Index<T>,
}

impl<'a, T: AsRef<[u8]>> QueryExecutor<'a, T> {
    pub fn new(index: &'a Index<T>) -> Self {
        Self { index }
    }

    /// Plan and execute a query, returning verified matches
    pub fn execute(&self, needle: &[u8]) -> Vec<&'a T> {
        let plan = QueryPlan::for_needle(needle);
        trace!(?plan, needle_len = needle.len(), "planned query");

        match plan {
            QueryPlan::All => {
                let index = self.index;
                index.strings.iter().collect()
            }
            QueryPlan::BruteForce => self.brute_force(needle),
            QueryPlan::Windows(hashes) => {
                let candidates = self.narrow(&hashes);
                if candidates.is_empty() {
                    return Vec::new();
                }
                self.verify(candidates, needle)
            }
        }
    }

    /// Scan every string. Duplicates in the collection are all returned.
    fn brute_force(&self, needle: &[u8]) -> Vec<&'a T> {
        let index = self.index;
        index
            .strings
            .iter()
            .filter(|&s| contains(s.as_ref(), needle))
            .collect()
    }

    /// Intersect the buckets of `hashes`.
    ///
    /// Stops at the first empty bucket or empty intersection. The two sets
    /// are swapped after each step so neither is reallocated.
    pub fn narrow(&self, hashes: &[WindowHash]) -> FxHashSet<StringId> {
        let mut candidates: FxHashSet<StringId> = FxHashSet::default();
        let mut scratch: FxHashSet<StringId> = FxHashSet::default();

        for (step, &hash) in hashes.iter().enumerate() {
            let bucket = self.index.bucket(hash);
            if bucket.is_empty() {
                trace!(step, hash, "empty bucket");
                candidates.clear();
                return candidates;
            }

            if step == 0 {
                candidates.reserve(bucket.len());
                scratch.reserve(bucket.len());
                candidates.extend(bucket.iter().copied());
                continue;
            }

            scratch.extend(bucket.iter().copied().filter(|id| candidates.contains(id)));
            std::mem::swap(&mut candidates, &mut scratch);
            scratch.clear();

            if candidates.is_empty() {
                trace!(step, "candidate set exhausted");
                return candidates;
            }
        }

        candidates
    }

    /// Drop hash-collision survivors that do not literally contain `needle`.
    /// Matches come back in collection order.
    fn verify(&self, candidates: FxHashSet<StringId>, needle: &[u8]) -> Vec<&'a T> {
        let index = self.index;
        let mut ids: Vec<StringId> = candidates
            .into_iter()
            .filter(|&id| contains(index.strings[id].as_ref(), needle))
            .collect();
        ids.sort_unstable();

        trace!(matches = ids.len(), "verified candidates");
        ids.into_iter().map(|id| &index.strings[id]).collect()
    }
}
