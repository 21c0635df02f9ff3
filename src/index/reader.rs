use crate::index::types::{StringId, WindowHash};
use crate::query::executor::QueryExecutor;
use crate::query::planner::QueryPlan;
use rustc_hash::FxHashMap;

/// Read-only substring index over a fixed string collection.
///
/// Built once by [`IndexBuilder`](crate::index::IndexBuilder) or
/// [`Index::new`] and never mutated afterwards, so shared references can be
/// queried from any number of threads. Rebuilding means constructing a new
/// `Index`; see [`SharedIndex`](crate::index::SharedIndex) for swapping one in.
#[derive(Debug, Clone)]
pub struct Index<T = String> {
    /// Original inputs, in order, duplicates kept
    pub(crate) strings: Vec<T>,
    /// Window hash -> canonical ids of the strings containing such a window
    pub(crate) table: FxHashMap<WindowHash, Vec<StringId>>,
}

impl<T: AsRef<[u8]>> Index<T> {
    /// Find every string containing `needle` as a contiguous byte sequence.
    ///
    /// An empty needle returns the whole collection. Results are a subset of
    /// [`strings`](Self::strings) and never contain false positives.
    pub fn find(&self, needle: impl AsRef<[u8]>) -> Vec<&T> {
        QueryExecutor::new(self).execute(needle.as_ref())
    }

    /// The plan [`find`](Self::find) would run for `needle`
    pub fn plan(&self, needle: impl AsRef<[u8]>) -> QueryPlan {
        QueryPlan::for_needle(needle.as_ref())
    }

    /// All indexed strings in input order
    pub fn strings(&self) -> &[T] {
        &self.strings
    }

    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }

    /// Get a string by id
    pub fn get(&self, id: StringId) -> Option<&T> {
        self.strings.get(id)
    }

    /// Canonical ids of the strings that produced `hash`. Empty for unknown hashes.
    pub fn bucket(&self, hash: WindowHash) -> &[StringId] {
        self.table.get(&hash).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of distinct window hashes in the table
    pub fn bucket_count(&self) -> usize {
        self.table.len()
    }

    /// Give back the original strings, dropping the table
    pub fn into_strings(self) -> Vec<T> {
        self.strings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index_with_table(entries: Vec<(WindowHash, Vec<StringId>)>) -> Index<&'static str> {
        Index {
            strings: vec!["test1", "test2"],
            table: entries.into_iter().collect(),
        }
    }

    #[test]
    fn test_bucket_lookup() {
        let index = index_with_table(vec![(12345, vec![0, 1])]);
        assert_eq!(index.bucket(12345), &[0, 1]);
        assert!(index.bucket(99999).is_empty());
        assert_eq!(index.bucket_count(), 1);
    }

    #[test]
    fn test_accessors() {
        let index = index_with_table(Vec::new());
        assert_eq!(index.len(), 2);
        assert!(!index.is_empty());
        assert_eq!(index.get(1), Some(&"test2"));
        assert_eq!(index.get(2), None);
        assert_eq!(index.into_strings(), vec!["test1", "test2"]);
    }
}
