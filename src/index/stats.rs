use crate::index::reader::Index;
use crate::index::types::WINDOW_LEN;
use rustc_hash::FxHashSet;
use serde::Serialize;
use std::fmt;

/// Shape of a built index, for diagnostics
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct IndexStats {
    /// Strings in the collection, duplicates included
    pub strings: usize,
    /// Distinct string values
    pub unique_strings: usize,
    /// Strings shorter than one window (reachable only by short or empty queries)
    pub short_strings: usize,
    /// Total bytes across all strings
    pub total_bytes: usize,
    /// Distinct window hashes
    pub buckets: usize,
    /// Sum of all bucket lengths
    pub postings: usize,
    /// Length of the largest bucket
    pub largest_bucket: usize,
}

impl IndexStats {
    /// Mean bucket length, or 0 for an empty table
    pub fn average_bucket(&self) -> f64 {
        if self.buckets == 0 {
            0.0
        } else {
            self.postings as f64 / self.buckets as f64
        }
    }
}

impl<T: AsRef<[u8]>> Index<T> {
    /// Collect statistics about the string list and the n-gram table
    pub fn stats(&self) -> IndexStats {
        let unique: FxHashSet<&[u8]> = self.strings.iter().map(|s| s.as_ref()).collect();

        IndexStats {
            strings: self.strings.len(),
            unique_strings: unique.len(),
            short_strings: self
                .strings
                .iter()
                .map(|s| s.as_ref().len())
                .filter(|&len| len < WINDOW_LEN)
                .count(),
            total_bytes: self.strings.iter().map(|s| s.as_ref().len()).sum(),
            buckets: self.table.len(),
            postings: self.table.values().map(Vec::len).sum(),
            largest_bucket: self.table.values().map(Vec::len).max().unwrap_or(0),
        }
    }
}

impl fmt::Display for IndexStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Index Statistics")?;
        writeln!(f, "================")?;
        writeln!(f)?;
        writeln!(f, "Strings:          {}", self.strings)?;
        writeln!(f, "Unique strings:   {}", self.unique_strings)?;
        writeln!(f, "Short strings:    {}", self.short_strings)?;
        writeln!(f, "Total bytes:      {}", self.total_bytes)?;
        writeln!(f, "Buckets:          {}", self.buckets)?;
        writeln!(f, "Postings:         {}", self.postings)?;
        writeln!(f, "Largest bucket:   {}", self.largest_bucket)?;
        write!(f, "Average bucket:   {:.2}", self.average_bucket())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_stats() {
        let stats = Index::<String>::new(Vec::new()).stats();
        assert_eq!(stats, IndexStats::default());
        assert_eq!(stats.average_bucket(), 0.0);
    }

    #[test]
    fn test_stats_counts() {
        // "aaaa" has the single window "aaa"; "ab" is too short
        let stats = Index::new(vec!["aaaa", "ab", "aaaa"]).stats();
        assert_eq!(stats.strings, 3);
        assert_eq!(stats.unique_strings, 2);
        assert_eq!(stats.short_strings, 1);
        assert_eq!(stats.total_bytes, 10);
        assert_eq!(stats.buckets, 1);
        assert_eq!(stats.postings, 1);
        assert_eq!(stats.largest_bucket, 1);
        assert_eq!(stats.average_bucket(), 1.0);
    }

    #[test]
    fn test_display() {
        let text = Index::new(vec!["hello"]).stats().to_string();
        assert!(text.contains("Strings:          1"));
        assert!(text.contains("Buckets:          3"));
    }
}
