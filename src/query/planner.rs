use crate::index::types::WindowHash;
use crate::utils::{query_windows, window_hash};

/// How a single `find` call narrows the collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryPlan {
    /// Empty needle: every string matches
    All,
    /// Needle shorter than one window: scan and verify every string
    BruteForce,
    /// Intersect the buckets of these window hashes, then verify survivors
    Windows(Vec<WindowHash>),
}

impl QueryPlan {
    /// Plan a query for `needle`
    pub fn for_needle(needle: &[u8]) -> Self {
        if needle.is_empty() {
            return QueryPlan::All;
        }

        let windows = query_windows(needle);
        if windows.is_empty() {
            return QueryPlan::BruteForce;
        }

        QueryPlan::Windows(windows.into_iter().map(window_hash).collect())
    }

    /// Whether this plan consults the n-gram table
    pub fn uses_index(&self) -> bool {
        matches!(self, QueryPlan::Windows(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_plan() {
        assert_eq!(QueryPlan::for_needle(b""), QueryPlan::All);
    }

    #[test]
    fn test_short_plan() {
        assert_eq!(QueryPlan::for_needle(b"h"), QueryPlan::BruteForce);
        assert_eq!(QueryPlan::for_needle(b"hi"), QueryPlan::BruteForce);
        assert!(!QueryPlan::BruteForce.uses_index());
    }

    #[test]
    fn test_window_plan() {
        let plan = QueryPlan::for_needle(b"abcdefg");
        assert_eq!(
            plan,
            QueryPlan::Windows(vec![
                window_hash(b"abc"),
                window_hash(b"def"),
                window_hash(b"efg"),
            ])
        );
        assert!(plan.uses_index());
    }

    #[test]
    fn test_exact_window_plan() {
        assert_eq!(
            QueryPlan::for_needle(b"tin"),
            QueryPlan::Windows(vec![window_hash(b"tin")])
        );
    }
}
