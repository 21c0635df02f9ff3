//! # gramdex - n-gram substring index
//!
//! gramdex answers "which of these strings contain Q?" for a fixed string
//! collection without scanning every string on every query. The collection
//! is indexed once into a table from 3-byte window hashes to the strings
//! containing those windows; queries intersect the buckets of their own
//! windows and verify what survives with a literal byte comparison.
//!
//! ## Architecture
//!
//! - [`index`] - Index building, the read-only [`Index`], stats and the
//!   [`SharedIndex`] swap handle
//! - [`query`] - Query planning and execution
//! - [`output`] - Match and stats formatting for the CLI
//! - [`utils`] - Window hash, containment and window extraction
//!
//! ## Quick Start
//!
//! ```
//! use gramdex::Index;
//!
//! let index = Index::new(vec!["testing", "est", "test"]);
//!
//! assert_eq!(index.find("tin"), vec![&"testing"]);
//! assert_eq!(index.find("est").len(), 3);
//! assert!(index.find("nope").is_empty());
//! ```
//!
//! ## Semantics
//!
//! Matching is byte-exact and case-sensitive; multi-byte UTF-8 is treated as
//! opaque bytes. An empty query returns every string. Queries shorter than
//! the window length fall back to a linear scan. The index is immutable once
//! built: to change the collection, build a new one.

pub mod index;
pub mod output;
pub mod query;
pub mod utils;

pub use index::{Index, IndexBuilder, IndexConfig, IndexStats, SharedIndex};
pub use query::{QueryExecutor, QueryPlan};
