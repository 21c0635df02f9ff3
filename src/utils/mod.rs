//! Byte-level primitives shared by the builder and the query engine.
//!
//! ## Modules
//!
//! - [`hash`] - Two-accumulator window hash
//! - [`contains`] - Literal substring containment (the verification step)
//! - [`windows`] - Window extraction for indexing and for queries
//! - [`progress`] - Spinner shim used by the CLI
//!
//! ## Key Functions
//!
//! ```
//! use gramdex::utils::{contains, query_windows, window_hash};
//!
//! // Queries are cut into non-overlapping windows, plus a tail window
//! let windows = query_windows(b"hello world");
//! assert_eq!(windows.len(), 4); // "hel", "lo ", "wor", "rld"
//!
//! // Equal bytes always hash equal
//! assert_eq!(window_hash(b"hel"), window_hash(&b"help"[..3]));
//!
//! assert!(contains(b"hello world", b"o w"));
//! ```

pub mod contains;
pub mod hash;
pub mod progress;
pub mod windows;

pub use contains::*;
pub use hash::*;
pub use windows::*;
