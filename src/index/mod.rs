pub mod build;
pub mod reader;
pub mod shared;
pub mod stats;
pub mod types;

pub use build::IndexBuilder;
pub use reader::Index;
pub use shared::SharedIndex;
pub use stats::IndexStats;
pub use types::*;
