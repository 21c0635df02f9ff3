pub mod executor;
pub mod planner;

pub use executor::QueryExecutor;
pub use planner::QueryPlan;
