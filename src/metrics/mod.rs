// Report metrics aggregation
// Reduces one report's classified tasks to the counts and duration averages
// shown on the dashboard.

pub mod aggregate;
pub mod reports;
pub mod types;

pub use aggregate::{aggregate, task_timings};
pub use reports::MetricsReporter;
pub use types::{DurationAverage, ReportMetrics, TaskTimings};
