use serde::{Deserialize, Serialize};
use std::fmt;

/// Per-report summary derived from classifying every task and averaging the
/// lifecycle durations. The four bucket counts always sum to `total`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportMetrics {
    pub total: u64,
    pub open: u64,
    pub in_progress: u64,
    pub auto_resolved: u64,
    pub manually_resolved: u64,
    pub avg_time_to_assign: DurationAverage,
    pub avg_time_to_resolve: DurationAverage,
    /// Integer percentage in [0, 100]; 0 for an empty report.
    pub completion_percent: u8,
}

impl ReportMetrics {
    pub fn resolved(&self) -> u64 {
        self.auto_resolved + self.manually_resolved
    }
}

/// Average of positive duration samples in fractional days, or an explicit
/// not-applicable marker when no sample qualified. A zero would be
/// indistinguishable from "the average really is zero", so absence is its
/// own variant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DurationAverage {
    Days(f64),
    NotAvailable,
}

impl fmt::Display for DurationAverage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DurationAverage::Days(avg) => write!(f, "{avg:.1} days"),
            DurationAverage::NotAvailable => f.write_str("N/A"),
        }
    }
}

/// Per-task breakdown shown in the task timing view, in fractional days.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TaskTimings {
    /// Import until pickup (assignment, or resolution if never assigned).
    pub time_open: Option<f64>,
    /// Assignment until resolution.
    pub time_assigned: Option<f64>,
    /// Import until resolution.
    pub time_to_resolve: Option<f64>,
}
